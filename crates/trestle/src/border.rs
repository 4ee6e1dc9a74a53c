//! Border styles and their glyph sets.
//!
//! Every border style maps to a fixed set of eleven glyphs: four corners,
//! the horizontal and vertical lines, four T-junctions, and the cross where
//! interior lines meet. [`BorderKind::glyphs`] is total over the closed set
//! of styles, so an unsupported style is unrepresentable.

use serde::{Deserialize, Serialize};

/// The characters used to draw one border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub top_t: char,
    pub bottom_t: char,
    pub right_t: char,
    pub left_t: char,
    pub cross: char,
}

impl GlyphSet {
    /// The glyphs of Markdown mode: a pipe cell delimiter and a dash rule.
    ///
    /// Every junction role collapses to the pipe so the under-header rule
    /// comes out as `|----|----|`, the form Markdown renderers expect.
    pub const MARKDOWN: GlyphSet = GlyphSet {
        top_left: '|',
        top_right: '|',
        bottom_left: '|',
        bottom_right: '|',
        horizontal: '-',
        vertical: '|',
        top_t: '|',
        bottom_t: '|',
        right_t: '|',
        left_t: '|',
        cross: '|',
    };
}

/// The available border styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderKind {
    /// Single line box drawing: `┌ ┐ └ ┘ ─ │ ┬ ┴ ┤ ├ ┼`
    #[default]
    SingleLine,
    /// Heavy single line: `┏ ┓ ┗ ┛ ━ ┃ ┳ ┻ ┫ ┣ ╋`
    SingleBoldLine,
    /// Double line: `╔ ╗ ╚ ╝ ═ ║ ╦ ╩ ╣ ╠ ╬`
    DoubleLine,
    /// Double verticals with single horizontals: `╓ ╖ ╙ ╜ ─ ║ ╥ ╨ ╢ ╟ ╫`
    DoubleToSingleLine,
    /// Single verticals with double horizontals: `╒ ╕ ╘ ╛ ═ │ ╤ ╧ ╡ ╞ ╪`
    SingleToDoubleLine,
    /// Dashed single line: `┌ ┐ └ ┘ ╌ ╎ ┬ ┴ ┤ ├ ┼`
    SingleDashedLine,
    /// Dashed heavy line: `┏ ┓ ┗ ┛ ╍ ╏ ┳ ┻ ┫ ┣ ╋`
    SingleDashedBoldLine,
    /// Rounded corners: `╭ ╮ ╰ ╯ ─ │ ┬ ┴ ┤ ├ ┼`
    SingleCurvedLine,
    /// Dashes everywhere, in the spirit of typewriter tables.
    GoodOldAscii,
    /// Plus signs at the junctions, dashes in between.
    ImprovedAscii,
}

impl BorderKind {
    /// The box-drawing characters for this border style.
    pub fn glyphs(self) -> GlyphSet {
        match self {
            BorderKind::SingleLine => GlyphSet {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                top_t: '┬',
                bottom_t: '┴',
                right_t: '┤',
                left_t: '├',
                cross: '┼',
            },
            BorderKind::SingleBoldLine => GlyphSet {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '━',
                vertical: '┃',
                top_t: '┳',
                bottom_t: '┻',
                right_t: '┫',
                left_t: '┣',
                cross: '╋',
            },
            BorderKind::DoubleLine => GlyphSet {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                top_t: '╦',
                bottom_t: '╩',
                right_t: '╣',
                left_t: '╠',
                cross: '╬',
            },
            BorderKind::DoubleToSingleLine => GlyphSet {
                top_left: '╓',
                top_right: '╖',
                bottom_left: '╙',
                bottom_right: '╜',
                horizontal: '─',
                vertical: '║',
                top_t: '╥',
                bottom_t: '╨',
                right_t: '╢',
                left_t: '╟',
                cross: '╫',
            },
            BorderKind::SingleToDoubleLine => GlyphSet {
                top_left: '╒',
                top_right: '╕',
                bottom_left: '╘',
                bottom_right: '╛',
                horizontal: '═',
                vertical: '│',
                top_t: '╤',
                bottom_t: '╧',
                right_t: '╡',
                left_t: '╞',
                cross: '╪',
            },
            BorderKind::SingleDashedLine => GlyphSet {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '╌',
                vertical: '╎',
                top_t: '┬',
                bottom_t: '┴',
                right_t: '┤',
                left_t: '├',
                cross: '┼',
            },
            BorderKind::SingleDashedBoldLine => GlyphSet {
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                horizontal: '╍',
                vertical: '╏',
                top_t: '┳',
                bottom_t: '┻',
                right_t: '┫',
                left_t: '┣',
                cross: '╋',
            },
            BorderKind::SingleCurvedLine => GlyphSet {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                horizontal: '─',
                vertical: '│',
                top_t: '┬',
                bottom_t: '┴',
                right_t: '┤',
                left_t: '├',
                cross: '┼',
            },
            BorderKind::GoodOldAscii => GlyphSet {
                top_left: '-',
                top_right: '-',
                bottom_left: '-',
                bottom_right: '-',
                horizontal: '-',
                vertical: '│',
                top_t: '-',
                bottom_t: '-',
                right_t: '-',
                left_t: '-',
                cross: '-',
            },
            BorderKind::ImprovedAscii => GlyphSet {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '│',
                top_t: '+',
                bottom_t: '+',
                right_t: '+',
                left_t: '+',
                cross: '+',
            },
        }
    }

    /// Whether drawing this style needs more than the basic box-drawing
    /// repertoire from the output encoding.
    ///
    /// The output session must be told before any byte is written; see
    /// [`crate::TableStyle::requires_extended_encoding`].
    pub fn requires_extended_encoding(self) -> bool {
        matches!(
            self,
            BorderKind::SingleBoldLine
                | BorderKind::SingleDashedBoldLine
                | BorderKind::SingleCurvedLine
                | BorderKind::SingleDashedLine
        )
    }
}
