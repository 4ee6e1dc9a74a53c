//! Cell composition: style cascade, alignment padding, color emission.
//!
//! The cascade resolves each field independently, highest precedence first:
//! the cell's own style, then the table's role default (header or data),
//! then, for the background only, the table background. Alignment falls back
//! to left. A color activation sequence is written immediately before the
//! padded text and a single reset immediately after, and only when a color
//! actually resolved, so a fully uncolored table contains no escape bytes.

use crate::color::{Color, RESET};
use crate::resolve::display_width;
use crate::types::{Align, CellStyle};

/// Composes one padded, colorized cell into `out`.
///
/// `col_width` is the resolved content width of the column; the cell spans
/// `col_width + 2 * cell_padding` display columns in total.
pub(crate) fn compose_cell(
    out: &mut String,
    text: &str,
    col_width: usize,
    cell_padding: usize,
    role_default: &CellStyle,
    cell_style: &CellStyle,
    table_background: Option<Color>,
) {
    let cell_width = col_width + 2 * cell_padding;
    let text_width = display_width(text);

    let align = cell_style.align.or(role_default.align).unwrap_or(Align::Left);
    let (left_pad, right_pad) = pads(align, cell_width, text_width, cell_padding);

    let foreground = cell_style.foreground.or(role_default.foreground);
    let background = cell_style
        .background
        .or(role_default.background)
        .or(table_background);

    if let Some(color) = foreground {
        out.push_str(color.fg_sequence());
    }
    if let Some(color) = background {
        out.push_str(color.bg_sequence());
    }
    push_spaces(out, left_pad);
    out.push_str(text);
    push_spaces(out, right_pad);
    if foreground.is_some() || background.is_some() {
        out.push_str(RESET);
    }
}

/// Left and right padding for the chosen alignment. The two pads and the
/// text always sum to the full cell width.
fn pads(align: Align, cell_width: usize, text_width: usize, cell_padding: usize) -> (usize, usize) {
    match align {
        Align::Left => (cell_padding, cell_width - text_width - cell_padding),
        Align::Right => (cell_width - text_width - cell_padding, cell_padding),
        Align::Center => {
            let left = (cell_width - text_width).div_ceil(2);
            (left, cell_width - text_width - left)
        }
    }
}

pub(crate) fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(
        text: &str,
        col_width: usize,
        padding: usize,
        role: CellStyle,
        cell: CellStyle,
        table_bg: Option<Color>,
    ) -> String {
        let mut out = String::new();
        compose_cell(&mut out, text, col_width, padding, &role, &cell, table_bg);
        out
    }

    #[test]
    fn pads_sum_to_cell_width_for_every_alignment() {
        for align in [Align::Left, Align::Center, Align::Right] {
            let (left, right) = pads(align, 12, 5, 2);
            assert_eq!(left + 5 + right, 12, "alignment {:?}", align);
        }
    }

    #[test]
    fn left_alignment_keeps_the_configured_padding_on_the_left() {
        assert_eq!(compose("1", 2, 1, CellStyle::new(), CellStyle::new(), None), " 1  ");
    }

    #[test]
    fn right_alignment_keeps_the_configured_padding_on_the_right() {
        let cell = CellStyle::new().align(Align::Right);
        assert_eq!(compose("1", 2, 1, CellStyle::new(), cell, None), "  1 ");
    }

    #[test]
    fn center_alignment_rounds_the_left_pad_up() {
        let cell = CellStyle::new().align(Align::Center);
        // Cell width 5, text width 2: left pad ceil(3/2) = 2, right pad 1.
        assert_eq!(compose("ab", 3, 1, CellStyle::new(), cell, None), "  ab ");
    }

    #[test]
    fn unstyled_cell_contains_no_escape_bytes() {
        let out = compose("x", 3, 1, CellStyle::new(), CellStyle::new(), None);
        assert!(!out.contains('\x1b'));
        assert_eq!(out, " x   ");
    }

    #[test]
    fn explicit_cell_style_wins_over_the_role_default() {
        let role = CellStyle::new().bg(Color::Blue);
        let cell = CellStyle::new().bg(Color::Red);
        let out = compose("x", 1, 0, role, cell, None);
        assert!(out.contains(Color::Red.bg_sequence()));
        assert!(!out.contains(Color::Blue.bg_sequence()));
    }

    #[test]
    fn role_default_fills_in_when_the_cell_is_silent() {
        let role = CellStyle::new().bg(Color::Blue);
        let out = compose("x", 1, 0, role, CellStyle::new(), None);
        assert!(out.contains(Color::Blue.bg_sequence()));
    }

    #[test]
    fn only_the_background_falls_back_to_the_table_background() {
        let out = compose("x", 1, 0, CellStyle::new(), CellStyle::new(), Some(Color::Green));
        assert!(out.contains(Color::Green.bg_sequence()));
        // No foreground activation appears anywhere.
        assert!(!out.contains("\x1b[3"));
        assert!(!out.contains("\x1b[9"));
    }

    #[test]
    fn activation_precedes_the_padding_and_reset_follows_it() {
        let cell = CellStyle::new().fg(Color::Cyan);
        let out = compose("hi", 4, 1, CellStyle::new(), cell, None);
        assert_eq!(out, "\x1b[36m hi    \x1b[0m");
    }

    #[test]
    fn alignment_cascades_from_the_role_default() {
        let role = CellStyle::new().align(Align::Right);
        assert_eq!(compose("1", 2, 1, role, CellStyle::new(), None), "  1 ");
        // The cell's own alignment still wins.
        let cell = CellStyle::new().align(Align::Left);
        assert_eq!(compose("1", 2, 1, role, cell, None), " 1  ");
    }
}
