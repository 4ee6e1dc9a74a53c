//! Horizontal rule templating.
//!
//! A table draws up to four kinds of horizontal rule: the top border, the
//! rule under the header, the separator between data rows, and the bottom
//! border. All four share the same geometry; only the glyph chosen for each
//! position differs. Instead of recomputing which glyph lands where for
//! every rule, one abstract template is built per render call and realized
//! against a glyph set per rule kind. Realizing the same template against a
//! second glyph set is how a distinct row-separator border and the Markdown
//! underline come out of a single code path.

use crate::border::GlyphSet;

/// The four horizontal rules a table can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RuleKind {
    Top,
    UnderHeader,
    RowSeparator,
    Bottom,
}

/// Abstract position role within a rule: corners at the ends, fill across
/// each column, a junction between adjacent columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Start,
    Fill,
    Junction,
    End,
}

/// The role sequence shared by every rule of one table.
#[derive(Clone, Debug)]
pub(crate) struct RuleTemplate {
    slots: Vec<Slot>,
}

impl RuleTemplate {
    /// Builds the template from resolved column widths. Fill repeats
    /// `width + 2 * cell_padding` times per column; a junction sits between
    /// each pair of adjacent columns.
    pub(crate) fn new(widths: &[usize], cell_padding: usize) -> Self {
        let fill: usize = widths.iter().map(|w| w + 2 * cell_padding).sum();
        let mut slots = Vec::with_capacity(fill + widths.len() + 1);

        slots.push(Slot::Start);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                slots.push(Slot::Junction);
            }
            slots.extend(std::iter::repeat(Slot::Fill).take(width + 2 * cell_padding));
        }
        slots.push(Slot::End);

        RuleTemplate { slots }
    }

    /// Realizes the template against a glyph set for one rule kind.
    pub(crate) fn realize(&self, glyphs: &GlyphSet, kind: RuleKind) -> String {
        let (start, fill, junction, end) = match kind {
            RuleKind::Top => (
                glyphs.top_left,
                glyphs.horizontal,
                glyphs.top_t,
                glyphs.top_right,
            ),
            RuleKind::UnderHeader | RuleKind::RowSeparator => (
                glyphs.left_t,
                glyphs.horizontal,
                glyphs.cross,
                glyphs.right_t,
            ),
            RuleKind::Bottom => (
                glyphs.bottom_left,
                glyphs.horizontal,
                glyphs.bottom_t,
                glyphs.bottom_right,
            ),
        };

        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Start => start,
                Slot::Fill => fill,
                Slot::Junction => junction,
                Slot::End => end,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::border::BorderKind;

    use super::*;

    #[test]
    fn top_rule_for_two_columns() {
        let template = RuleTemplate::new(&[2, 5], 1);
        let rule = template.realize(&BorderKind::SingleLine.glyphs(), RuleKind::Top);
        assert_eq!(rule, "┌────┬───────┐");
    }

    #[test]
    fn all_four_kinds_share_one_geometry() {
        let template = RuleTemplate::new(&[3, 1, 4], 0);
        let glyphs = BorderKind::SingleLine.glyphs();

        let top = template.realize(&glyphs, RuleKind::Top);
        let under = template.realize(&glyphs, RuleKind::UnderHeader);
        let sep = template.realize(&glyphs, RuleKind::RowSeparator);
        let bottom = template.realize(&glyphs, RuleKind::Bottom);

        assert_eq!(top, "┌───┬─┬────┐");
        assert_eq!(under, "├───┼─┼────┤");
        assert_eq!(sep, under);
        assert_eq!(bottom, "└───┴─┴────┘");
    }

    #[test]
    fn two_border_styles_differ_only_in_glyph_identity() {
        let template = RuleTemplate::new(&[2, 2], 1);
        let single = template.realize(&BorderKind::SingleLine.glyphs(), RuleKind::Top);
        let double = template.realize(&BorderKind::DoubleLine.glyphs(), RuleKind::Top);

        assert_eq!(single.chars().count(), double.chars().count());
        for (a, b) in single.chars().zip(double.chars()) {
            // Same role at every position; only the character changes.
            let a_is_junctionish = a == '┌' || a == '┬' || a == '┐';
            let b_is_junctionish = b == '╔' || b == '╦' || b == '╗';
            assert_eq!(a_is_junctionish, b_is_junctionish);
        }
    }

    #[test]
    fn markdown_underline_comes_from_the_same_template() {
        let template = RuleTemplate::new(&[2, 5], 1);
        let rule = template.realize(&GlyphSet::MARKDOWN, RuleKind::UnderHeader);
        assert_eq!(rule, "|----|-------|");
    }

    #[test]
    fn single_column_has_no_junction() {
        let template = RuleTemplate::new(&[4], 1);
        let rule = template.realize(&BorderKind::SingleLine.glyphs(), RuleKind::Bottom);
        assert_eq!(rule, "└──────┘");
    }
}
