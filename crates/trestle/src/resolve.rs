//! Column width resolution.
//!
//! A column is exactly as wide as the widest of its trimmed header and every
//! trimmed cell in it. Cell padding is added symmetrically at composition
//! time, never folded into the width. Widths are measured in display
//! columns, so CJK and other wide characters count correctly.

use unicode_width::UnicodeWidthStr;

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Resolves the width of one column from its header and cell text.
///
/// With no rows the header alone decides the width.
pub(crate) fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.fold(display_width(header.trim()), |width, text| {
        width.max(display_width(text.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_alone_decides_when_there_are_no_cells() {
        assert_eq!(column_width("Name", std::iter::empty()), 4);
    }

    #[test]
    fn widest_cell_wins_over_a_short_header() {
        let cells = ["1", "Alice", "Bob"];
        assert_eq!(column_width("Id", cells.iter().copied()), 5);
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let cells = ["  x  "];
        assert_eq!(column_width("  Id  ", cells.iter().copied()), 2);
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        assert_eq!(display_width("日本"), 4);
        let cells = ["日本"];
        assert_eq!(column_width("Id", cells.iter().copied()), 4);
    }

    #[test]
    fn changing_one_cell_changes_only_its_own_column() {
        let short = ["ab"];
        let long = ["abcdef"];
        assert_eq!(column_width("Id", short.iter().copied()), 2);
        assert_eq!(column_width("Id", long.iter().copied()), 6);
        // A second column resolved from unrelated cells is unaffected.
        let other = ["xyz"];
        assert_eq!(column_width("Name", other.iter().copied()), 4);
    }
}
