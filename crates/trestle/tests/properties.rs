//! Property tests over the rendering pipeline.

use proptest::prelude::*;

use trestle::{display_width, ColumnSpec, Table, TableStyle};

proptest! {
    /// Every line of a rendered frame spans the same number of display
    /// columns, whatever the cell text, padding, or margin.
    #[test]
    fn frame_lines_share_one_display_width(
        rows in prop::collection::vec(prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 3), 1..6),
        cell_padding in 0usize..4,
        h_margin in 0usize..3,
    ) {
        let columns = vec![
            ColumnSpec::new("one"),
            ColumnSpec::new("two"),
            ColumnSpec::new("three"),
        ];
        let style = TableStyle {
            cell_padding,
            h_margin,
            row_separators: true,
            ..TableStyle::default()
        };
        let mut table = Table::styled(columns, style);
        for row in rows {
            table.push_row(row).unwrap();
        }

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(display_width).collect();
        prop_assert!(!widths.is_empty());
        prop_assert!(
            widths.iter().all(|w| *w == widths[0]),
            "uneven frame: {:?}",
            widths
        );
    }

    /// A column is exactly as wide as the longest of its trimmed header and
    /// trimmed cells. Checked through the rendered frame width of a
    /// single-column table with no padding: content plus the two verticals.
    #[test]
    fn column_width_tracks_the_longest_trimmed_text(
        cells in prop::collection::vec("[ ]{0,2}[a-z]{0,10}[ ]{0,2}", 1..8),
    ) {
        let header = "Key";
        let expected = cells
            .iter()
            .map(|cell| cell.trim().len())
            .max()
            .unwrap()
            .max(header.len());

        let style = TableStyle {
            cell_padding: 0,
            ..TableStyle::default()
        };
        let mut table = Table::styled(vec![ColumnSpec::new("k").header(header)], style);
        for cell in cells {
            table.push_row(vec![cell]).unwrap();
        }

        let rendered = table.render();
        let first = rendered.lines().next().unwrap();
        prop_assert_eq!(display_width(first), expected + 2);
    }

    /// Left pad, text, and right pad always sum to the full cell span:
    /// with only ASCII content, byte length of a data line is margin +
    /// verticals + (width + 2 * padding) per column.
    #[test]
    fn pads_and_text_fill_each_cell_exactly(
        text in "[a-z]{1,10}",
        cell_padding in 0usize..4,
    ) {
        let style = TableStyle {
            cell_padding,
            ..TableStyle::default()
        };
        let mut table = Table::styled(vec![ColumnSpec::new("k").header("K")], style);
        table.push_row(vec![text.clone()]).unwrap();

        let width = text.len().max(1);
        let rendered = table.render();
        for line in rendered.lines() {
            prop_assert_eq!(display_width(line), width + 2 * cell_padding + 2);
        }
    }
}
