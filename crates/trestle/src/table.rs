//! Table assembly and rendering.
//!
//! [`Table`] owns the visible columns, the data rows, and a style, and
//! renders them in a fixed sequence: vertical margin, top border, header
//! row, under-header rule, data rows with optional separators, bottom
//! border, vertical margin. Markdown mode renders only the header row, the
//! underline rule, and the data rows, with all styling bypassed.
//!
//! Rendering is pure ([`Table::render`] returns the exact output string);
//! [`Table::print`] writes that string to stdout inside a managed output
//! session, line by line when animation is on.

use std::io::Write;
use std::thread;

use serde::Serialize;

use crate::border::GlyphSet;
use crate::color::{Color, RESET};
use crate::compose::{compose_cell, push_spaces};
use crate::error::TableError;
use crate::resolve::column_width;
use crate::rule::{RuleKind, RuleTemplate};
use crate::session::{ambient, with_managed_output};
use crate::traits::{row_from, ColumnSpec, TableRecord};
use crate::types::{default_style, CellStyle, PrintMode, TableStyle};

/// One cell of a data row: pre-formatted text plus its style override.
#[derive(Clone, Debug)]
struct Cell {
    text: String,
    style: CellStyle,
}

impl Cell {
    fn new(text: String, style: CellStyle) -> Self {
        Cell {
            text: text.trim().to_string(),
            style,
        }
    }
}

/// A table ready to render: visible columns, data rows, and a style.
///
/// Rows are validated against the column count as they are added, so a
/// constructed table always satisfies the positional invariant that cell
/// `i` of every row belongs to column `i`.
#[derive(Clone, Debug)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<Cell>>,
    style: TableStyle,
}

impl Table {
    /// An empty table over the given columns, using the process default
    /// style. Hidden columns are dropped here.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self::styled(columns, default_style())
    }

    /// An empty table over the given columns with an explicit style.
    pub fn styled(columns: Vec<ColumnSpec>, style: TableStyle) -> Self {
        let columns = columns.into_iter().filter(|col| !col.hidden).collect();
        Table {
            columns,
            rows: Vec::new(),
            style,
        }
    }

    /// Builds a table from records, using the process default style.
    pub fn from_records<T: TableRecord>(items: &[T]) -> Result<Self, TableError> {
        Self::from_records_styled(items, default_style())
    }

    /// Builds a table from records with an explicit style.
    ///
    /// Each record's row must carry one cell per declared column (hidden
    /// ones included); hidden cells are filtered out positionally.
    pub fn from_records_styled<T: TableRecord>(
        items: &[T],
        style: TableStyle,
    ) -> Result<Self, TableError> {
        let columns = T::columns();
        let declared = columns.len();
        let keep: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, col)| !col.hidden)
            .map(|(i, _)| i)
            .collect();

        let mut table = Table::styled(columns, style);
        for (row, item) in items.iter().enumerate() {
            let mut values = item.to_row();
            if values.len() != declared {
                return Err(TableError::ColumnCountMismatch {
                    row,
                    expected: declared,
                    found: values.len(),
                });
            }
            let visible = keep.iter().map(|&i| std::mem::take(&mut values[i])).collect();
            table.push_row(visible)?;
        }
        Ok(table)
    }

    /// Builds a table from serializable records, extracting each cell by
    /// the column's source key.
    pub fn from_serialize<T: Serialize>(
        columns: Vec<ColumnSpec>,
        items: &[T],
        style: TableStyle,
    ) -> Result<Self, TableError> {
        let mut table = Table::styled(columns, style);
        for item in items {
            let values = row_from(&table.columns, item)?;
            table.push_row(values)?;
        }
        Ok(table)
    }

    /// The two-column `Property`/`Value` view of a single record, using the
    /// process default style.
    pub fn record_view<T: TableRecord>(item: &T) -> Result<Self, TableError> {
        Self::record_view_styled(item, default_style())
    }

    /// The two-column `Property`/`Value` view of a single record.
    ///
    /// Each visible column becomes one row: the property cell carries the
    /// column's header text and header style, the value cell the formatted
    /// value and the column's cell style.
    pub fn record_view_styled<T: TableRecord>(
        item: &T,
        style: TableStyle,
    ) -> Result<Self, TableError> {
        let columns = T::columns();
        let values = item.to_row();
        if values.len() != columns.len() {
            return Err(TableError::ColumnCountMismatch {
                row: 0,
                expected: columns.len(),
                found: values.len(),
            });
        }

        let view = vec![
            ColumnSpec::new("property").header("Property"),
            ColumnSpec::new("value").header("Value"),
        ];
        let mut table = Table::styled(view, style);
        for (col, value) in columns.iter().zip(values).filter(|(col, _)| !col.hidden) {
            table.rows.push(vec![
                Cell::new(col.display_name().to_string(), col.header_style),
                Cell::new(value, col.cell_style),
            ]);
        }
        Ok(table)
    }

    /// Appends a data row of pre-formatted cell text, one entry per visible
    /// column. Fails fast on a count mismatch, before anything renders.
    pub fn push_row(&mut self, values: Vec<String>) -> Result<(), TableError> {
        if values.len() != self.columns.len() {
            return Err(TableError::ColumnCountMismatch {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: values.len(),
            });
        }
        let row = values
            .into_iter()
            .zip(&self.columns)
            .map(|(text, col)| Cell::new(text, col.cell_style))
            .collect();
        self.rows.push(row);
        Ok(())
    }

    /// The table's style.
    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Mutable access to the table's style.
    pub fn style_mut(&mut self) -> &mut TableStyle {
        &mut self.style
    }

    /// Number of visible columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Renders the table to its exact output string.
    ///
    /// An empty column or row set renders to an empty string; nothing else
    /// about the table is validated here, construction already was.
    pub fn render(&self) -> String {
        if self.columns.is_empty() || self.rows.is_empty() {
            return String::new();
        }

        let style = &self.style;
        let markdown = style.mode == PrintMode::Markdown;

        let cell_padding = if markdown { 1 } else { style.cell_padding };
        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| {
                column_width(
                    self.columns[i].display_name(),
                    self.rows.iter().map(|row| row[i].text.as_str()),
                )
            })
            .collect();

        let template = RuleTemplate::new(&widths, cell_padding);
        let glyphs = if markdown {
            GlyphSet::MARKDOWN
        } else {
            style.border.glyphs()
        };

        let border_fg = if markdown { None } else { style.border_color };
        let table_bg = if markdown { None } else { style.background };
        let unstyled = CellStyle::new();
        let header_default = if markdown { unstyled } else { style.header_style };
        let data_default = if markdown { unstyled } else { style.data_style };
        let indent = if markdown { 0 } else { style.h_margin };

        let mut out = String::new();

        if !markdown {
            push_blank_lines(&mut out, style.v_margin);
            push_spaces(&mut out, indent);
            push_colored(
                &mut out,
                border_fg,
                table_bg,
                &template.realize(&glyphs, RuleKind::Top),
            );
            out.push('\n');
        }

        // Header row.
        push_spaces(&mut out, indent);
        for (i, col) in self.columns.iter().enumerate() {
            push_glyph(&mut out, border_fg, table_bg, glyphs.vertical);
            let header_style = if markdown { unstyled } else { col.header_style };
            compose_cell(
                &mut out,
                col.display_name().trim(),
                widths[i],
                cell_padding,
                &header_default,
                &header_style,
                table_bg,
            );
        }
        push_glyph(&mut out, border_fg, table_bg, glyphs.vertical);
        out.push('\n');

        push_spaces(&mut out, indent);
        push_colored(
            &mut out,
            border_fg,
            table_bg,
            &template.realize(&glyphs, RuleKind::UnderHeader),
        );
        out.push('\n');

        // The separator rule is realized once and reused between rows; a
        // distinct separator border substitutes glyphs without touching the
        // template.
        let separator = if !markdown && style.row_separators {
            let sep_glyphs = style.separator_border.unwrap_or(style.border).glyphs();
            Some(template.realize(&sep_glyphs, RuleKind::RowSeparator))
        } else {
            None
        };

        for (r, row) in self.rows.iter().enumerate() {
            push_spaces(&mut out, indent);
            for (i, cell) in row.iter().enumerate() {
                push_glyph(&mut out, border_fg, table_bg, glyphs.vertical);
                let cell_style = if markdown { unstyled } else { cell.style };
                compose_cell(
                    &mut out,
                    &cell.text,
                    widths[i],
                    cell_padding,
                    &data_default,
                    &cell_style,
                    table_bg,
                );
            }
            push_glyph(&mut out, border_fg, table_bg, glyphs.vertical);
            out.push('\n');

            if r + 1 < self.rows.len() {
                if let Some(rule) = &separator {
                    push_spaces(&mut out, indent);
                    push_colored(&mut out, border_fg, table_bg, rule);
                    out.push('\n');
                }
            }
        }

        if !markdown {
            push_spaces(&mut out, indent);
            push_colored(
                &mut out,
                border_fg,
                table_bg,
                &template.realize(&glyphs, RuleKind::Bottom),
            );
            out.push('\n');
            push_blank_lines(&mut out, style.v_margin);
        }

        out
    }

    /// Renders the table and writes it to stdout inside a managed output
    /// session. With animation on (Normal mode only), completed lines are
    /// revealed one at a time with the clamped delay between them.
    pub fn print(&self) -> Result<(), TableError> {
        let rendered = self.render();
        if rendered.is_empty() {
            return Ok(());
        }

        let animate = self.style.animate && self.style.mode == PrintMode::Normal;
        let delay = self.style.animation_delay();

        with_managed_output(self.style.requires_extended_encoding(), ambient(), |term| {
            if animate {
                for line in rendered.lines() {
                    thread::sleep(delay);
                    writeln!(term, "{}", line)?;
                }
            } else {
                term.write_all(rendered.as_bytes())?;
            }
            term.flush()?;
            Ok(())
        })
    }
}

/// Writes `piece` with the border colors around it, when any are set.
fn push_colored(out: &mut String, fg: Option<Color>, bg: Option<Color>, piece: &str) {
    if let Some(color) = fg {
        out.push_str(color.fg_sequence());
    }
    if let Some(color) = bg {
        out.push_str(color.bg_sequence());
    }
    out.push_str(piece);
    if fg.is_some() || bg.is_some() {
        out.push_str(RESET);
    }
}

fn push_glyph(out: &mut String, fg: Option<Color>, bg: Option<Color>, glyph: char) {
    let mut buf = [0u8; 4];
    push_colored(out, fg, bg, glyph.encode_utf8(&mut buf));
}

fn push_blank_lines(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('\n');
    }
}

/// Prints a slice of records as a table using the process default style.
pub fn print_table<T: TableRecord>(items: &[T]) -> Result<(), TableError> {
    Table::from_records(items)?.print()
}

/// Prints a slice of records as a table with an explicit style.
pub fn print_table_styled<T: TableRecord>(
    items: &[T],
    style: &TableStyle,
) -> Result<(), TableError> {
    Table::from_records_styled(items, style.clone())?.print()
}

/// Prints a slice of records as a table, first applying `configure` to a
/// freshly constructed default style.
pub fn print_table_with<T, F>(items: &[T], configure: F) -> Result<(), TableError>
where
    T: TableRecord,
    F: FnOnce(&mut TableStyle),
{
    let mut style = TableStyle::default();
    configure(&mut style);
    Table::from_records_styled(items, style)?.print()
}

/// Prints one record as a `Property`/`Value` table using the process
/// default style.
pub fn print_record<T: TableRecord>(item: &T) -> Result<(), TableError> {
    Table::record_view(item)?.print()
}

/// Prints one record as a `Property`/`Value` table with an explicit style.
pub fn print_record_styled<T: TableRecord>(
    item: &T,
    style: &TableStyle,
) -> Result<(), TableError> {
    Table::record_view_styled(item, style.clone())?.print()
}

/// Prints one record as a `Property`/`Value` table, first applying
/// `configure` to a freshly constructed default style.
pub fn print_record_with<T, F>(item: &T, configure: F) -> Result<(), TableError>
where
    T: TableRecord,
    F: FnOnce(&mut TableStyle),
{
    let mut style = TableStyle::default();
    configure(&mut style);
    Table::record_view_styled(item, style)?.print()
}

#[cfg(test)]
mod tests {
    use crate::border::BorderKind;
    use crate::types::Align;

    use super::*;

    struct Person {
        id: u32,
        name: &'static str,
        secret: &'static str,
    }

    impl TableRecord for Person {
        fn columns() -> Vec<ColumnSpec> {
            vec![
                ColumnSpec::new("id").header("Id"),
                ColumnSpec::new("name").header("Name"),
                ColumnSpec::new("secret").hidden(),
            ]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.id.to_string(), self.name.to_string(), self.secret.to_string()]
        }
    }

    fn people() -> Vec<Person> {
        vec![Person {
            id: 1,
            name: "Alice",
            secret: "classified",
        }]
    }

    #[test]
    fn push_row_rejects_mismatched_lengths() {
        let mut table = Table::styled(
            vec![ColumnSpec::new("a"), ColumnSpec::new("b")],
            TableStyle::default(),
        );
        let err = table.push_row(vec!["only one".into()]).unwrap_err();
        match err {
            TableError::ColumnCountMismatch { row, expected, found } => {
                assert_eq!((row, expected, found), (0, 2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_tables_render_to_nothing() {
        let no_columns = Table::styled(Vec::new(), TableStyle::default());
        assert_eq!(no_columns.render(), "");

        let no_rows = Table::styled(vec![ColumnSpec::new("a")], TableStyle::default());
        assert_eq!(no_rows.render(), "");
    }

    #[test]
    fn hidden_columns_are_dropped_positionally() {
        let table = Table::from_records_styled(&people(), TableStyle::default()).unwrap();
        assert_eq!(table.num_columns(), 2);
        let rendered = table.render();
        assert!(rendered.contains("Alice"));
        assert!(!rendered.contains("classified"));
    }

    #[test]
    fn single_line_border_end_to_end() {
        let table = Table::from_records_styled(&people(), TableStyle::default()).unwrap();
        let expected = "\
┌────┬───────┐
│ Id │ Name  │
├────┼───────┤
│ 1  │ Alice │
└────┴───────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn markdown_mode_end_to_end() {
        let style = TableStyle {
            mode: PrintMode::Markdown,
            ..TableStyle::default()
        };
        let table = Table::from_records_styled(&people(), style).unwrap();
        let expected = "\
| Id | Name  |
|----|-------|
| 1  | Alice |
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn markdown_ignores_margins_padding_and_colors() {
        let style = TableStyle {
            mode: PrintMode::Markdown,
            cell_padding: 4,
            h_margin: 6,
            v_margin: 2,
            border_color: Some(Color::Red),
            header_style: CellStyle::new().fg(Color::Cyan).align(Align::Right),
            ..TableStyle::default()
        };
        let table = Table::from_records_styled(&people(), style).unwrap();
        let rendered = table.render();
        assert!(!rendered.contains('\x1b'));
        assert!(rendered.starts_with("| Id |"));
    }

    #[test]
    fn row_separators_use_the_distinct_border() {
        let style = TableStyle {
            row_separators: true,
            separator_border: Some(BorderKind::SingleLine),
            border: BorderKind::DoubleLine,
            ..TableStyle::default()
        };
        let mut table = Table::styled(vec![ColumnSpec::new("a").header("A")], style);
        table.push_row(vec!["1".into()]).unwrap();
        table.push_row(vec!["2".into()]).unwrap();

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec!["╔═══╗", "║ A ║", "╠═══╣", "║ 1 ║", "├───┤", "║ 2 ║", "╚═══╝"]
        );
    }

    #[test]
    fn no_separator_after_the_last_row() {
        let style = TableStyle {
            row_separators: true,
            ..TableStyle::default()
        };
        let mut table = Table::styled(vec![ColumnSpec::new("a").header("A")], style);
        table.push_row(vec!["1".into()]).unwrap();
        table.push_row(vec!["2".into()]).unwrap();

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        // A separator between the two rows, none before the bottom border.
        assert_eq!(
            lines,
            vec!["┌───┐", "│ A │", "├───┤", "│ 1 │", "├───┤", "│ 2 │", "└───┘"]
        );
    }

    #[test]
    fn margins_surround_the_frame() {
        let style = TableStyle {
            h_margin: 2,
            v_margin: 1,
            ..TableStyle::default()
        };
        let mut table = Table::styled(vec![ColumnSpec::new("a").header("A")], style);
        table.push_row(vec!["1".into()]).unwrap();

        let expected = "\n  ┌───┐\n  │ A │\n  ├───┤\n  │ 1 │\n  └───┘\n\n";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn record_view_pairs_properties_with_values() {
        let table = Table::record_view_styled(&people()[0], TableStyle::default()).unwrap();
        let expected = "\
┌──────────┬───────┐
│ Property │ Value │
├──────────┼───────┤
│ Id       │ 1     │
│ Name     │ Alice │
└──────────┴───────┘
";
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn cell_text_is_trimmed_on_ingestion() {
        let mut table = Table::styled(vec![ColumnSpec::new("a").header("A")], TableStyle::default());
        table.push_row(vec!["  padded  ".into()]).unwrap();
        let rendered = table.render();
        assert!(rendered.contains("│ padded │"));
    }
}
