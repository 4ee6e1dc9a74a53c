//! The record boundary: column descriptors and row extraction.
//!
//! The rendering core never inspects types. A record shape is described
//! once, as an ordered list of [`ColumnSpec`]s, and each record supplies its
//! pre-formatted cell text, either through the [`TableRecord`] trait or by
//! serde extraction with [`row_from`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TableError;
use crate::types::CellStyle;

/// Describes one column of a table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Source key the cell value is extracted by (field name, dot notation
    /// for nested fields).
    pub key: String,
    /// Header text. When blank, the key doubles as the header.
    pub header: String,
    /// Style for the header cell of this column.
    pub header_style: CellStyle,
    /// Style for every data cell of this column.
    pub cell_style: CellStyle,
    /// Hidden columns are dropped, together with their cells, when a table
    /// is built from records.
    pub hidden: bool,
}

impl ColumnSpec {
    /// A column for `key`, with the key as its header and no styling.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        ColumnSpec {
            header: key.clone(),
            key,
            header_style: CellStyle::default(),
            cell_style: CellStyle::default(),
            hidden: false,
        }
    }

    /// Sets the header text.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets the header cell style.
    pub fn header_style(mut self, style: CellStyle) -> Self {
        self.header_style = style;
        self
    }

    /// Sets the data cell style.
    pub fn cell_style(mut self, style: CellStyle) -> Self {
        self.cell_style = style;
        self
    }

    /// Excludes this column from rendered output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// The text shown in the header row; falls back to the key when the
    /// header is blank.
    pub(crate) fn display_name(&self) -> &str {
        if self.header.trim().is_empty() {
            &self.key
        } else {
            &self.header
        }
    }
}

/// Types that know their table shape.
///
/// Implementations describe their columns once and convert each instance
/// into one row of pre-formatted cell text. Formatting (numbers, dates)
/// happens here, before the renderer sees the value.
///
/// # Example
///
/// ```rust
/// use trestle::{Align, CellStyle, ColumnSpec, TableRecord};
///
/// struct Task {
///     id: u32,
///     title: String,
/// }
///
/// impl TableRecord for Task {
///     fn columns() -> Vec<ColumnSpec> {
///         vec![
///             ColumnSpec::new("id").header("Id").cell_style(CellStyle::new().align(Align::Right)),
///             ColumnSpec::new("title").header("Title"),
///         ]
///     }
///
///     fn to_row(&self) -> Vec<String> {
///         vec![self.id.to_string(), self.title.clone()]
///     }
/// }
/// ```
pub trait TableRecord {
    /// Ordered column descriptors for this record type, hidden columns
    /// included.
    fn columns() -> Vec<ColumnSpec>;

    /// Pre-formatted cell text, one entry per descriptor, in declaration
    /// order (hidden columns included; they are filtered positionally).
    fn to_row(&self) -> Vec<String>;
}

/// Extracts one row of cell text from any serializable record.
///
/// Each cell is pulled out of the record's JSON form by the column's key.
/// Missing fields and nulls come out as empty text; strings are taken
/// verbatim; everything else uses its JSON rendering.
pub fn row_from<T: Serialize>(columns: &[ColumnSpec], record: &T) -> Result<Vec<String>, TableError> {
    let value = serde_json::to_value(record)?;
    Ok(columns.iter().map(|col| field_text(&value, &col.key)).collect())
}

fn field_text(value: &Value, key: &str) -> String {
    let mut current = value;
    for part in key.split('.') {
        match current.get(part) {
            Some(inner) => current = inner,
            None => return String::new(),
        }
    }
    match current {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
