//! Error types for table construction and rendering.
//!
//! [`TableError`] is the single error type returned by every fallible
//! operation in this crate. Structural problems are caught before any byte
//! is written, so a failed render never leaves a partial table behind.

use std::fmt;

/// Error type for table construction and rendering operations.
#[derive(Debug)]
pub enum TableError {
    /// A row's cell count does not match the table's column count.
    ColumnCountMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Number of visible columns the table declares.
        expected: usize,
        /// Number of cells the row actually carried.
        found: usize,
    },

    /// Record serialization failed while extracting cell values.
    Serialization(String),

    /// The output stream rejected a write.
    Io(std::io::Error),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ColumnCountMismatch {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {} to match the column count",
                row, found, expected
            ),
            TableError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            TableError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_counts() {
        let err = TableError::ColumnCountMismatch {
            row: 2,
            expected: 3,
            found: 5,
        };
        assert_eq!(
            err.to_string(),
            "row 2 has 5 cells, expected 3 to match the column count"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = TableError::from(std::io::Error::other("stream closed"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("stream closed"));
    }
}
