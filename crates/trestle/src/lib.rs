//! # Trestle - Styled Terminal Tables
//!
//! Trestle renders sequences of structured records as styled tables on a
//! terminal: box-drawing borders in ten styles, per-column and per-cell
//! color and alignment, row separators, a plain Markdown output mode, and
//! an optional line-by-line reveal animation.
//!
//! ## Core Concepts
//!
//! - [`ColumnSpec`] / [`TableRecord`]: describe a record shape once; each
//!   record supplies pre-formatted cell text
//! - [`TableStyle`]: per-render configuration (border, padding, margins,
//!   role defaults, animation, print mode)
//! - [`CellStyle`]: per-cell color and alignment intent, where unset fields
//!   defer to the next level of the cascade
//! - [`BorderKind`]: the border catalogue, each style a fixed set of eleven
//!   glyphs
//! - [`Table`]: the orchestrator; `render()` produces the exact output
//!   string, `print()` writes it inside a managed output session
//!
//! ## Quick Start
//!
//! ```rust
//! use trestle::{print_table_with, Align, BorderKind, CellStyle, Color, ColumnSpec, TableRecord};
//!
//! struct Person {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl TableRecord for Person {
//!     fn columns() -> Vec<ColumnSpec> {
//!         vec![
//!             ColumnSpec::new("id")
//!                 .header("Id")
//!                 .cell_style(CellStyle::new().align(Align::Right)),
//!             ColumnSpec::new("name")
//!                 .header("Name")
//!                 .header_style(CellStyle::new().fg(Color::Cyan)),
//!         ]
//!     }
//!
//!     fn to_row(&self) -> Vec<String> {
//!         vec![self.id.to_string(), self.name.clone()]
//!     }
//! }
//!
//! # fn main() -> Result<(), trestle::TableError> {
//! let people = vec![
//!     Person { id: 1, name: "Alice".into() },
//!     Person { id: 2, name: "Bob".into() },
//! ];
//! print_table_with(&people, |style| {
//!     style.border = BorderKind::SingleCurvedLine;
//!     style.row_separators = true;
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Style Cascade
//!
//! Each style field resolves independently, highest precedence first: the
//! cell's own [`CellStyle`], then the table's role default
//! ([`TableStyle::header_style`] or [`TableStyle::data_style`]), then, for
//! the background only, [`TableStyle::background`]. Unset means "defer",
//! never "black" or "left"; coercion to concrete values happens only at
//! composition time. A table with no color set anywhere renders with zero
//! escape bytes.
//!
//! ## Markdown Mode
//!
//! [`PrintMode::Markdown`] emits the pipe-and-dash form downstream Markdown
//! renderers expect (`| h1 | h2 |`, `|----|----|`, `| v1 | v2 |`),
//! byte-exact, with every color and alignment override bypassed. Column
//! text and ordering are identical to Normal mode for the same input.
//!
//! ## Process Defaults
//!
//! A fallback [`TableStyle`] can be installed once at startup with
//! [`set_default_style`]; renders given no explicit style read it. Hosts
//! that drive their terminal colors through raw escape sequences can
//! declare them with [`set_ambient`] so each print session restores them
//! on exit.

mod border;
mod color;
mod compose;
mod error;
mod resolve;
mod rule;
mod session;
mod table;
mod traits;
mod types;

pub use border::{BorderKind, GlyphSet};
pub use color::Color;
pub use error::TableError;
pub use resolve::display_width;
pub use session::{set_ambient, with_managed_output, Ambient, AmbientColor};
pub use table::{
    print_record, print_record_styled, print_record_with, print_table, print_table_styled,
    print_table_with, Table,
};
pub use traits::{row_from, ColumnSpec, TableRecord};
pub use types::{
    clear_default_style, set_default_style, Align, CellStyle, PrintMode, TableStyle,
};
