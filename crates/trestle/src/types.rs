//! Style model and table configuration.
//!
//! [`CellStyle`] carries per-cell intent where every field is optional:
//! `None` means "defer to the next level of the cascade" and is only coerced
//! to a concrete value at composition time. [`TableStyle`] is the per-render
//! configuration; a process-wide fallback instance can be installed once at
//! startup with [`set_default_style`].

use std::sync::RwLock;
use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::border::BorderKind;
use crate::color::Color;

/// Horizontal alignment of text within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Align text to the left side of the cell.
    #[default]
    Left,
    /// Center the text within the cell.
    Center,
    /// Align text to the right side of the cell.
    Right,
}

/// Rendering mode for table output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// Full rendering: borders, colors, alignment, padding.
    #[default]
    Normal,
    /// Plain pipe-delimited output for Markdown renderers. Colors and
    /// alignment overrides are bypassed entirely; text and column layout
    /// are preserved.
    Markdown,
}

/// Color and alignment intent for a header or data cell.
///
/// Unset fields fall through the cascade: explicit cell style, then the
/// table's role default, then (for the background only) the table
/// background, then unstyled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub foreground: Option<Color>,
    pub background: Option<Color>,
    pub align: Option<Align>,
}

impl CellStyle {
    /// A style with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }
}

/// Visual configuration for one table render.
///
/// Constructed per call, either explicitly or through a configurator
/// closure applied to a fresh default. `Default` gives a single-line
/// border, one space of cell padding, no margins, no colors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Border style for the table frame.
    pub border: BorderKind,
    /// Color of the border glyphs. `None` leaves them in the terminal's
    /// current color.
    pub border_color: Option<Color>,
    /// Background applied across the whole table, including cells that
    /// resolve no background of their own.
    pub background: Option<Color>,
    /// Spaces inside each cell, left and right of the text.
    pub cell_padding: usize,
    /// Spaces between the left edge of the terminal and the table.
    pub h_margin: usize,
    /// Blank lines above and below the table.
    pub v_margin: usize,
    /// Default style for header cells, overridable per column.
    pub header_style: CellStyle,
    /// Default style for data cells, overridable per column.
    pub data_style: CellStyle,
    /// Draw a rule between consecutive data rows.
    pub row_separators: bool,
    /// Distinct border style for row separator rules. `None` reuses
    /// [`TableStyle::border`].
    pub separator_border: Option<BorderKind>,
    /// Reveal the table line by line instead of all at once.
    pub animate: bool,
    /// Delay between animated lines, clamped to 200 ms at print time.
    pub animation_delay_ms: u64,
    /// Normal or Markdown output.
    pub mode: PrintMode,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            border: BorderKind::default(),
            border_color: None,
            background: None,
            cell_padding: 1,
            h_margin: 0,
            v_margin: 0,
            header_style: CellStyle::default(),
            data_style: CellStyle::default(),
            row_separators: false,
            separator_border: None,
            animate: false,
            animation_delay_ms: 100,
            mode: PrintMode::default(),
        }
    }
}

impl TableStyle {
    /// Whether this configuration draws glyphs that need more than the
    /// basic box-drawing repertoire from the output encoding.
    ///
    /// Considers the main border and, when row separators are enabled, the
    /// distinct separator border.
    pub fn requires_extended_encoding(&self) -> bool {
        self.border.requires_extended_encoding()
            || (self.row_separators
                && self
                    .separator_border
                    .is_some_and(BorderKind::requires_extended_encoding))
    }

    /// The animation delay with the clamp applied.
    pub(crate) fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms.min(200))
    }
}

static DEFAULT_STYLE: Lazy<RwLock<Option<TableStyle>>> = Lazy::new(|| RwLock::new(None));

/// Installs the process-wide fallback style.
///
/// The fallback is used by every render that is not given an explicit style
/// or a configurator. Write it once at startup; renders read it at their
/// start. Concurrent renders must be serialized by the caller.
pub fn set_default_style(style: TableStyle) {
    *DEFAULT_STYLE.write().unwrap() = Some(style);
}

/// Removes the process-wide fallback style, reverting to built-in defaults.
pub fn clear_default_style() {
    *DEFAULT_STYLE.write().unwrap() = None;
}

/// The effective fallback style for a render that was given none.
pub(crate) fn default_style() -> TableStyle {
    DEFAULT_STYLE.read().unwrap().clone().unwrap_or_default()
}
