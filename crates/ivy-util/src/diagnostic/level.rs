//! Diagnostic severity levels.

use std::fmt;

/// Diagnostic severity level.
///
/// Ivy only ever raises errors (`spec.md` has no warning-level diagnostic),
/// but the level is kept as a small enum rather than collapsed to a single
/// variant so that `Diagnostic`/`DiagnosticBuilder` read the same way the
/// teacher's do, and so a future warning (e.g. an unused `let`) has somewhere
/// to go without widening the type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl Level {
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    #[inline]
    pub const fn color_code(&self) -> Option<&'static str> {
        match self {
            Level::Error => Some("31"),
            Level::Warning => Some("33"),
            Level::Note => Some("36"),
            Level::Help => Some("32"),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_error() {
        assert!(Level::Error.is_error());
        assert!(!Level::Note.is_error());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(format!("{}", Level::Warning), "warning");
    }
}
