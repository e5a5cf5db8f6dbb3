//! Diagnostic codes — one per error kind in `spec.md` §7's taxonomy.

/// A stable code identifying a diagnostic's kind, e.g. `E0004` for
/// `SYNTAX_ERROR`. Mirrors `faxc-util::diagnostic::DiagnosticCode` but the
/// fixed set below matches `spec.md` §7 exactly instead of a general-purpose
/// compiler's open-ended code space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    pub prefix: &'static str,
    pub number: u32,
}

impl DiagnosticCode {
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    pub fn as_string(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }
}

pub const E_INVALID_ARGUMENT: DiagnosticCode = DiagnosticCode::new("E", 1);
pub const E_MEMORY_ALLOCATION: DiagnosticCode = DiagnosticCode::new("E", 2);
pub const E_FILE_IO: DiagnosticCode = DiagnosticCode::new("E", 3);
pub const E_SYNTAX_ERROR: DiagnosticCode = DiagnosticCode::new("E", 4);
pub const E_TYPE_MISMATCH: DiagnosticCode = DiagnosticCode::new("E", 5);
pub const E_UNDEFINED_VARIABLE: DiagnosticCode = DiagnosticCode::new("E", 6);
pub const E_DIVISION_BY_ZERO: DiagnosticCode = DiagnosticCode::new("E", 7);
