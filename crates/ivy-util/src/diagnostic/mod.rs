//! Diagnostic module — error reporting infrastructure shared by the lexer
//! and parser.
//!
//! Grounded on `faxc-util::diagnostic`, trimmed to the one severity path Ivy
//! needs (the evaluator reports through `ivy-eval::LangError`, not through a
//! `Handler` — it unwinds with `Result`, it doesn't accumulate diagnostics).

mod builder;
mod codes;
mod level;

pub use builder::{Diagnostic, DiagnosticBuilder, SourceSnippet};
pub use codes::{
    DiagnosticCode, E_DIVISION_BY_ZERO, E_FILE_IO, E_INVALID_ARGUMENT, E_MEMORY_ALLOCATION,
    E_SYNTAX_ERROR, E_TYPE_MISMATCH, E_UNDEFINED_VARIABLE,
};
pub use level::Level;

/// Accumulates diagnostics raised while lexing or parsing one source unit.
///
/// The lexer and parser both take `&mut Handler`; `spec.md` §4.C requires
/// that a parse failure never leak a partial tree, so in practice Ivy's
/// parser stops at the first diagnostic and returns it immediately rather
/// than accumulating many — but the `Handler` still centralizes *how* a
/// diagnostic is recorded, the way `faxc-util::diagnostic::Handler` does for
/// the teacher's error-recovering parser.
#[derive(Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self { diagnostics: Vec::new() }
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn first(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_starts_empty() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert!(handler.first().is_none());
    }

    #[test]
    fn emit_records_an_error() {
        let mut handler = Handler::new();
        handler.emit(DiagnosticBuilder::error("bad token").build());
        assert!(handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }
}
