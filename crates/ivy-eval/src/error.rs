//! Runtime error taxonomy.
//!
//! `spec.md` §7 names seven error kinds shared by the lexer, parser, and
//! evaluator. `ivy-lex`/`ivy-par` raise `SYNTAX_ERROR` directly as their own
//! `LexError`/`ParseError` types (kept separate so position-carrying parse
//! failures aren't entangled with the evaluator's concerns); this enum is
//! the unified runtime error the evaluator raises, and it also absorbs a
//! `SyntaxError` variant so a CLI driver can report both kinds through one
//! `Display` impl (`spec.md` §7's "user-visible format").

use ivy_util::Span;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum LangError {
    /// Malformed call to an internal operation, or an arity mismatch on a
    /// function call.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Allocation failure; propagates unchanged. Never raised directly by
    /// this evaluator (Rust's allocator aborts rather than returning an
    /// error), kept so the taxonomy matches `spec.md` §7 in full.
    #[error("memory allocation failed: {0}")]
    MemoryAllocation(String),

    /// Script not found or unreadable; script mode only.
    #[error("file I/O error: {0}")]
    FileIo(String),

    /// Lexer or parser rejected the input.
    #[error("{message}")]
    SyntaxError { message: String, span: Span },

    /// An operator or operation received a value of the wrong variant.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Name lookup failed.
    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    /// `/` or `%` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

impl LangError {
    pub fn span(&self) -> Option<Span> {
        match self {
            LangError::SyntaxError { span, .. } => Some(*span),
            _ => None,
        }
    }

    /// `spec.md` §7's user-visible format: `Error at line L, column C:
    /// <message>` when a position is known, else `Runtime error:
    /// <message>`.
    pub fn render(&self) -> String {
        match self.span() {
            Some(span) => format!("Error at line {}, column {}: {}", span.line, span.column, self),
            None => format!("Runtime error: {}", self),
        }
    }
}

impl From<ivy_lex::LexError> for LangError {
    fn from(e: ivy_lex::LexError) -> Self {
        LangError::SyntaxError { message: e.message, span: e.span }
    }
}

impl From<ivy_par::ParseError> for LangError {
    fn from(e: ivy_par::ParseError) -> Self {
        LangError::SyntaxError { message: e.message, span: e.span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_renders_with_position() {
        let err = LangError::SyntaxError {
            message: "unexpected token".to_string(),
            span: Span::new(5, 6, 2, 3),
        };
        assert_eq!(err.render(), "Error at line 2, column 3: unexpected token");
    }

    #[test]
    fn runtime_error_renders_without_position() {
        let err = LangError::DivisionByZero;
        assert_eq!(err.render(), "Runtime error: division by zero");
    }
}
