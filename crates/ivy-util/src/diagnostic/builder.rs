//! Diagnostic builder and source-snippet rendering.

use super::{DiagnosticCode, Level};
use crate::Span;

/// A rendered source excerpt with a caret pointing at the offending column.
///
/// `spec.md` §7 calls this "desirable but optional"; Ivy renders it whenever
/// the caller has the source line handy (the CLI always does).
#[derive(Clone, Debug)]
pub struct SourceSnippet {
    pub line: String,
    pub line_number: u32,
    pub column: u32,
}

impl SourceSnippet {
    pub fn new(line: impl Into<String>, line_number: u32, column: u32) -> Self {
        Self { line: line.into(), line_number, column }
    }

    /// Render as a two-line `<source>\n<caret>` block.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut out = String::new();
        out.push_str(&format!("{:>width$} | {}\n", self.line_number, self.line, width = width));
        out.push_str(&format!("{:>width$} | ", "", width = width));
        for _ in 0..self.column.saturating_sub(1) {
            out.push(' ');
        }
        out.push('^');
        out
    }
}

/// A single diagnostic: a message, a severity, an optional span/code/snippet.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Option<Span>,
    pub code: Option<DiagnosticCode>,
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Render following `spec.md` §7's user-visible format:
    /// `Error at line L, column C: <message>` when a span is present.
    pub fn render(&self) -> String {
        let mut out = match self.span {
            Some(span) => format!("Error at line {}, column {}: {}", span.line, span.column, self.message),
            None => format!("Runtime error: {}", self.message),
        };
        if let Some(snippet) = &self.snippet {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        out
    }
}

/// Fluent builder for [`Diagnostic`], mirroring `faxc-util`'s
/// `DiagnosticBuilder` API shape.
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Option<Span>,
    code: Option<DiagnosticCode>,
    snippet: Option<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), span: None, code: None, snippet: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            snippet: self.snippet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_line_and_column() {
        let diag = DiagnosticBuilder::error("unexpected character '@'")
            .span(Span::new(4, 5, 1, 5))
            .build();
        assert_eq!(diag.render(), "Error at line 1, column 5: unexpected character '@'");
    }

    #[test]
    fn render_without_span_is_runtime_error() {
        let diag = DiagnosticBuilder::error("division by zero").build();
        assert_eq!(diag.render(), "Runtime error: division by zero");
    }

    #[test]
    fn snippet_renders_caret_under_column() {
        let snippet = SourceSnippet::new("1 / 0;", 1, 3);
        let rendered = snippet.format();
        assert!(rendered.contains("1 / 0;"));
        assert!(rendered.ends_with('^'));
    }
}
