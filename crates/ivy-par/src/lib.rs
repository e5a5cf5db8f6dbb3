//! ivy-par - recursive-descent / precedence-climbing parser.
//!
//! Turns a token stream from `ivy-lex` into the [`ast::Program`] tree.
//! Statement dispatch follows `faxc-par::stmt`'s match-on-leading-token
//! shape; expressions are parsed Pratt-style exactly as `faxc-par::expr`'s
//! `bp` table does it (see `expr::bp`), extended to the full operator set
//! `spec.md` calls for.

pub mod ast;
mod expr;
mod stmt;

use ivy_lex::lexer::Lexer;
use ivy_lex::{LexError, Token, TokenKind};
use ivy_util::{Span, Symbol};
use thiserror::Error;

pub use ast::{BinOp, Expr, Literal, Program, Stmt, UnOp};

/// A parse failure: a message plus the offending token's position, per
/// `spec.md` §4.C ("parse errors carry a short message and the offending
/// token's line/column").
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), span }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        ParseError { message: e.message, span: e.span }
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses the entire input as a [`Program`]: zero or more statements up
    /// to end of input. A failure here never hands back a partial tree
    /// (`spec.md` §3 invariant 3) — the `Result` is the only way out.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.current.is_eof() {
            statements.push(self.parse_stmt()?);
        }
        Ok(Program { statements })
    }

    fn advance(&mut self) -> Result<Token<'a>, ParseError> {
        let previous = self.current;
        self.current = self.lexer.next_token()?;
        Ok(previous)
    }

    /// The token immediately after `self.current`, without consuming
    /// anything. `Lexer` is cheap to clone (its `Cursor` is just a byte
    /// position plus line/column), so a one-token lookahead is just running
    /// a throwaway clone one step further, rather than a buffered token
    /// queue.
    fn peek_second(&self) -> Result<Token<'a>, ParseError> {
        let mut lookahead = self.lexer;
        Ok(lookahead.next_token()?)
    }

    fn expect_punct(&mut self, p: &str) -> Result<(), ParseError> {
        if self.current.is_punct(p) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected '{}'", p)))
        }
    }

    fn expect_operator(&mut self, op: &str) -> Result<(), ParseError> {
        if self.current.is_operator(op) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected '{}'", op)))
        }
    }

    fn expect_keyword(&mut self, kw: &str) -> Result<(), ParseError> {
        if self.current.is_keyword(kw) {
            self.advance()?;
            Ok(())
        } else {
            Err(self.unexpected(&format!("expected '{}'", kw)))
        }
    }

    fn expect_identifier(&mut self) -> Result<Symbol, ParseError> {
        if self.current.kind == TokenKind::Identifier {
            let tok = self.advance()?;
            Ok(Symbol::intern(tok.lexeme))
        } else {
            Err(self.unexpected("expected identifier"))
        }
    }

    fn expect_semicolon(&mut self) -> Result<(), ParseError> {
        self.expect_punct(";")
    }

    fn unexpected(&self, what: &str) -> ParseError {
        ParseError::new(
            format!("{}, found '{}'", what, self.describe_current()),
            self.current.span,
        )
    }

    fn describe_current(&self) -> String {
        if self.current.is_eof() {
            "end of input".to_string()
        } else {
            self.current.lexeme.to_string()
        }
    }
}
