//! Pratt/precedence-climbing expression parsing.
//!
//! `spec.md` §4.C gives eight levels, low to high: `||`, `&&`, `==`/`!=`,
//! relational, `+`/`-`, `*`/`/`/`%`, unary prefix, primary. The `bp` table
//! below is the `faxc-par::expr::bp` pattern: one constant per level, binary
//! dispatch looks the operator up in a table instead of recursing per level,
//! so adding a level later is a table edit.

use crate::ast::{BinOp, Expr, Literal, UnOp};
use crate::{ParseError, Parser};
use ivy_lex::TokenKind;
use ivy_util::Symbol;

#[doc(hidden)]
pub mod bp {
    pub const MIN: u8 = 0;
    pub const OR: u8 = 2;
    pub const AND: u8 = 4;
    pub const EQUALITY: u8 = 6;
    pub const RELATIONAL: u8 = 8;
    pub const ADDITIVE: u8 = 10;
    pub const MULTIPLICATIVE: u8 = 12;
    pub const UNARY: u8 = 14;
}

/// Left/right binding power and the operator the lexeme maps to, or `None`
/// if the current token isn't an infix operator at all.
fn infix_binding_power(lexeme: &str) -> Option<(u8, u8, BinOp)> {
    Some(match lexeme {
        "||" => (bp::OR, bp::OR + 1, BinOp::Or),
        "&&" => (bp::AND, bp::AND + 1, BinOp::And),
        "==" => (bp::EQUALITY, bp::EQUALITY + 1, BinOp::Eq),
        "!=" => (bp::EQUALITY, bp::EQUALITY + 1, BinOp::NotEq),
        "<" => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::Lt),
        ">" => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::Gt),
        "<=" => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::LtEq),
        ">=" => (bp::RELATIONAL, bp::RELATIONAL + 1, BinOp::GtEq),
        "+" => (bp::ADDITIVE, bp::ADDITIVE + 1, BinOp::Add),
        "-" => (bp::ADDITIVE, bp::ADDITIVE + 1, BinOp::Sub),
        "*" => (bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1, BinOp::Mul),
        "/" => (bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1, BinOp::Div),
        "%" => (bp::MULTIPLICATIVE, bp::MULTIPLICATIVE + 1, BinOp::Rem),
        _ => return None,
    })
}

impl<'a> Parser<'a> {
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr(bp::MIN)
    }

    /// The Pratt core: parse a prefix expression, then keep consuming infix
    /// operators whose left binding power is at least `min_bp`.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        loop {
            if self.current.kind != TokenKind::Operator {
                break;
            }
            let Some((left_bp, right_bp, op)) = infix_binding_power(self.current.lexeme) else {
                break;
            };
            if left_bp < min_bp {
                break;
            }
            self.advance()?;
            let right = self.parse_expr(right_bp)?;
            let span = left.span().to(right.span());
            left = Expr::Binary { op, left: Box::new(left), right: Box::new(right), span };
        }

        Ok(left)
    }

    /// Unary `-`/`!` are right-associative: `- - x` is `-(-(x))`, parsed by
    /// recursing into another `parse_unary` rather than `parse_expr`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.current.is_operator("-") {
            let start = self.advance()?.span;
            let operand = self.parse_unary()?;
            let span = start.to(operand.span());
            return Ok(Expr::Unary { op: UnOp::Neg, operand: Box::new(operand), span });
        }
        if self.current.is_operator("!") {
            let start = self.advance()?.span;
            let operand = self.parse_unary()?;
            let span = start.to(operand.span());
            return Ok(Expr::Unary { op: UnOp::Not, operand: Box::new(operand), span });
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.current.is_punct("(") {
            self.advance()?;
            let inner = self.parse_expression()?;
            self.expect_punct(")")?;
            return Ok(inner);
        }

        if self.current.is_keyword("true") {
            let span = self.advance()?.span;
            return Ok(Expr::Literal { value: Literal::Boolean(true), span });
        }
        if self.current.is_keyword("false") {
            let span = self.advance()?.span;
            return Ok(Expr::Literal { value: Literal::Boolean(false), span });
        }
        if self.current.is_keyword("null") {
            let span = self.advance()?.span;
            return Ok(Expr::Literal { value: Literal::Null, span });
        }

        if self.current.kind == TokenKind::Number {
            let tok = self.advance()?;
            let value: f64 = tok
                .lexeme
                .parse()
                .map_err(|_| ParseError::new(format!("invalid number '{}'", tok.lexeme), tok.span))?;
            return Ok(Expr::Literal { value: Literal::Number(value), span: tok.span });
        }

        if self.current.kind == TokenKind::String {
            let tok = self.advance()?;
            return Ok(Expr::Literal { value: Literal::String(tok.lexeme.to_string()), span: tok.span });
        }

        if self.current.kind == TokenKind::Identifier {
            let tok = self.advance()?;
            let name = Symbol::intern(tok.lexeme);
            if self.current.is_punct("(") {
                return self.parse_call(name, tok.span);
            }
            return Ok(Expr::Variable { name, span: tok.span });
        }

        Err(self.unexpected("expected an expression"))
    }

    /// `callee '(' args ')'`, comma-separated, trailing comma disallowed.
    fn parse_call(&mut self, callee_name: Symbol, start_span: ivy_util::Span) -> Result<Expr, ParseError> {
        self.expect_punct("(")?;
        let mut args = Vec::new();
        if !self.current.is_punct(")") {
            loop {
                args.push(self.parse_expression()?);
                if self.current.is_punct(",") {
                    self.advance()?;
                    if self.current.is_punct(")") {
                        return Err(self.unexpected("trailing comma is not allowed in call arguments"));
                    }
                    continue;
                }
                break;
            }
        }
        let end = self.current.span;
        self.expect_punct(")")?;
        Ok(Expr::Call { callee_name, args, span: start_span.to(end) })
    }
}
