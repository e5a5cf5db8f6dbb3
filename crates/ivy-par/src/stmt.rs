//! Statement dispatch: `faxc-par::stmt`'s match-on-leading-token shape,
//! extended with the one-token assignment-vs-expression lookahead and the
//! reserved-word rejections `spec.md` §4.E calls for.

use crate::ast::Stmt;
use crate::{ParseError, Parser};
use ivy_lex::TokenKind;

const RESERVED_NOT_IMPLEMENTED: &[&str] = &["for", "break", "continue", "import"];

impl<'a> Parser<'a> {
    pub fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        if self.current.kind == TokenKind::Keyword {
            match self.current.lexeme {
                "let" | "var" | "const" => return self.parse_declaration(),
                "function" => return self.parse_function_decl(),
                "return" => return self.parse_return(),
                "if" => return self.parse_if(),
                "while" => return self.parse_while(),
                word if RESERVED_NOT_IMPLEMENTED.contains(&word) => {
                    return Err(ParseError::new(
                        format!("'{}' is reserved but not implemented", word),
                        self.current.span,
                    ));
                }
                _ => {}
            }
        }

        if self.current.is_punct("{") {
            return self.parse_block();
        }

        if self.current.kind == TokenKind::Identifier {
            if self.peek_second()?.is_operator("=") {
                return self.parse_assignment();
            }
        }

        self.parse_expression_stmt()
    }

    /// `let|var|const identifier = expr ;`
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        self.advance()?; // let/var/const
        let name = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Stmt::Assignment { name, value, is_declaration: true, span: start.to(self.current.span) })
    }

    /// `identifier = expr ;`, the non-declaration form.
    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let name_tok = self.advance()?;
        let name = ivy_util::Symbol::intern(name_tok.lexeme);
        self.expect_operator("=")?;
        let value = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Stmt::Assignment {
            name,
            value,
            is_declaration: false,
            span: name_tok.span.to(self.current.span),
        })
    }

    fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        self.expect_keyword("function")?;
        let name = self.expect_identifier()?;
        self.expect_punct("(")?;
        let mut param_names = Vec::new();
        if !self.current.is_punct(")") {
            loop {
                param_names.push(self.expect_identifier()?);
                if self.current.is_punct(",") {
                    self.advance()?;
                    continue;
                }
                break;
            }
        }
        self.expect_punct(")")?;
        let body = Box::new(self.parse_stmt()?);
        let span = start.to(body.span());
        Ok(Stmt::FunctionDecl { name, param_names, body, span })
    }

    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        self.expect_keyword("return")?;
        let value = if self.current.is_punct(";") { None } else { Some(self.parse_expression()?) };
        self.expect_semicolon()?;
        Ok(Stmt::Return { value, span: start.to(self.current.span) })
    }

    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        self.expect_keyword("if")?;
        self.expect_punct("(")?;
        let condition = self.parse_expression()?;
        self.expect_punct(")")?;
        let then_branch = Box::new(self.parse_stmt()?);
        // Dangling-else binds to the nearest `if`: we always attach an
        // `else` we see right here, to whichever `if` called us.
        let else_branch = if self.current.is_keyword("else") {
            self.advance()?;
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        let end = else_branch.as_ref().map_or(then_branch.span(), |b| b.span());
        Ok(Stmt::If { condition, then_branch, else_branch, span: start.to(end) })
    }

    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        self.expect_keyword("while")?;
        self.expect_punct("(")?;
        let condition = self.parse_expression()?;
        self.expect_punct(")")?;
        let body = Box::new(self.parse_stmt()?);
        let span = start.to(body.span());
        Ok(Stmt::While { condition, body, span })
    }

    /// `'{' statement* '}'`; unexpected end of input inside is a
    /// `SYNTAX_ERROR` (the `expect_punct("}")` call below raises it, since
    /// the loop only stops on `}` or EOF).
    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        self.expect_punct("{")?;
        let mut statements = Vec::new();
        while !self.current.is_punct("}") {
            if self.current.is_eof() {
                return Err(ParseError::new("unexpected end of input in block", self.current.span));
            }
            statements.push(self.parse_stmt()?);
        }
        let end = self.current.span;
        self.expect_punct("}")?;
        Ok(Stmt::Block { statements, span: start.to(end) })
    }

    fn parse_expression_stmt(&mut self) -> Result<Stmt, ParseError> {
        let start = self.current.span;
        let expr = self.parse_expression()?;
        self.expect_semicolon()?;
        Ok(Stmt::Expression { expr, span: start.to(self.current.span) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinOp, Expr, Literal};

    fn parse_one(src: &str) -> Stmt {
        let mut parser = Parser::new(src).unwrap();
        parser.parse_stmt().unwrap()
    }

    #[test]
    fn parses_let_declaration() {
        let stmt = parse_one("let x = 1;");
        match stmt {
            Stmt::Assignment { is_declaration, value, .. } => {
                assert!(is_declaration);
                assert!(matches!(value, Expr::Literal { value: Literal::Number(n), .. } if n == 1.0));
            }
            other => panic!("expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn parses_non_declaration_assignment() {
        let stmt = parse_one("x = 2;");
        match stmt {
            Stmt::Assignment { is_declaration, .. } => assert!(!is_declaration),
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn parses_if_else_as_dangling_else() {
        let mut parser = Parser::new("if (1 < 2) if (2 < 3) a; else b;").unwrap();
        let stmt = parser.parse_stmt().unwrap();
        match stmt {
            Stmt::If { then_branch, .. } => match *then_branch {
                Stmt::If { else_branch, .. } => assert!(else_branch.is_some()),
                other => panic!("expected nested if, got {:?}", other),
            },
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn rejects_reserved_for_keyword() {
        let mut parser = Parser::new("for (;;) {}").unwrap();
        assert!(parser.parse_stmt().is_err());
    }

    #[test]
    fn missing_semicolon_is_a_syntax_error() {
        let mut parser = Parser::new("let x = 1").unwrap();
        assert!(parser.parse_stmt().is_err());
    }

    #[test]
    fn parses_precedence_example_from_spec() {
        let mut parser = Parser::new("1 + 2 * 3;").unwrap();
        let stmt = parser.parse_stmt().unwrap();
        match stmt {
            Stmt::Expression { expr: Expr::Binary { op: BinOp::Add, right, .. }, .. } => {
                assert!(matches!(*right, Expr::Binary { op: BinOp::Mul, .. }));
            }
            other => panic!("expected a + (b * c) shape, got {:?}", other),
        }
    }

    #[test]
    fn rejects_trailing_comma_in_call() {
        let mut parser = Parser::new("foo(1, 2,);").unwrap();
        assert!(parser.parse_stmt().is_err());
    }
}
