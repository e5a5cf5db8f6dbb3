//! `Lexer`: the stateful driver that ties `cursor` position tracking to the
//! per-family `lex_*` scanners and produces one [`Token`] per call, the way
//! `faxc-lex::lexer::core` drives `Cursor` against its own family of
//! scanners.

use super::{comment, identifier, number, operator, string};
use crate::cursor::Cursor;
use crate::{is_keyword, LexError, Token, TokenKind};
use ivy_util::Span;

/// Cheap to clone: the only state is a byte position plus line/column,
/// which makes one-token lookahead in `ivy-par` a throwaway clone rather
/// than a buffered token queue.
#[derive(Clone, Copy)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source) }
    }

    /// Produces the next token. Once the source is exhausted this returns an
    /// `EndOfInput` token on every subsequent call, per `spec.md` §4.B, so
    /// callers can poll it in a loop without special-casing the last token.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        comment::skip_trivia(&mut self.cursor);

        let start_pos = self.cursor.position();
        let start_line = self.cursor.line();
        let start_col = self.cursor.column();

        if self.cursor.is_at_end() {
            let span = Span::point(start_pos, start_line, start_col);
            return Ok(Token::new(TokenKind::EndOfInput, "", span));
        }

        let b = self.cursor.current_byte();

        if identifier::is_identifier_start(b) {
            let end = identifier::scan(&mut self.cursor);
            let lexeme = self.cursor.slice(start_pos, end);
            let kind = if is_keyword(lexeme) { TokenKind::Keyword } else { TokenKind::Identifier };
            let span = self.span_from(start_pos, end, start_line, start_col);
            return Ok(Token::new(kind, lexeme, span));
        }

        if b.is_ascii_digit() || (b == b'.' && self.cursor.byte_at(1).is_ascii_digit()) {
            let end = number::scan(&mut self.cursor);
            let lexeme = self.cursor.slice(start_pos, end);
            let span = self.span_from(start_pos, end, start_line, start_col);
            return Ok(Token::new(TokenKind::Number, lexeme, span));
        }

        if b == b'"' || b == b'\'' {
            return match string::scan(&mut self.cursor, b) {
                Ok((content_start, content_end)) => {
                    let lexeme = self.cursor.slice(content_start, content_end);
                    let span =
                        self.span_from(start_pos, self.cursor.position(), start_line, start_col);
                    Ok(Token::new(TokenKind::String, lexeme, span))
                }
                Err(message) => {
                    let span = self.span_from(
                        start_pos,
                        self.cursor.position(),
                        start_line,
                        start_col,
                    );
                    Err(LexError::new(message, span))
                }
            };
        }

        if let Some((kind, start, end)) = operator::scan(&mut self.cursor) {
            let lexeme = self.cursor.slice(start, end);
            let span = self.span_from(start_pos, end, start_line, start_col);
            return Ok(Token::new(kind, lexeme, span));
        }

        let span = self.span_from(start_pos, start_pos + 1, start_line, start_col);
        self.cursor.advance();
        Err(LexError::new(format!("unexpected character '{}'", b as char), span))
    }

    fn span_from(&self, start: usize, end: usize, line: u32, column: u32) -> Span {
        Span { start, end, line, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(src);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            if tok.is_eof() {
                break;
            }
            out.push((tok.kind, tok.lexeme.to_string()));
        }
        out
    }

    #[test]
    fn lexes_let_statement() {
        let got = kinds("let x = 1 + 2;");
        assert_eq!(
            got,
            vec![
                (TokenKind::Keyword, "let".into()),
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Operator, "=".into()),
                (TokenKind::Number, "1".into()),
                (TokenKind::Operator, "+".into()),
                (TokenKind::Number, "2".into()),
                (TokenKind::Punct, ";".into()),
            ]
        );
    }

    #[test]
    fn eof_repeats_forever() {
        let mut lexer = Lexer::new("");
        let a = lexer.next_token().unwrap();
        let b = lexer.next_token().unwrap();
        assert!(a.is_eof());
        assert!(b.is_eof());
    }

    #[test]
    fn skips_comments_between_tokens() {
        let got = kinds("x // trailing comment\n+ /* inline */ y");
        assert_eq!(
            got,
            vec![
                (TokenKind::Identifier, "x".into()),
                (TokenKind::Operator, "+".into()),
                (TokenKind::Identifier, "y".into()),
            ]
        );
    }

    #[test]
    fn unexpected_character_is_syntax_error() {
        let mut lexer = Lexer::new("@");
        assert!(lexer.next_token().is_err());
    }

    #[test]
    fn leading_dot_followed_by_digit_is_a_number() {
        let got = kinds(".5;");
        assert_eq!(
            got,
            vec![(TokenKind::Number, ".5".into()), (TokenKind::Punct, ";".into())]
        );
    }

    #[test]
    fn distinguishes_keyword_from_identifier() {
        let got = kinds("true truest");
        assert_eq!(
            got,
            vec![
                (TokenKind::Keyword, "true".into()),
                (TokenKind::Identifier, "truest".into()),
            ]
        );
    }

    // ------------------------------------------------------------------
    // property-based tests
    // ------------------------------------------------------------------

    #[test]
    fn property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}")| {
            let got = kinds(&input);
            prop_assert_eq!(got.len(), 1);
            let expected_kind =
                if is_keyword(&input) { TokenKind::Keyword } else { TokenKind::Identifier };
            prop_assert_eq!(got[0].0, expected_kind);
            prop_assert_eq!(&got[0].1, &input);
        });
    }

    #[test]
    fn property_arbitrary_integer_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,12}")| {
            let got = kinds(&input);
            prop_assert_eq!(got.len(), 1);
            prop_assert_eq!(got[0].0, TokenKind::Number);
        });
    }

    #[test]
    fn property_arbitrary_string_literals_round_trip() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z0-9 ]{0,30}")| {
            let source = format!("\"{}\"", input);
            let got = kinds(&source);
            prop_assert_eq!(got.len(), 1);
            prop_assert_eq!(got[0].0, TokenKind::String);
            prop_assert_eq!(&got[0].1, &input);
        });
    }
}
