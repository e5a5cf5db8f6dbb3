//! Operator and punctuation scanning: longest-match first.

use crate::cursor::Cursor;
use crate::TokenKind;

const MULTI_CHAR: &[&str] = &["==", "!=", "<=", ">=", "&&", "||"];
const SINGLE_CHAR_OPERATORS: &[u8] = b"+-*/%=<>!&|^~";
const PUNCT: &[u8] = b"()[]{};,.";

/// Scans an operator or punctuation token starting at the cursor. Returns
/// `None` if the current byte is neither, leaving the cursor untouched.
pub fn scan(cursor: &mut Cursor) -> Option<(TokenKind, usize, usize)> {
    let start = cursor.position();
    let two = [cursor.current_byte(), cursor.byte_at(1)];
    for candidate in MULTI_CHAR {
        let bytes = candidate.as_bytes();
        if two[0] == bytes[0] && two[1] == bytes[1] {
            cursor.advance();
            cursor.advance();
            return Some((TokenKind::Operator, start, cursor.position()));
        }
    }
    let b = cursor.current_byte();
    if SINGLE_CHAR_OPERATORS.contains(&b) {
        cursor.advance();
        return Some((TokenKind::Operator, start, cursor.position()));
    }
    if PUNCT.contains(&b) {
        cursor.advance();
        return Some((TokenKind::Punct, start, cursor.position()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_two_char_operator_over_one() {
        let mut cursor = Cursor::new("== x");
        let (kind, start, end) = scan(&mut cursor).unwrap();
        assert_eq!(kind, TokenKind::Operator);
        assert_eq!(cursor.slice(start, end), "==");
    }

    #[test]
    fn falls_back_to_single_char_operator() {
        let mut cursor = Cursor::new("=x");
        let (_, start, end) = scan(&mut cursor).unwrap();
        assert_eq!(cursor.slice(start, end), "=");
    }

    #[test]
    fn recognizes_punctuation() {
        let mut cursor = Cursor::new("(x)");
        let (kind, start, end) = scan(&mut cursor).unwrap();
        assert_eq!(kind, TokenKind::Punct);
        assert_eq!(cursor.slice(start, end), "(");
    }

    #[test]
    fn unrecognized_byte_returns_none() {
        let mut cursor = Cursor::new("@x");
        assert!(scan(&mut cursor).is_none());
    }
}
