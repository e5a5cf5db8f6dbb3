//! Numeric literal scanning.
//!
//! `spec.md` §4.B: digits, an optional `.` followed by digits, and an
//! optional `e`/`E` exponent with an optional sign and digits. Conversion to
//! `f64` is deferred to the parser; the lexer only delimits the lexeme.

use crate::cursor::Cursor;

/// Scans a number literal starting at the cursor, which must be sitting on
/// an ASCII digit. Returns the end byte position.
pub fn scan(cursor: &mut Cursor) -> usize {
    while cursor.current_byte().is_ascii_digit() {
        cursor.advance();
    }
    if cursor.current_byte() == b'.' && cursor.byte_at(1).is_ascii_digit() {
        cursor.advance(); // '.'
        while cursor.current_byte().is_ascii_digit() {
            cursor.advance();
        }
    }
    if matches!(cursor.current_byte(), b'e' | b'E') {
        let mut lookahead = 1;
        if matches!(cursor.byte_at(1), b'+' | b'-') {
            lookahead = 2;
        }
        if cursor.byte_at(lookahead).is_ascii_digit() {
            cursor.advance(); // 'e'/'E'
            if matches!(cursor.current_byte(), b'+' | b'-') {
                cursor.advance();
            }
            while cursor.current_byte().is_ascii_digit() {
                cursor.advance();
            }
        }
    }
    cursor.position()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_integer() {
        let mut cursor = Cursor::new("123 ");
        let end = scan(&mut cursor);
        assert_eq!(cursor.slice(0, end), "123");
    }

    #[test]
    fn scans_decimal() {
        let mut cursor = Cursor::new("3.14;");
        let end = scan(&mut cursor);
        assert_eq!(cursor.slice(0, end), "3.14");
    }

    #[test]
    fn scans_exponent() {
        let mut cursor = Cursor::new("2e10 ");
        let end = scan(&mut cursor);
        assert_eq!(cursor.slice(0, end), "2e10");
    }

    #[test]
    fn trailing_dot_without_digit_is_not_consumed() {
        let mut cursor = Cursor::new("5.foo");
        let end = scan(&mut cursor);
        assert_eq!(cursor.slice(0, end), "5");
    }
}
