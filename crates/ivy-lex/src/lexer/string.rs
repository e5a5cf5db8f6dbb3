//! String literal scanning.
//!
//! `spec.md` §4.B: delimited by `'` or `"`; a backslash escapes one
//! following byte — "no interpretation performed", the escaped byte is kept
//! verbatim rather than translated, so the lexeme between the delimiters is
//! exactly what later becomes the runtime string value.

use crate::cursor::Cursor;

/// Scans a string literal starting at the cursor, which must be sitting on
/// the opening quote byte. Returns the byte range of the content *between*
/// the delimiters, or an error message if the string runs off the end of
/// input unterminated.
pub fn scan(cursor: &mut Cursor, quote: u8) -> Result<(usize, usize), String> {
    cursor.advance(); // opening quote
    let start = cursor.position();
    loop {
        if cursor.is_at_end() {
            return Err("unterminated string literal".to_string());
        }
        let b = cursor.current_byte();
        if b == quote {
            let end = cursor.position();
            cursor.advance(); // closing quote
            return Ok((start, end));
        }
        if b == b'\\' {
            cursor.advance();
            if cursor.is_at_end() {
                return Err("unterminated string literal".to_string());
            }
        }
        cursor.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_simple_string() {
        let mut cursor = Cursor::new("\"hello\" rest");
        let (start, end) = scan(&mut cursor, b'"').unwrap();
        assert_eq!(cursor.slice(start, end), "hello");
    }

    #[test]
    fn keeps_escaped_byte_verbatim() {
        let mut cursor = Cursor::new("\"a\\\"b\" rest");
        let (start, end) = scan(&mut cursor, b'"').unwrap();
        assert_eq!(cursor.slice(start, end), "a\\\"b");
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let mut cursor = Cursor::new("\"never closes");
        assert!(scan(&mut cursor, b'"').is_err());
    }

    #[test]
    fn single_quotes_are_also_delimiters() {
        let mut cursor = Cursor::new("'hi'");
        let (start, end) = scan(&mut cursor, b'\'').unwrap();
        assert_eq!(cursor.slice(start, end), "hi");
    }
}
