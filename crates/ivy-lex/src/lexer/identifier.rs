//! Identifier and keyword scanning.

use crate::cursor::Cursor;

pub fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

pub fn is_identifier_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Scans `[A-Za-z_][A-Za-z0-9_]*` starting at the cursor, which must be
/// sitting on an identifier-start byte. Returns the end byte position.
pub fn scan(cursor: &mut Cursor) -> usize {
    cursor.advance();
    while is_identifier_continue(cursor.current_byte()) {
        cursor.advance();
    }
    cursor.position()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_alnum_and_underscore() {
        let mut cursor = Cursor::new("foo_bar2 rest");
        let end = scan(&mut cursor);
        assert_eq!(cursor.slice(0, end), "foo_bar2");
    }
}
