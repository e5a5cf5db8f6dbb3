//! Character cursor for traversing source code.
//!
//! Maintains byte position plus 1-based line/column while iterating through
//! source text. Handles UTF-8 correctly (`spec.md` §6: "multi-byte sequences
//! are tolerated inside strings and comments... contribute one to `column`
//! per byte" — so column tracking here counts *bytes*, not `char`s, matching
//! that rule exactly).

#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, position: 0, line: 1, column: 1 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Current byte, or `0` at end of input.
    pub fn current_byte(&self) -> u8 {
        self.byte_at(0)
    }

    /// Byte at `offset` bytes ahead of the cursor, or `0` past the end.
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.source.as_bytes().get(self.position + offset).copied().unwrap_or(0)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advance one byte, tracking line/column per `spec.md` §4.B: `line`
    /// increments on `\n`, `column` resets to 1 on `\n`, otherwise +1 per
    /// byte consumed.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        let b = self.current_byte();
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    pub fn matches(&mut self, expected: u8) -> bool {
        if self.current_byte() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_line_and_column() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance(); // consumes '\n'
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
    }

    #[test]
    fn is_at_end_after_last_byte() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_byte(), 0);
    }

    #[test]
    fn matches_consumes_on_success_only() {
        let mut cursor = Cursor::new("==");
        assert!(cursor.matches(b'='));
        assert_eq!(cursor.position(), 1);
        assert!(!cursor.matches(b'x'));
        assert_eq!(cursor.position(), 1);
    }
}
