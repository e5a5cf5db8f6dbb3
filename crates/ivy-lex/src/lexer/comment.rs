//! Whitespace and comment skipping.

use crate::cursor::Cursor;

/// Skips whitespace, `//` line comments, and `/* */` block comments,
/// interleaved until the cursor rests on the next significant byte (or end
/// of input). An unterminated block comment is tolerated: it simply runs to
/// end of input rather than raising `SYNTAX_ERROR`, since nothing after it
/// could be meaningfully recovered from anyway.
pub fn skip_trivia(cursor: &mut Cursor) {
    loop {
        match cursor.current_byte() {
            b' ' | b'\t' | b'\r' | b'\n' => cursor.advance(),
            b'/' if cursor.byte_at(1) == b'/' => skip_line_comment(cursor),
            b'/' if cursor.byte_at(1) == b'*' => skip_block_comment(cursor),
            _ => return,
        }
    }
}

fn skip_line_comment(cursor: &mut Cursor) {
    while !cursor.is_at_end() && cursor.current_byte() != b'\n' {
        cursor.advance();
    }
}

fn skip_block_comment(cursor: &mut Cursor) {
    cursor.advance(); // '/'
    cursor.advance(); // '*'
    while !cursor.is_at_end() {
        if cursor.current_byte() == b'*' && cursor.byte_at(1) == b'/' {
            cursor.advance();
            cursor.advance();
            return;
        }
        cursor.advance();
    }
}
