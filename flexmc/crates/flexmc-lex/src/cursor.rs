//! Character cursor for traversing the input buffer.
//!
//! The cursor owns the scan position: a byte offset that only moves forward
//! until [`Cursor::reset`] puts it back at the start. It steps over whole
//! UTF-8 characters and tracks line/column for spans.

/// A cursor over a borrowed input string.
///
/// # Example
///
/// ```
/// use flexmc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 5");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    source: &'a str,

    /// Current byte position, always on a char boundary.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead (0 = current), or
    /// `'\0'` past the end.
    ///
    /// ```
    /// use flexmc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("αβ");
    /// assert_eq!(cursor.peek_char(1), 'β');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining().as_bytes();

        // Fast path for ASCII (most common case)
        if offset < rest.len() && rest[..=offset].is_ascii() {
            return rest[offset] as char;
        }

        self.remaining().chars().nth(offset).unwrap_or('\0')
    }

    /// Moves past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances by up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    ///
    /// ```
    /// use flexmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('<'));
    /// assert!(cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips Unicode whitespace, newlines included.
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Puts the cursor back at the start of the source.
    pub fn reset(&mut self) {
        self.position = 0;
        self.line = 1;
        self.column = 1;
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the cursor to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x = 42");
        assert_eq!(cursor.current_char(), 'x');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_peek_char_past_non_ascii() {
        let cursor = Cursor::new("aβc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'β');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_match_char_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char('\0'));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new("  \t\n  IF");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), 'I');
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_eat_while() {
        let mut cursor = Cursor::new("123abc");
        cursor.eat_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.slice_from(0), "123");
        assert_eq!(cursor.remaining(), "abc");
    }

    #[test]
    fn test_reset() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance_n(3);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.line(), 2);

        cursor.reset();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.current_char(), 'a');
        assert_eq!(cursor.source(), "a\nb");
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("x\ny := 1");
        cursor.advance_n(2);
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
        cursor.advance_n(3);
        assert_eq!(cursor.column(), 4);
        assert_eq!(cursor.current_char(), '=');
    }
}
