//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic came from: a byte range
//! into the scanned text plus the 1-based line and column of its start.
//!
//! # Examples
//!
//! ```
//! use flexmc_util::span::Span;
//!
//! let span = Span::new(10, 14, 1, 11);
//! assert_eq!(span.len(), 4);
//! ```

/// Source location span
///
/// Byte offsets are half-open (`start..end`). Line and column are 1-based and
/// describe `start`; column counts characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Span that points nowhere, used when no location is known.
    ///
    /// Line 0 marks it as unknown; rendering skips the source snippet.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexmc_util::span::Span;
    ///
    /// let point = Span::point(7, 1, 8);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the text covered by this span, if it is a valid range of
    /// `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
    }

    #[test]
    fn test_span_point() {
        let point = Span::point(3, 1, 4);
        assert!(point.is_empty());
        assert_eq!(point.len(), 0);
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(10, 20, 1, 1).len(), 10);
        assert_eq!(Span::new(20, 10, 1, 1).len(), 0);
    }

    #[test]
    fn test_span_slice() {
        let source = "x = 5.00";
        assert_eq!(Span::new(4, 8, 1, 5).slice(source), Some("5.00"));
        assert_eq!(Span::new(4, 80, 1, 5).slice(source), None);
    }

    #[test]
    fn test_span_dummy() {
        assert_eq!(Span::DUMMY, Span::default());
        assert_eq!(Span::DUMMY.line, 0);
    }
}
