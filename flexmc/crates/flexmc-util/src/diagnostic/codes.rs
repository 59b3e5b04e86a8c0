//! Error codes attached to diagnostics.
//!
//! ```
//! use flexmc_util::DiagnosticCode;
//!
//! assert_eq!(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR.to_string(), "E1001");
//! ```

use std::fmt;

/// A stable error number, rendered as `E` plus four digits.
///
/// The thousands digit names the phase: 1 for the lexer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode(u32);

impl DiagnosticCode {
    /// Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self(1001);
    /// Malformed numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self(1003);

    /// Code with the given number.
    #[inline]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// The numeric part.
    #[inline]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.0)
    }
}
