//! Character classes used by the scanner.

/// Checks if a character can start an identifier: a letter or `_`.
///
/// Letters are Unicode alphabetic characters, so `α` starts an identifier.
///
/// ```
/// use flexmc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('x'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier: a letter, an ASCII
/// digit, or `_`.
///
/// Other numeric characters such as `²` or `٣` end the identifier.
///
/// ```
/// use flexmc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('²'));
/// assert!(!is_ident_continue('.'));
/// assert!(!is_ident_continue(' '));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphabetic() || c.is_ascii_digit()
}

/// Checks if `c`, followed by `next`, starts a numeric literal.
///
/// A literal starts with a digit, or with a decimal point directly followed
/// by a digit (`.5`).
///
/// ```
/// use flexmc_lex::unicode::is_number_start;
///
/// assert!(is_number_start('7', ' '));
/// assert!(is_number_start('.', '5'));
/// assert!(!is_number_start('.', 'x'));
/// ```
pub fn is_number_start(c: char, next: char) -> bool {
    c.is_ascii_digit() || (c == '.' && next.is_ascii_digit())
}
