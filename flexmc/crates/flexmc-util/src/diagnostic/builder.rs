//! Diagnostic builder for fluent diagnostic construction.
//!
//! Also home of [`SourceSnippet`], the caret-underlined source line printed
//! under a rendered diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Span};

/// A source line with a highlighted column range
///
/// # Examples
///
/// ```
/// use flexmc_util::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = 5 # 2", 1, 7, 8);
/// assert!(snippet.format().ends_with("|       ^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based, in characters)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Format the snippet for display
    ///
    /// Two lines: the numbered source line, then a gutter and at least one
    /// caret under the highlighted range. The padding before the carets
    /// repeats the line's own whitespace, so tabs line up in a terminal.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);

        let padding: String = self
            .line
            .chars()
            .take(self.start_column.saturating_sub(1))
            .map(|c| if c.is_whitespace() { c } else { ' ' })
            .collect();
        let carets = "^".repeat(self.end_column.saturating_sub(self.start_column).max(1));

        format!(
            "{:>width$} | {}\n{:>width$} | {}{}",
            self.line_number,
            self.line,
            "",
            padding,
            carets,
            width = width
        )
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use flexmc_util::{DiagnosticBuilder, DiagnosticCode, Span};
///
/// let diag = DiagnosticBuilder::error("malformed number literal '1.2.3'")
///     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
///     .span(Span::new(0, 5, 1, 1))
///     .help("a number has at most one decimal point")
///     .build();
///
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message, Span::DUMMY),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
