//! Diagnostic module - Error reporting infrastructure.
//!
//! Compiler phases never abort on bad input. They describe the problem as a
//! [`Diagnostic`], hand it to a [`Handler`], and keep going; the caller
//! decides afterwards whether the collected errors are fatal.
//!
//! # Examples
//!
//! ```
//! use flexmc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '$'")
//!     .span(Span::new(2, 3, 1, 3))
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     for diag in handler.diagnostics() {
//!         eprintln!("{}", diag.render("a $ b"));
//!     }
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::{Cell, RefCell};
use std::fmt;

/// An error found in the input, with its location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Suggestions for fixing the input
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic against the text it was produced from.
    ///
    /// The header carries code and message. When the span names a line of
    /// `source`, that line follows with carets under the offending range.
    /// Help lines come last.
    ///
    /// # Examples
    ///
    /// ```
    /// use flexmc_util::{Diagnostic, DiagnosticCode, Span};
    ///
    /// let source = "x = 5 $ 2";
    /// let diag = Diagnostic::error("unexpected character '$'", Span::new(6, 7, 1, 7))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    ///
    /// let rendered = diag.render(source);
    /// assert!(rendered.starts_with("error[E1001]: unexpected character '$'"));
    /// assert!(rendered.contains("  1 | x = 5 $ 2"));
    /// ```
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("{}\n", self);

        if self.span.line > 0 {
            if let Some(line) = source.lines().nth(self.span.line as usize - 1) {
                out.push_str(&format!("  --> {}:{}\n", self.span.line, self.span.column));
                let start = self.span.column as usize;
                let width = self
                    .span
                    .slice(source)
                    .map(|text| text.chars().count())
                    .unwrap_or(1);
                let snippet = SourceSnippet::new(line, self.span.line as usize, start, start + width);
                out.push_str(&snippet.format());
                out.push('\n');
            }
        }

        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "error[{}]: {}", code, self.message),
            None => write!(f, "error: {}", self.message),
        }
    }
}

/// Handler for collecting diagnostics
///
/// Emission goes through `&self`, so a handler can be shared by reference
/// between the phases of one compilation. It is not `Sync`.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: Cell<bool>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: Cell::new(false),
        }
    }

    /// Create a handler that panics on the first error (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: Cell::new(true),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error.get() {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
