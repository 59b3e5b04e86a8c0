//! flexmc-util - Core Utilities and Foundation Types
//!
//! Types shared by the flexMC compiler phases:
//!
//! - [`span`] - Source locations attached to tokens and diagnostics
//! - [`diagnostic`] - Error collection, codes, and rendering
//!
//! # Example
//!
//! ```
//! use flexmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use span::Span;

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(Diagnostic: Clone, Send, Sync);
static_assertions::assert_not_impl_any!(Handler: Sync);
