//! Error and diagnostic system for the Ruleboard parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the document source
//! - Diagnostic collector for accumulating errors across records
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error with optional error code, source
//! locations, and help text. Diagnostics are wrapped in [`ParseError`] when
//! they are returned from [`parse`](crate::parse).
//!
//! Only the document as a whole can fail. Individual shapes that do not look
//! like systems or firewall rules are skipped, never reported.
//!
//! # Example
//!
//! ```
//! # use ruleboard_parser::error::{Diagnostic, ErrorCode};
//! # use ruleboard_parser::Span;
//!
//! let diag = Diagnostic::error("document has no `records` array")
//!     .with_code(ErrorCode::E002)
//!     .with_label(Span::new(0..1), "expected an object with `records`")
//!     .with_help("export the diagram from tldraw as a `.tldr` file");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::{ParseError, ParseErrorKind};
