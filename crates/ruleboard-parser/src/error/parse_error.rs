//! The ParseError type for wrapping document diagnostics.
//!
//! [`ParseError`] wraps one or more [`Diagnostic`]s produced while decoding
//! a diagram document, and tells callers which failure mode occurred.

use std::fmt;

use crate::error::Diagnostic;

/// The two ways a document can fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input is not JSON, or has no `records` array.
    MalformedDocument,
    /// The document is well formed but a record could not be decoded.
    UnexpectedFailure,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::MalformedDocument => write!(f, "malformed input document"),
            ParseErrorKind::UnexpectedFailure => write!(f, "unexpected parse failure"),
        }
    }
}

/// Error type for document parsing.
///
/// Wraps one or more diagnostics.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Classify this error by the code of its first diagnostic.
    ///
    /// Diagnostics without a document error code count as unexpected failures.
    pub fn kind(&self) -> ParseErrorKind {
        let is_document_error = self
            .diagnostics
            .first()
            .and_then(Diagnostic::code)
            .is_some_and(|code| code.is_document_error());

        if is_document_error {
            ParseErrorKind::MalformedDocument
        } else {
            ParseErrorKind::UnexpectedFailure
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}
