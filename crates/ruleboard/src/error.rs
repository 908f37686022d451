//! Error types for Ruleboard operations.
//!
//! This module provides the main error type [`RuleboardError`] which wraps
//! the error conditions that can occur while extracting firewall rules.

use std::io;

use thiserror::Error;

use ruleboard_parser::error::ParseError;

/// The main error type for Ruleboard operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the document source next to the diagnostics so
/// that their spans can be rendered as source snippets.
#[derive(Debug, Error)]
pub enum RuleboardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RuleboardError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl RuleboardError {
    /// Create a new `Parse` error with the associated source document.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
