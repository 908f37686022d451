//! Collector for accumulating diagnostics while decoding records.
//!
//! Every record of a document is decoded even after one fails, so a single
//! run reports all broken records at once.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// Returns `Err(ParseError)` with all diagnostics if any were emitted.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.diagnostics.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(self.diagnostics))
        }
    }
}
