//! Export functionality for extracted rows.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning firewall rule rows into an output document. It is the final stage
//! in the Ruleboard processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! .tldr document
//!     ↓ parse
//! Semantic Model (ParsedDiagram)
//!     ↓ expand
//! Rows (FirewallCsvRow)
//!     ↓ export (this module)
//! Output document
//! ```
//!
//! # Available Backends
//!
//! - [`csv`] - Comma separated values via [`csv::CsvExporter`]
//! - [`json`] - A JSON array via [`json::JsonExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`RuleboardError::Export`] at the crate boundary.
//!
//! [`RuleboardError::Export`]: crate::RuleboardError::Export

pub mod csv;
pub mod json;

use ruleboard_core::row::FirewallCsvRow;

use crate::config::{ExportConfig, ExportFormat};

/// Abstraction for row export backends.
pub trait Exporter {
    /// Exports rows, in order, to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the rows cannot be encoded.
    fn export_rows(&self, rows: &[FirewallCsvRow]) -> Result<String, Error>;
}

/// Build the exporter selected by `config`.
pub fn exporter_for(config: &ExportConfig) -> Box<dyn Exporter> {
    match config.format() {
        ExportFormat::Csv => Box::new(csv::CsvExporter::new(csv::CsvOptions::new(
            config.bom(),
            config.line_ending(),
        ))),
        ExportFormat::Json => Box::new(json::JsonExporter::new(config.pretty())),
    }
}

/// Errors that can occur during row export.
///
/// This type is converted into [`RuleboardError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`RuleboardError::Export`]: crate::RuleboardError::Export
#[derive(Debug)]
pub enum Error {
    /// Rows could not be encoded in the target format.
    Serialize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
