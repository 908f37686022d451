//! Ruleboard - Firewall rule tables from annotated tldraw diagrams.
//!
//! Network diagrams drawn in tldraw mark systems as `$$` rectangles and
//! firewall openings as `$$` arrows between them. This crate reads such a
//! `.tldr` document and produces one row per port, source address and target
//! address, exported as CSV or JSON.

pub mod config;
pub mod export;

mod error;
mod expand;

pub use ruleboard_core::{row, semantic, status};

pub use error::RuleboardError;
pub use expand::expand_rows;

use log::{debug, info, trace};

use config::AppConfig;
use row::FirewallCsvRow;

/// Extracts and renders firewall rules from diagram documents.
///
/// # Examples
///
/// ```rust
/// use ruleboard::{RuleExtractor, config::AppConfig};
///
/// let source = r#"{"records": [
///     {"typeName": "shape", "id": "shape:f", "type": "arrow",
///      "props": {"color": "green", "text": "$$ PORT:[443]"}}
/// ]}"#;
///
/// let extractor = RuleExtractor::new(AppConfig::default());
///
/// // Decode the document into rows
/// let rows = extractor.extract(source)
///     .expect("Failed to extract");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].port, "443");
///
/// // Render rows in the configured format
/// let csv = extractor.render(&rows)
///     .expect("Failed to render");
/// assert!(csv.contains("443"));
/// ```
#[derive(Default)]
pub struct RuleExtractor {
    config: AppConfig,
}

impl RuleExtractor {
    /// Create a new extractor with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including export settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this extractor.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a `.tldr` document into the semantic model.
    ///
    /// # Errors
    ///
    /// Returns `RuleboardError::Parse` if the document is not JSON, has no
    /// `records` array, or contains a record that cannot be decoded.
    pub fn parse(&self, source: &str) -> Result<semantic::ParsedDiagram, RuleboardError> {
        info!("Parsing diagram");

        let diagram = ruleboard_parser::parse(source)
            .map_err(|err| RuleboardError::new_parse_error(err, source))?;

        debug!("Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Turn a `.tldr` document into firewall rule rows.
    ///
    /// Rows follow rule record order, then port, source address and target
    /// address.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`RuleExtractor::parse`] fails; no rows are
    /// produced for a broken document.
    pub fn extract(&self, source: &str) -> Result<Vec<FirewallCsvRow>, RuleboardError> {
        let diagram = self.parse(source)?;
        Ok(expand_rows(&diagram))
    }

    /// Render rows in the configured export format.
    ///
    /// # Errors
    ///
    /// Returns `RuleboardError::Export` if the rows cannot be encoded.
    pub fn render(&self, rows: &[FirewallCsvRow]) -> Result<String, RuleboardError> {
        let export_config = self.config.export();
        info!(format:% = export_config.format(), rows = rows.len(); "Rendering rows");

        let exporter = export::exporter_for(export_config);
        let output = exporter.export_rows(rows)?;

        info!("Rows rendered successfully");
        Ok(output)
    }
}
