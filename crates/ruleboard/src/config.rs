//! Configuration types for rule extraction.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`ExportConfig`] - Controls the output format of extracted rows.
//!
//! # Example
//!
//! ```
//! # use ruleboard::config::{AppConfig, ExportFormat};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.export().format(), ExportFormat::Csv);
//! assert!(config.export().bom());
//! ```

use std::fmt;

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given export configuration.
    pub fn new(export: ExportConfig) -> Self {
        Self { export }
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Returns a copy of this configuration using `format` for export.
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.export.format = format;
        self
    }
}

/// Output settings for extracted rows.
///
/// Missing fields fall back to their defaults: CSV with a byte order mark,
/// `\n` line endings and pretty-printed JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    format: ExportFormat,
    bom: bool,
    line_ending: LineEnding,
    pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            bom: true,
            line_ending: LineEnding::default(),
            pretty: true,
        }
    }
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`].
    ///
    /// # Arguments
    ///
    /// * `format` - Output format.
    /// * `bom` - Prefix CSV output with a UTF-8 byte order mark.
    /// * `line_ending` - Line separator for CSV output.
    /// * `pretty` - Pretty-print JSON output.
    pub fn new(format: ExportFormat, bom: bool, line_ending: LineEnding, pretty: bool) -> Self {
        Self {
            format,
            bom,
            line_ending,
            pretty,
        }
    }

    /// Returns the output format.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Returns `true` if CSV output starts with a byte order mark.
    pub fn bom(&self) -> bool {
        self.bom
    }

    /// Returns the CSV line ending.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Returns `true` if JSON output is pretty-printed.
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Output format of extracted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma separated values with a header line.
    #[default]
    Csv,
    /// A JSON array of row objects.
    Json,
}

impl ExportFormat {
    /// Returns the conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Line separator used between CSV lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    /// Returns the separator characters.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        let export = config.export();

        assert_eq!(export.format(), ExportFormat::Csv);
        assert!(export.bom());
        assert_eq!(export.line_ending(), LineEnding::Lf);
        assert!(export.pretty());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("valid config");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_export_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [export]
            bom = false
            line_ending = "crlf"
            "#,
        )
        .expect("valid config");

        let export = config.export();
        assert_eq!(export.format(), ExportFormat::Csv);
        assert!(!export.bom());
        assert_eq!(export.line_ending(), LineEnding::Crlf);
        assert!(export.pretty());
    }

    #[test]
    fn test_json_format() {
        let config: AppConfig = toml::from_str(
            r#"
            [export]
            format = "json"
            pretty = false
            "#,
        )
        .expect("valid config");

        assert_eq!(config.export().format(), ExportFormat::Json);
        assert!(!config.export().pretty());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[export]\nformat = \"xlsx\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_format_overrides() {
        let config = AppConfig::default().with_format(ExportFormat::Json);

        assert_eq!(config.export().format(), ExportFormat::Json);
        assert!(config.export().bom());
    }

    #[test]
    fn test_line_ending_and_extension() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }
}
