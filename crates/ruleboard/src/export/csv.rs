//! CSV export backend.
//!
//! Output is one header line followed by one line per row, with no trailing
//! line break. A field is quoted only when it contains a comma, a double
//! quote or a line break; embedded quotes are doubled. An empty row list
//! produces an empty document, without header or byte order mark.

use std::borrow::Cow;

use log::debug;

use ruleboard_core::row::{FirewallCsvRow, HEADERS};

use super::{Error, Exporter};
use crate::config::LineEnding;

/// UTF-8 byte order mark, so spreadsheet tools detect the encoding.
pub const BOM: char = '\u{FEFF}';

/// Layout options for CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    bom: bool,
    line_ending: LineEnding,
}

impl CsvOptions {
    /// Create CSV options.
    ///
    /// # Arguments
    ///
    /// * `bom` - Prefix non-empty output with [`BOM`].
    /// * `line_ending` - Separator placed between lines.
    pub fn new(bom: bool, line_ending: LineEnding) -> Self {
        Self { bom, line_ending }
    }
}

impl Default for CsvOptions {
    /// No byte order mark and `\n` line endings.
    fn default() -> Self {
        Self::new(false, LineEnding::Lf)
    }
}

/// Exports rows as CSV text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter {
    options: CsvOptions,
}

impl CsvExporter {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }
}

impl Exporter for CsvExporter {
    fn export_rows(&self, rows: &[FirewallCsvRow]) -> Result<String, Error> {
        Ok(to_csv_string(rows, &self.options))
    }
}

/// Encode rows as CSV text.
pub fn to_csv_string(rows: &[FirewallCsvRow], options: &CsvOptions) -> String {
    if rows.is_empty() {
        return String::new();
    }

    debug!(
        rows = rows.len(),
        bom = options.bom,
        line_ending:? = options.line_ending;
        "Writing CSV"
    );

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADERS.join(","));
    lines.extend(rows.iter().map(|row| encode_line(&row.fields())));

    let body = lines.join(options.line_ending.as_str());
    if options.bom {
        format!("{BOM}{body}")
    } else {
        body
    }
}

fn encode_line(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| escape(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote `field` if it contains a delimiter, a quote or a line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
