//! JSON export backend.

use log::debug;

use ruleboard_core::row::FirewallCsvRow;

use super::{Error, Exporter};

/// Exports rows as a JSON array of objects with camelCase keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn export_rows(&self, rows: &[FirewallCsvRow]) -> Result<String, Error> {
        to_json_string(rows, self.pretty)
    }
}

/// Encode rows as a JSON array.
///
/// # Errors
///
/// Returns [`Error::Serialize`] if encoding fails.
pub fn to_json_string(rows: &[FirewallCsvRow], pretty: bool) -> Result<String, Error> {
    debug!(rows = rows.len(), pretty; "Writing JSON");

    let encoded = if pretty {
        serde_json::to_string_pretty(rows)
    } else {
        serde_json::to_string(rows)
    };
    encoded.map_err(|err| Error::Serialize(err.to_string()))
}
