//! The flat firewall rule row.
//!
//! A [`FirewallCsvRow`] is one line of the exported table: a single port
//! opened from one source address to one target address.

use serde::{Deserialize, Serialize};

/// Column headers, in the order of [`FirewallCsvRow::fields`].
pub const HEADERS: [&str; 9] = [
    "Source System",
    "Source Address",
    "Target System",
    "Target Address",
    "Port",
    "Direction",
    "Purpose",
    "Description",
    "Status",
];

/// One exported firewall rule row.
///
/// Every field is plain text. Fields that could not be resolved from the
/// diagram are empty strings rather than missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallCsvRow {
    pub source_system: String,
    pub source_address: String,
    pub target_system: String,
    pub target_address: String,
    pub port: String,
    pub direction: String,
    pub purpose: String,
    pub description: String,
    pub status: String,
}

impl FirewallCsvRow {
    /// Returns the row's fields in column order.
    pub fn fields(&self) -> [&str; 9] {
        [
            self.source_system.as_str(),
            self.source_address.as_str(),
            self.target_system.as_str(),
            self.target_address.as_str(),
            self.port.as_str(),
            self.direction.as_str(),
            self.purpose.as_str(),
            self.description.as_str(),
            self.status.as_str(),
        ]
    }
}
