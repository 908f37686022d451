//! Example: Exporting rules from the semantic model
//!
//! This example builds a diagram from semantic types directly, without a
//! `.tldr` document, and prints the resulting rule table.

use ruleboard::{
    RuleExtractor,
    config::{AppConfig, ExportConfig, ExportFormat, LineEnding},
    expand_rows,
    semantic::{Connection, Connections, FirewallInfo, ParsedDiagram, SystemInfo},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from semantic model...\n");

    let systems = [
        SystemInfo::new(
            "shape:vdi",
            "VDI",
            vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
            "virtual desktops",
        ),
        SystemInfo::new(
            "shape:web",
            "WEB",
            vec!["10.0.1.10".to_string()],
            "public web tier",
        ),
        SystemInfo::new(
            "shape:db",
            "DB",
            vec!["10.0.2.5".to_string()],
            "primary database",
        ),
    ];

    // Arrows carry the opened ports; their color is the rule status
    let rules = vec![
        FirewallInfo::new(
            "shape:vdi-web",
            vec!["22".to_string(), "443".to_string()],
            "in",
            "admin access",
            Some("green".to_string()),
        ),
        FirewallInfo::new(
            "shape:web-db",
            vec!["5432".to_string()],
            "out",
            "queries",
            Some("blue".to_string()),
        ),
    ];

    let mut connections = Connections::new();
    connections.insert("shape:vdi-web", Connection::new("shape:vdi", "shape:web"));
    connections.insert("shape:web-db", Connection::new("shape:web", "shape:db"));

    let diagram = ParsedDiagram::new(systems, rules, connections);
    let rows = expand_rows(&diagram);
    println!("Expanded {} rules into {} rows\n", diagram.firewalls().len(), rows.len());

    // Without a BOM so the table prints cleanly in a terminal
    let config = AppConfig::new(ExportConfig::new(
        ExportFormat::Csv,
        false,
        LineEnding::Lf,
        true,
    ));
    let csv = RuleExtractor::new(config).render(&rows)?;
    println!("{csv}");

    Ok(())
}
