//! # Ruleboard Parser
//!
//! Reads firewall rules out of tldraw (`.tldr`) diagram documents. This
//! crate covers everything from source text up to the semantic model:
//!
//! 1. **Decode** - Read the JSON document into typed records
//! 2. **Classify** - Sort records into system, rule and binding candidates
//! 3. **Interpret** - Read `$$` labels with the `FIELD:[...]` micro-format
//! 4. **Connect** - Pair arrow bindings into source/target connections
//!
//! ## Usage
//!
//! ```
//! # use ruleboard_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{"records": [
//!         {"typeName": "shape", "id": "shape:f", "type": "arrow",
//!          "props": {"text": "$$FIREWALL PORT:[443]"}}
//!     ]}"#;
//!
//!     let diagram = parse(source)?;
//!     assert_eq!(diagram.firewalls().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod classify;
mod connectivity;
mod document;
mod fields;
mod interpret;
mod record;
mod span;

pub use classify::{RecordClass, classify};
pub use connectivity::resolve_connections;
pub use document::{Document, parse_document};
pub use fields::{Field, SENTINEL, extract_field};
pub use interpret::{parse_firewall, parse_system};
pub use record::{
    BindingProps, BindingRecord, RawRecord, RichText, RichTextNode, ShapeProps, ShapeRecord,
    Terminal,
};
pub use span::Span;

use log::{debug, info, trace};

use ruleboard_core::semantic::ParsedDiagram;

use error::ParseError;

/// Parse a `.tldr` document into the semantic model.
///
/// This is the main entry point of the crate. Records that are not systems,
/// firewall rules or bindings are skipped silently.
///
/// # Errors
///
/// Returns a [`ParseError`] if the document is not JSON, has no `records`
/// array, or contains records that cannot be decoded. No partial result is
/// produced.
pub fn parse(source: &str) -> Result<ParsedDiagram, ParseError> {
    let document = parse_document(source)?;
    Ok(interpret_document(&document))
}

/// Build the semantic model from decoded records.
///
/// Never fails: every record either contributes or is skipped.
pub fn interpret_document(document: &Document) -> ParsedDiagram {
    let mut systems = Vec::new();
    let mut firewalls = Vec::new();

    for record in document.records() {
        match classify(record) {
            RecordClass::System(shape) => {
                if let Some(system) = parse_system(shape) {
                    debug!(id = system.id(), name = system.name(); "Parsed system");
                    systems.push(system);
                }
            }
            RecordClass::FirewallRule(shape) => {
                if let Some(rule) = parse_firewall(shape) {
                    debug!(
                        id = rule.id(),
                        ports:? = rule.ports(),
                        purpose = rule.purpose();
                        "Parsed firewall rule"
                    );
                    firewalls.push(rule);
                }
            }
            RecordClass::Binding(_) | RecordClass::Ignored => {}
        }
    }

    let connections = resolve_connections(document.records());
    let diagram = ParsedDiagram::new(systems, firewalls, connections);

    info!(
        systems = diagram.system_count(),
        firewalls = diagram.firewalls().len();
        "Interpreted diagram"
    );
    trace!(diagram:?; "Parsed diagram");

    diagram
}
