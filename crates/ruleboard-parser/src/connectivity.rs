//! Rebuilding arrow connections from binding records.
//!
//! tldraw stores each attached arrow end as its own binding record, so an
//! arrow bound on both ends has two bindings that may appear anywhere in the
//! record list. They are gathered per arrow and only arrows with both ends
//! attached become a [`Connection`].

use indexmap::IndexMap;
use log::{debug, info, warn};

use ruleboard_core::semantic::{Connection, Connections};

use crate::{
    classify::{RecordClass, classify},
    record::{RawRecord, Terminal},
};

/// The shapes bound so far to one arrow's two terminals.
#[derive(Debug, Default)]
struct TerminalSlots<'a> {
    start: Option<&'a str>,
    end: Option<&'a str>,
}

impl<'a> TerminalSlots<'a> {
    fn bind(&mut self, terminal: Terminal, shape_id: &'a str) {
        match terminal {
            Terminal::Start => self.start = Some(shape_id),
            Terminal::End => self.end = Some(shape_id),
        }
    }

    fn complete(&self) -> Option<Connection> {
        let start = self.start.filter(|id| !id.is_empty())?;
        let end = self.end.filter(|id| !id.is_empty())?;
        Some(Connection::new(start, end))
    }
}

/// Collect complete arrow connections from all binding records.
///
/// When an arrow has several bindings for the same terminal, the last one in
/// record order wins. Arrows missing either terminal are left out and logged.
pub fn resolve_connections(records: &[RawRecord]) -> Connections {
    let mut arrows: IndexMap<&str, TerminalSlots<'_>> = IndexMap::new();
    let mut binding_count = 0;

    for record in records {
        let RecordClass::Binding(binding) = classify(record) else {
            continue;
        };
        binding_count += 1;

        let slots = arrows.entry(binding.from_id.as_str()).or_default();
        match binding.terminal() {
            Some(terminal) => {
                debug!(
                    arrow = binding.from_id,
                    shape = binding.to_id,
                    terminal:? = terminal;
                    "Arrow terminal bound"
                );
                slots.bind(terminal, &binding.to_id);
            }
            None => debug!(
                binding = binding.id,
                terminal:? = binding.props.terminal;
                "Binding has no usable terminal"
            ),
        }
    }

    info!(bindings = binding_count; "Collected bindings");

    let connections: Connections = arrows
        .into_iter()
        .filter_map(|(arrow_id, slots)| match slots.complete() {
            Some(connection) => Some((arrow_id.to_string(), connection)),
            None => {
                warn!(
                    arrow = arrow_id,
                    start:? = slots.start,
                    end:? = slots.end;
                    "Arrow is not bound on both ends"
                );
                None
            }
        })
        .collect();

    info!(connections = connections.len(); "Resolved arrow connections");
    connections
}
