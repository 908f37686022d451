//! Reading systems and firewall rules out of shape labels.
//!
//! Both parsers are total: a shape whose label lacks the [`SENTINEL`] is
//! simply not a system or rule, and missing fields become empty values.

use log::trace;

use ruleboard_core::semantic::{FirewallInfo, SystemInfo};

use crate::{
    fields::{Field, SENTINEL},
    record::ShapeRecord,
};

/// Read a system from a rectangle classified as a system candidate.
///
/// Returns `None` if the label does not contain the sentinel. A label with
/// the sentinel but no `NAME` still yields a system with an empty name.
pub fn parse_system(shape: &ShapeRecord) -> Option<SystemInfo> {
    let text = shape
        .props
        .rich_text
        .as_ref()
        .map(|rich_text| rich_text.plain_text())
        .unwrap_or_default();

    if !text.contains(SENTINEL) {
        trace!(id = shape.id; "Rectangle label has no sentinel");
        return None;
    }

    Some(SystemInfo::new(
        shape.id.clone(),
        Field::Name.first(&text),
        Field::Address.values(&text),
        Field::Desc.first(&text),
    ))
}

/// Read a firewall rule from an arrow.
///
/// The rich text label is preferred; the legacy plain `text` property is
/// used when the rich text is missing or empty. Returns `None` if the chosen
/// label does not contain the sentinel. The arrow color is kept verbatim.
pub fn parse_firewall(shape: &ShapeRecord) -> Option<FirewallInfo> {
    let text = arrow_label(shape);

    if !text.contains(SENTINEL) {
        trace!(id = shape.id; "Arrow label has no sentinel");
        return None;
    }

    Some(FirewallInfo::new(
        shape.id.clone(),
        Field::Port.values(&text),
        Field::Direction.first(&text),
        Field::Purpose.first(&text),
        shape.props.color.clone(),
    ))
}

fn arrow_label(shape: &ShapeRecord) -> String {
    let rich = shape
        .props
        .rich_text
        .as_ref()
        .map(|rich_text| rich_text.plain_text())
        .unwrap_or_default();

    if !rich.is_empty() {
        return rich;
    }

    shape
        .props
        .text
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string()
}
