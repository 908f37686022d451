//! Structural classification of records.
//!
//! Classification looks only at record kinds, never at label text. A record
//! classified as a system or firewall candidate may still be rejected later
//! if its label lacks the `$$` sentinel.

use crate::record::{ARROW_SHAPE, BindingRecord, GEO_SHAPE, RECTANGLE, RawRecord, ShapeRecord};

/// What a record may contribute to the extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordClass<'a> {
    /// A rectangle with a rich text label.
    System(&'a ShapeRecord),
    /// An arrow.
    FirewallRule(&'a ShapeRecord),
    /// An arrow terminal binding.
    Binding(&'a BindingRecord),
    /// Anything else: other shapes, pages, the document record, ...
    Ignored,
}

/// Classify a record by its kind fields.
pub fn classify(record: &RawRecord) -> RecordClass<'_> {
    match record {
        RawRecord::Shape(shape) if is_system_candidate(shape) => RecordClass::System(shape),
        RawRecord::Shape(shape) if shape.kind == ARROW_SHAPE => RecordClass::FirewallRule(shape),
        RawRecord::Binding(binding) => RecordClass::Binding(binding),
        RawRecord::Shape(_) | RawRecord::Other => RecordClass::Ignored,
    }
}

fn is_system_candidate(shape: &ShapeRecord) -> bool {
    shape.kind == GEO_SHAPE
        && shape.props.geo.as_deref() == Some(RECTANGLE)
        && shape
            .props
            .rich_text
            .as_ref()
            .is_some_and(|rich_text| rich_text.is_document())
}
