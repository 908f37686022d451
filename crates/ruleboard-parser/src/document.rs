//! Decoding `.tldr` documents.
//!
//! A document is a JSON object whose `records` field lists every record of
//! the diagram. Only that field is read. Records are decoded one by one so
//! that a broken record can be pointed at precisely in the source; records
//! that cannot contribute are skipped without their payload being read.

use log::{debug, info};
use serde::Deserialize;
use serde_json::{error::Category, value::RawValue};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    record::RawRecord,
    span::Span,
};

/// The decoded record list of a diagram.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    records: Vec<RawRecord>,
}

impl Document {
    /// Create a document from already decoded records.
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in document order.
    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }
}

/// Top level of a `.tldr` file, with each record kept as unparsed JSON.
#[derive(Deserialize)]
struct Envelope<'src> {
    #[serde(borrow, default)]
    records: Option<&'src RawValue>,
}

/// Decode a `.tldr` document.
///
/// # Errors
///
/// - [`ErrorCode::E001`] if `source` is not well-formed JSON.
/// - [`ErrorCode::E002`] if the top level is not an object with a `records`
///   array.
/// - [`ErrorCode::E100`] for every rectangle, arrow or binding whose payload
///   cannot be decoded. All records are checked before failing.
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    let envelope: Envelope<'_> =
        serde_json::from_str(source).map_err(|err| envelope_error(source, &err))?;

    let Some(records) = envelope.records else {
        return Err(Diagnostic::error("document has no `records` field")
            .with_code(ErrorCode::E002)
            .with_label(Span::new(0..source.len().min(1)), "top-level object")
            .with_help("export the diagram from tldraw as a `.tldr` file")
            .into());
    };

    let records_span = span_of(source, records.get());
    let raw_records: Vec<&RawValue> = serde_json::from_str(records.get()).map_err(|_| {
        Diagnostic::error("`records` is not an array")
            .with_code(ErrorCode::E002)
            .with_label(records_span, "expected an array of records")
    })?;

    info!(records = raw_records.len(); "Decoding document records");

    let mut collector = DiagnosticCollector::new();
    let mut decoded = Vec::with_capacity(raw_records.len());
    for (index, raw) in raw_records.into_iter().enumerate() {
        match RawRecord::from_json(raw.get()) {
            Ok(record) => decoded.push(record),
            Err(err) => collector.emit(record_error(source, index, raw, &err)),
        }
    }
    collector.finish()?;

    debug!(records = decoded.len(); "Document decoded");
    Ok(Document::new(decoded))
}

fn envelope_error(source: &str, err: &serde_json::Error) -> ParseError {
    let span = Span::at_line_column(source, err.line(), err.column());

    let diagnostic = match err.classify() {
        Category::Data => Diagnostic::error(format!("document is not a diagram: {err}"))
            .with_code(ErrorCode::E002)
            .with_label(span, "expected an object with a `records` array"),
        Category::Syntax | Category::Eof | Category::Io => {
            Diagnostic::error(format!("document is not valid JSON: {err}"))
                .with_code(ErrorCode::E001)
                .with_label(span, "invalid JSON")
        }
    };

    diagnostic.into()
}

fn record_error(source: &str, index: usize, raw: &RawValue, err: &serde_json::Error) -> Diagnostic {
    let record_span = span_of(source, raw.get());
    let error_span =
        Span::at_line_column(raw.get(), err.line(), err.column()).offset(record_span.start());

    Diagnostic::error(format!("record #{index} could not be decoded: {err}"))
        .with_code(ErrorCode::E100)
        .with_label(error_span, "unexpected value")
        .with_secondary_label(record_span, "in this record")
        .with_help("rectangles and arrows need an `id` and a well-formed label, bindings need `id`, `fromId` and `toId`")
}

/// Byte span of `part`, a slice borrowed from `source`.
fn span_of(source: &str, part: &str) -> Span {
    let start = (part.as_ptr() as usize).saturating_sub(source.as_ptr() as usize);
    Span::new(start..start + part.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    fn first_code(err: &ParseError) -> Option<ErrorCode> {
        err.diagnostics().first().and_then(Diagnostic::code)
    }

    #[test]
    fn test_parse_minimal_document() {
        let document = parse_document(r#"{"records": []}"#).expect("document parses");
        assert!(document.records().is_empty());
    }

    #[test]
    fn test_parse_keeps_record_order() {
        let source = r#"{
            "tldrawFileFormatVersion": 1,
            "schema": {"schemaVersion": 2},
            "records": [
                {"typeName": "document", "id": "document:document", "name": ""},
                {"typeName": "shape", "id": "shape:a", "type": "geo",
                 "props": {"geo": "rectangle", "richText": {"type": "doc", "content": []}}},
                {"typeName": "binding", "id": "binding:1", "fromId": "shape:f", "toId": "shape:a", "props": {"terminal": "start"}}
            ]
        }"#;

        let document = parse_document(source).expect("document parses");
        let records = document.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], RawRecord::Other);
        assert!(matches!(&records[1], RawRecord::Shape(s) if s.id == "shape:a"));
        assert!(matches!(&records[2], RawRecord::Binding(b) if b.from_id == "shape:f"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document(r#"{"records": [ }"#).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E001));
        assert_eq!(err.kind(), ParseErrorKind::MalformedDocument);
    }

    #[test]
    fn test_invalid_json_label_points_into_source() {
        let source = "{\n  \"records\": [\n    oops\n  ]\n}";
        let err = parse_document(source).unwrap_err();

        let label = &err.diagnostics()[0].labels()[0];
        assert_eq!(&source[label.span().start()..label.span().end()], "o");
    }

    #[test]
    fn test_empty_input() {
        let err = parse_document("").unwrap_err();
        assert_eq!(first_code(&err), Some(ErrorCode::E001));
    }

    #[test]
    fn test_missing_records() {
        let err = parse_document(r#"{"document": {}}"#).unwrap_err();

        assert_eq!(first_code(&err), Some(ErrorCode::E002));
        assert_eq!(err.kind(), ParseErrorKind::MalformedDocument);
    }

    #[test]
    fn test_records_not_an_array() {
        for source in [
            r#"{"records": {}}"#,
            r#"{"records": "shape"}"#,
            r#"{"records": 3}"#,
        ] {
            let err = parse_document(source).unwrap_err();
            assert_eq!(first_code(&err), Some(ErrorCode::E002), "source: {source}");
        }
    }

    #[test]
    fn test_records_not_an_array_label_covers_value() {
        let source = r#"{"records": {"a": 1}}"#;
        let err = parse_document(source).unwrap_err();

        let span = err.diagnostics()[0].labels()[0].span();
        assert_eq!(&source[span.start()..span.end()], r#"{"a": 1}"#);
    }

    #[test]
    fn test_top_level_not_an_object() {
        for source in ["42", r#""records""#, "null"] {
            let err = parse_document(source).unwrap_err();
            assert_eq!(first_code(&err), Some(ErrorCode::E002), "source: {source}");
        }
    }

    #[test]
    fn test_bad_records_are_all_reported() {
        let source = r#"{"records": [
            {"typeName": "shape", "type": "arrow"},
            {"typeName": "page", "id": "page:1"},
            {"typeName": "binding", "id": "binding:1", "toId": "shape:a"}
        ]}"#;

        let err = parse_document(source).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedFailure);
        assert_eq!(err.diagnostics().len(), 2);
        assert!(err.diagnostics()[0].message().starts_with("record #0"));
        assert!(err.diagnostics()[1].message().starts_with("record #2"));
    }

    #[test]
    fn test_bad_record_secondary_label_covers_record() {
        let record = r#"{"typeName": "shape", "id": "shape:a", "type": "geo", "props": {"geo": "rectangle", "richText": {"type": "doc", "content": 7}}}"#;
        let source = format!(r#"{{"records": [{record}]}}"#);

        let err = parse_document(&source).unwrap_err();
        let labels = err.diagnostics()[0].labels();
        let secondary = labels
            .iter()
            .find(|label| label.is_secondary())
            .expect("record label");
        assert_eq!(
            &source[secondary.span().start()..secondary.span().end()],
            record
        );
    }

    #[test]
    fn test_unrelated_records_do_not_fail_the_document() {
        let source = r#"{"records": [
            {"typeName": "shape", "id": "shape:w", "type": "my-widget", "props": {"color": {"r": 1}}},
            {"typeName": "shape", "id": "shape:t", "type": "text", "props": {"richText": {"type": "doc", "content": 7}}},
            {"typeName": "shape", "id": "shape:r", "type": "geo", "props": {"geo": "rectangle", "richText": "hello"}},
            {"id": "shape:n", "type": "geo"},
            {"typeName": "shape", "id": "shape:f", "type": "arrow", "props": {"text": "$$ PORT:[443]"}}
        ]}"#;

        let document = parse_document(source).expect("document parses");
        let records = document.records();
        assert_eq!(records.len(), 5);
        assert!(records[..4].iter().all(|record| *record == RawRecord::Other));
        assert!(matches!(&records[4], RawRecord::Shape(s) if s.id == "shape:f"));
    }

    #[test]
    fn test_arrow_with_non_string_text_fails() {
        let source = r#"{"records": [
            {"typeName": "shape", "id": "shape:f", "type": "arrow", "props": {"text": 7}}
        ]}"#;

        let err = parse_document(source).unwrap_err();
        assert_eq!(first_code(&err), Some(ErrorCode::E100));
    }
}
