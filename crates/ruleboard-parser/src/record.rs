//! Typed view of tldraw document records.
//!
//! A `.tldr` file stores its whole diagram as a flat list of records. Each
//! record names its kind in `typeName`. Decoding happens in two steps: a
//! loose look at `typeName`, `type` and `props.geo` decides whether the
//! record can contribute at all, and only rectangles with a rich text label,
//! arrows and bindings are then decoded into their typed form. Every other
//! record (pages, cameras, text shapes, custom shapes, records without a
//! usable `typeName`) becomes [`RawRecord::Other`] without its payload being
//! read. Unknown fields are ignored throughout.

use std::str::FromStr;

use serde::{
    Deserialize, Deserializer,
    de::{DeserializeOwned, Error as _},
};
use serde_json::Value;

pub(crate) const GEO_SHAPE: &str = "geo";
pub(crate) const ARROW_SHAPE: &str = "arrow";
pub(crate) const RECTANGLE: &str = "rectangle";
const DOC: &str = "doc";

/// One record of a tldraw document.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    /// A drawn shape (`"typeName": "shape"`).
    Shape(ShapeRecord),
    /// One end of an arrow attached to a shape (`"typeName": "binding"`).
    Binding(BindingRecord),
    /// Any record that cannot contribute to the extraction.
    Other,
}

impl RawRecord {
    /// Decode one record from its JSON text.
    ///
    /// # Errors
    ///
    /// Fails if `json` is not valid JSON, or if a rectangle, arrow or
    /// binding carries a payload that cannot be read: a missing `id`, a
    /// `doc` rich text whose `content` is not a list, or an arrow `text`
    /// that is not a string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let header: Value = serde_json::from_str(json)?;

        let record = match Candidate::of(&header) {
            Some(Candidate::Rectangle) => {
                let wire: RectangleWire = serde_json::from_str(json)?;
                RawRecord::Shape(ShapeRecord {
                    id: wire.id,
                    kind: GEO_SHAPE.to_string(),
                    props: ShapeProps {
                        geo: Some(RECTANGLE.to_string()),
                        rich_text: wire.props.rich_text,
                        ..ShapeProps::default()
                    },
                })
            }
            Some(Candidate::Arrow) => {
                let wire: ArrowWire = serde_json::from_str(json)?;
                RawRecord::Shape(ShapeRecord {
                    id: wire.id,
                    kind: ARROW_SHAPE.to_string(),
                    props: ShapeProps {
                        geo: None,
                        rich_text: wire.props.rich_text,
                        text: wire.props.text,
                        color: wire.props.color,
                    },
                })
            }
            Some(Candidate::Binding) => RawRecord::Binding(serde_json::from_str(json)?),
            None => RawRecord::Other,
        };

        Ok(record)
    }
}

/// Record kinds worth decoding in full.
enum Candidate {
    Rectangle,
    Arrow,
    Binding,
}

impl Candidate {
    fn of(header: &Value) -> Option<Self> {
        match (str_at(header, "/typeName")?, str_at(header, "/type")) {
            ("shape", Some(GEO_SHAPE))
                if str_at(header, "/props/geo") == Some(RECTANGLE)
                    && str_at(header, "/props/richText/type") == Some(DOC) =>
            {
                Some(Candidate::Rectangle)
            }
            ("shape", Some(ARROW_SHAPE)) => Some(Candidate::Arrow),
            ("binding", _) => Some(Candidate::Binding),
            _ => None,
        }
    }
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

#[derive(Deserialize)]
struct RectangleWire {
    id: String,
    #[serde(default, deserialize_with = "object_or_default")]
    props: RectangleProps,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RectangleProps {
    #[serde(default, deserialize_with = "doc_rich_text")]
    rich_text: Option<RichText>,
}

#[derive(Deserialize)]
struct ArrowWire {
    id: String,
    #[serde(default, deserialize_with = "object_or_default")]
    props: ArrowProps,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArrowProps {
    #[serde(default, deserialize_with = "doc_rich_text")]
    rich_text: Option<RichText>,
    #[serde(default, deserialize_with = "legacy_text")]
    text: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    color: Option<String>,
}

/// Reads an object into `T`; any other JSON value yields `T::default()`.
fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(T::default());
    }
    T::deserialize(value).map_err(D::Error::custom)
}

/// Reads a rich text label; labels that are not a `doc` are dropped.
fn doc_rich_text<'de, D>(deserializer: D) -> Result<Option<RichText>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if str_at(&value, "/type") != Some(DOC) {
        return Ok(None);
    }
    RichText::deserialize(value)
        .map(Some)
        .map_err(D::Error::custom)
}

/// Reads the legacy arrow label. Empty-ish values (`null`, `false`, `0`)
/// count as no label.
fn legacy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(number) if number.as_f64() == Some(0.0) => Ok(None),
        other => Err(D::Error::custom(format!(
            "invalid type: {other}, expected a string"
        ))),
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

/// A drawn shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    /// Record id, unique within the document (e.g. `shape:abc`).
    pub id: String,
    /// Shape sub-kind such as `geo`, `arrow` or `text`.
    pub kind: String,
    pub props: ShapeProps,
}

/// The shape properties read by the extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeProps {
    /// Geometry of a `geo` shape, e.g. `rectangle` or `ellipse`.
    pub geo: Option<String>,
    /// Structured label text.
    pub rich_text: Option<RichText>,
    /// Plain label text used by older documents.
    pub text: Option<String>,
    /// Named color such as `black`, `green` or `light-blue`.
    pub color: Option<String>,
}

/// A rich text label: `{"type": "doc", "content": [paragraph, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichText {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub content: Option<Vec<RichTextNode>>,
}

/// A paragraph or inline node of a [`RichText`] label.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichTextNode {
    pub content: Option<Vec<RichTextNode>>,
    pub text: Option<String>,
}

impl RichText {
    /// Returns `true` if this is a rich text document.
    pub fn is_document(&self) -> bool {
        self.kind == DOC
    }

    /// Flatten the label into plain text.
    ///
    /// Every non-empty text node of every paragraph is followed by a line
    /// break, and the result is trimmed. Anything other than a `doc` with
    /// content yields an empty string.
    pub fn plain_text(&self) -> String {
        if !self.is_document() {
            return String::new();
        }
        let Some(paragraphs) = &self.content else {
            return String::new();
        };

        let mut text = String::new();
        let nodes = paragraphs
            .iter()
            .filter_map(|paragraph| paragraph.content.as_deref())
            .flatten();
        for node in nodes {
            if let Some(node_text) = node.text.as_deref().filter(|t| !t.is_empty()) {
                text.push_str(node_text);
                text.push('\n');
            }
        }

        text.trim().to_string()
    }
}

/// An arrow terminal attached to a shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingRecord {
    pub id: String,
    /// The arrow this binding belongs to.
    pub from_id: String,
    /// The shape the arrow terminal is attached to.
    pub to_id: String,
    #[serde(default, deserialize_with = "object_or_default")]
    pub props: BindingProps,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BindingProps {
    #[serde(default, deserialize_with = "string_or_none")]
    pub terminal: Option<String>,
}

impl BindingRecord {
    /// Returns the terminal role, or `None` if it is missing or unrecognized.
    pub fn terminal(&self) -> Option<Terminal> {
        self.props.terminal.as_deref()?.parse().ok()
    }
}

/// Which end of an arrow a binding attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Start,
    End,
}

impl FromStr for Terminal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Terminal::Start),
            "end" => Ok(Terminal::End),
            other => Err(format!("unknown terminal `{other}`")),
        }
    }
}
