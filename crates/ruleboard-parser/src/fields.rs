//! Reader for the `FIELD:[value, value]` annotation micro-format.
//!
//! Shape labels carry their data as bracketed tokens embedded in free text:
//!
//! ```text
//! $$SYSTEM
//! NAME:[VDI]
//! ADDRESS:[10.0.0.1, 10.0.0.2]
//! ```
//!
//! Grammar:
//!
//! ```text
//! token      := FIELD ":[" value-list "]"
//! value-list := literal ("," literal)*
//! literal    := any text without "," or "]"
//! ```
//!
//! Field names are case-sensitive and may appear any number of times; every
//! occurrence contributes, in order. A field name also matches at the end of
//! a longer word (`XNAME:[a]` is a `NAME` token). Values run up to the first
//! `]`, even across line breaks. There is no escaping: a `]` always closes
//! the list and a `,` always separates values.

use winnow::{
    Parser as _,
    combinator::{preceded, repeat, terminated},
    error::ModalResult,
    token::{take_till, take_until},
};

/// Marker that must appear in a label before any field is read from it.
pub const SENTINEL: &str = "$$";

/// The fields understood in shape labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// System name.
    Name,
    /// System address list.
    Address,
    /// System description.
    Desc,
    /// Firewall port list.
    Port,
    /// Firewall traffic direction.
    Direction,
    /// Firewall purpose.
    Purpose,
}

impl Field {
    /// Returns the field name as written in labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "NAME",
            Field::Address => "ADDRESS",
            Field::Desc => "DESC",
            Field::Port => "PORT",
            Field::Direction => "DIRECTION",
            Field::Purpose => "PURPOSE",
        }
    }

    /// Every value of this field in `text`, in order of appearance.
    pub fn values(&self, text: &str) -> Vec<String> {
        extract_field(text, self.as_str())
    }

    /// The first value of this field in `text`, or an empty string.
    pub fn first(&self, text: &str) -> String {
        self.values(text).into_iter().next().unwrap_or_default()
    }
}

/// Extract every value of `field_name` from `text`.
///
/// Each token's list is split on `,`; values are trimmed and empty ones are
/// dropped. Values of repeated tokens are concatenated in order.
///
/// # Examples
///
/// ```
/// use ruleboard_parser::extract_field;
///
/// let text = "PORT:[22, 443]\nPORT:[8080]";
/// assert_eq!(extract_field(text, "PORT"), ["22", "443", "8080"]);
/// assert!(extract_field(text, "port").is_empty());
/// ```
pub fn extract_field(text: &str, field_name: &str) -> Vec<String> {
    let opener = format!("{field_name}:[");

    value_lists(text, &opener)
        .into_iter()
        .flat_map(|list| list.split(','))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Raw bracket contents of every `opener ... ]` token in `text`.
fn value_lists<'a>(text: &'a str, opener: &str) -> Vec<&'a str> {
    let mut input = text;
    // `repeat(0..)` stops at the first token it cannot complete; with no cut
    // points in `value_list` it never reports an error.
    repeat(0.., |input: &mut &'a str| value_list(input, opener))
        .parse_next(&mut input)
        .unwrap_or_default()
}

/// Skip to the next `opener` and take everything up to the closing `]`.
fn value_list<'a>(input: &mut &'a str, opener: &str) -> ModalResult<&'a str> {
    preceded(
        (take_until(0.., opener), opener),
        terminated(take_till(0.., ']'), ']'),
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        assert_eq!(extract_field("NAME:[VDI]", "NAME"), ["VDI"]);
    }

    #[test]
    fn test_comma_separated_values_are_trimmed() {
        assert_eq!(
            extract_field("ADDRESS:[ 10.0.0.1 ,10.0.0.2 ]", "ADDRESS"),
            ["10.0.0.1", "10.0.0.2"]
        );
    }

    #[test]
    fn test_empty_values_are_dropped() {
        assert!(extract_field("PORT:[]", "PORT").is_empty());
        assert!(extract_field("PORT:[   ]", "PORT").is_empty());
        assert_eq!(extract_field("PORT:[22,,  ,443,]", "PORT"), ["22", "443"]);
    }

    #[test]
    fn test_repeated_fields_concatenate_in_order() {
        let text = "$$SYSTEM\nADDRESS:[10.0.0.1]\nNAME:[VDI]\nADDRESS:[10.0.0.2,10.0.0.3]";
        assert_eq!(
            extract_field(text, "ADDRESS"),
            ["10.0.0.1", "10.0.0.2", "10.0.0.3"]
        );
    }

    #[test]
    fn test_field_names_are_case_sensitive() {
        assert!(extract_field("name:[VDI]", "NAME").is_empty());
        assert!(extract_field("Name:[VDI]", "NAME").is_empty());
    }

    #[test]
    fn test_missing_field() {
        assert!(extract_field("$$SYSTEM\nNAME:[VDI]", "DESC").is_empty());
        assert!(extract_field("", "NAME").is_empty());
    }

    #[test]
    fn test_field_name_matches_as_suffix() {
        assert_eq!(extract_field("HOSTNAME:[web01]", "NAME"), ["web01"]);
    }

    #[test]
    fn test_unterminated_token_contributes_nothing() {
        assert!(extract_field("NAME:[VDI", "NAME").is_empty());
        assert_eq!(extract_field("NAME:[VDI] NAME:[WEB", "NAME"), ["VDI"]);
    }

    #[test]
    fn test_value_runs_to_first_closing_bracket_across_lines() {
        let text = "NAME:[VDI\nADDRESS:[10.0.0.1]";
        assert_eq!(extract_field(text, "NAME"), ["VDI\nADDRESS:[10.0.0.1"]);
        assert_eq!(extract_field(text, "ADDRESS"), ["10.0.0.1"]);
    }

    // Known limitation: no escaping inside a value list.

    #[test]
    fn test_comma_inside_value_always_splits() {
        assert_eq!(
            extract_field(r"DESC:[web\, api]", "DESC"),
            [r"web\", "api"]
        );
    }

    #[test]
    fn test_closing_bracket_inside_value_always_terminates() {
        assert_eq!(extract_field("DESC:[a[0]] tail]", "DESC"), ["a[0"]);
    }

    #[test]
    fn test_field_first() {
        let text = "DIRECTION:[in]\nDIRECTION:[out]";
        assert_eq!(Field::Direction.first(text), "in");
        assert_eq!(Field::Purpose.first(text), "");
    }

    #[test]
    fn test_non_ascii_values() {
        let text = "NAME:[VDI서버]\nDESC:[가상 데스크톱 서버]";
        assert_eq!(Field::Name.values(text), ["VDI서버"]);
        assert_eq!(Field::Desc.first(text), "가상 데스크톱 서버");
    }
}
