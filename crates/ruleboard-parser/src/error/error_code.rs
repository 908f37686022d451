//! Error codes for the Ruleboard diagnostic system.
//!
//! Error codes are organized by failure mode:
//! - `E0xx` - Malformed input document
//! - `E1xx` - Unexpected failure while decoding records

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed document.
    ///
    /// The input is not well-formed JSON.
    E001,

    /// Missing records sequence.
    ///
    /// The document is valid JSON but has no `records` array at the top level.
    E002,

    // =========================================================================
    // Record Errors (E1xx)
    // =========================================================================
    /// Unexpected record payload.
    ///
    /// A record could not be decoded, for example because a shape has no `id`
    /// or its rich text content is not a list.
    E100,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
        }
    }

    /// Returns `true` for codes that reject the document's overall format.
    pub fn is_document_error(&self) -> bool {
        matches!(self, ErrorCode::E001 | ErrorCode::E002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
    }

    #[test]
    fn test_document_error_codes() {
        assert!(ErrorCode::E001.is_document_error());
        assert!(ErrorCode::E002.is_document_error());
        assert!(!ErrorCode::E100.is_document_error());
    }
}
