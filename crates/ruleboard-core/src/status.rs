//! Rule status derived from an arrow's color.
//!
//! Diagram authors color firewall arrows to track their progress. This module
//! provides the [`Status`] type which maps those colors onto the fixed set of
//! labels written to the exported table.

use std::fmt;

/// Processing status of a firewall rule.
///
/// The status is read from the raw color name of the arrow that carries the
/// rule. Every color, including a missing one, maps to exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The rule has been applied (`green`).
    Processed,
    /// The rule has not been applied (`red`).
    Unprocessed,
    /// The rule is scheduled to be applied (`blue`).
    Scheduled,
    /// No usable color (`black`, unset or any other color).
    #[default]
    Unknown,
}

impl Status {
    /// Classify a raw arrow color.
    ///
    /// Matching is exact and case-sensitive on the diagram's color names.
    ///
    /// # Examples
    ///
    /// ```
    /// use ruleboard_core::status::Status;
    ///
    /// assert_eq!(Status::from_color(Some("green")), Status::Processed);
    /// assert_eq!(Status::from_color(Some("violet")), Status::Unknown);
    /// assert_eq!(Status::from_color(None), Status::Unknown);
    /// ```
    pub fn from_color(color: Option<&str>) -> Self {
        match color {
            Some("green") => Status::Processed,
            Some("red") => Status::Unprocessed,
            Some("blue") => Status::Scheduled,
            _ => Status::Unknown,
        }
    }

    /// Returns the label written to the exported table.
    pub fn label(self) -> &'static str {
        match self {
            Status::Processed => "처리",
            Status::Unprocessed => "미처리",
            Status::Scheduled => "처리예정",
            Status::Unknown => "미확인",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
