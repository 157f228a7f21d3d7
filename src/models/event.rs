//! Raw schedule rows as exported by the league site.

use serde::{Deserialize, Serialize};

/// A single raw schedule row, supplied externally and never mutated.
///
/// Column names match the CSV export: dates are `MM/DD/YY`, subjects are
/// free text containing `"AwayTeam at HomeTeam"` (optionally followed by
/// `" - "` and trailing detail), start times are `H:MM AM/PM` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    /// Event date string, `MM/DD/YY`.
    #[serde(rename = "START DATE")]
    pub date: String,
    /// Matchup text, `"AwayTeam at HomeTeam"` plus optional detail.
    #[serde(rename = "SUBJECT")]
    pub subject: String,
    /// Explicit start time, `H:MM AM/PM`. Absent when the source left the
    /// column empty.
    #[serde(rename = "START TIME")]
    pub start_time: Option<String>,
}

impl RawEvent {
    /// Convenience constructor used throughout the test suite.
    pub fn new(date: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            subject: subject.into(),
            start_time: None,
        }
    }

    /// Attach a start time string.
    pub fn with_start_time(mut self, time: impl Into<String>) -> Self {
        self.start_time = Some(time.into());
        self
    }
}
