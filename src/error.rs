//! Error types for schedule densification and layout.
//!
//! The policy is fail fast: a corrupt or ambiguous schedule must not
//! silently produce a plausible-looking but wrong calendar. Every variant
//! carries the offending input so the caller can diagnose the source data.

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Error type for schedule densification and grid layout.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Malformed date or time text in the source data.
    #[error("failed to parse {kind} '{value}'")]
    Parse {
        kind: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Matchup subject line without the `" at "` team separator.
    #[error("matchup '{subject}' does not contain the ' at ' separator")]
    Format { subject: String },

    /// More than one raw event on the same date.
    #[error("{count} events share the date {date}; the schedule is ambiguous")]
    AmbiguousSchedule { date: String, count: usize },

    /// Non-positive grid dimensions or other configuration problems.
    #[error("invalid calendar configuration: {0}")]
    Config(String),
}

impl CalendarError {
    /// Create a parse error for a malformed date or time string.
    pub fn parse(kind: &'static str, value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::Parse {
            kind,
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
