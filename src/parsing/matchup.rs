//! Matchup subject-line parsing.

use crate::error::{CalendarError, Result};

/// A parsed `"AwayTeam at HomeTeam"` subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub away_team: String,
    pub home_team: String,
}

impl Matchup {
    /// Parse a schedule subject line.
    ///
    /// Trailing detail after `" - "` is discarded before splitting on the
    /// literal `" at "` separator. A subject without the separator is a
    /// data-integrity failure.
    pub fn parse(subject: &str) -> Result<Self> {
        let matchup = subject.split(" - ").next().unwrap_or(subject);
        let (away, home) = matchup.split_once(" at ").ok_or_else(|| CalendarError::Format {
            subject: subject.to_string(),
        })?;
        Ok(Self {
            away_team: away.trim().to_string(),
            home_team: home.trim().to_string(),
        })
    }
}
