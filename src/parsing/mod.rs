//! Parsers for raw season schedule data.
//!
//! This module provides parsers for the input formats consumed by the
//! densifier:
//!
//! - [`csv_parser`]: Parse schedule CSV exports into [`RawEvent`](crate::models::RawEvent) rows
//! - [`matchup`]: Parse `"AwayTeam at HomeTeam"` subject lines
//! - [`dates`]: The date and time string formats used by the sources

pub mod csv_parser;
pub mod dates;
pub mod matchup;

#[cfg(test)]
mod matchup_tests;

pub use matchup::Matchup;
