//! CSV schedule parsing.
//!
//! Schedule exports carry more columns than the engine needs (location
//! text, descriptions, reminder flags); deserialization picks out the
//! `START DATE`, `SUBJECT` and `START TIME` columns by header name and
//! ignores the rest.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::RawEvent;

/// Parse a schedule CSV export into raw event rows.
pub fn parse_schedule_csv(csv_path: &Path) -> Result<Vec<RawEvent>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open schedule CSV {}", csv_path.display()))?;
    read_events(reader)
}

/// Parse schedule CSV content already held in memory.
pub fn parse_schedule_csv_str(content: &str) -> Result<Vec<RawEvent>> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    read_events(reader)
}

fn read_events<R: std::io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawEvent>> {
    let mut events = Vec::new();
    for (row, record) in reader.deserialize::<RawEvent>().enumerate() {
        let event = record.with_context(|| format!("Malformed schedule row {}", row + 1))?;
        events.push(event);
    }
    Ok(events)
}
