//! Typed records for the densified season calendar.

pub mod day;
pub mod event;

pub use day::{Day, DayCategory, DayOrdinal, Location, Season};
pub use event::RawEvent;
