//! Schedule densification: sparse raw events into a gap-free season.
//!
//! The densifier walks every ordinal day between the first and last event
//! date and classifies it as a game, an off day, or the all-star day, so
//! downstream layout can treat the season as a dense sequence.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};
use crate::models::{Day, DayCategory, DayOrdinal, Location, RawEvent, Season};
use crate::parsing::{dates, Matchup};

/// Densify raw schedule rows into one [`Day`] per ordinal date from the
/// first event's date to the last event's date, inclusive.
///
/// The first `season_start_offset` rows are skipped (schedule exports often
/// lead with pre-season exhibition games). The function is pure: no side
/// effects beyond the returned season.
pub fn densify(events: &[RawEvent], config: &CalendarConfig) -> Result<Season> {
    let events = events
        .get(config.season_start_offset..)
        .unwrap_or_default();
    if events.is_empty() {
        return Ok(Season::new(Vec::new()));
    }

    let opening = DayOrdinal::from_date(dates::parse_event_date(&events[0].date)?);
    let closing =
        DayOrdinal::from_date(dates::parse_event_date(&events[events.len() - 1].date)?);

    let mut by_ordinal: HashMap<DayOrdinal, Vec<&RawEvent>> = HashMap::new();
    for event in events {
        let date = dates::parse_event_date(&event.date)?;
        by_ordinal.entry(DayOrdinal::from_date(date)).or_default().push(event);
    }

    let all_star = config.all_star_date.map(DayOrdinal::from_date);

    let mut days = Vec::with_capacity((closing.value() - opening.value() + 1).max(0) as usize);
    for value in opening.value()..=closing.value() {
        let ordinal = DayOrdinal::new(value);
        let date = ordinal.to_date();

        let mut day = match by_ordinal.get(&ordinal).map(Vec::as_slice) {
            Some(&[event]) => game_day(ordinal, date, event, config)?,
            Some(duplicates) => {
                return Err(CalendarError::AmbiguousSchedule {
                    date: dates::format_day_month_year(date),
                    count: duplicates.len(),
                });
            }
            None if all_star == Some(ordinal) => Day {
                ordinal,
                iso_date: date,
                category: DayCategory::AllStar,
                location: Location::None,
                opponent: config.all_star_label.clone(),
                start_time: None,
                highlighted: false,
            },
            None => Day {
                ordinal,
                iso_date: date,
                category: DayCategory::Off,
                location: Location::None,
                opponent: String::new(),
                start_time: None,
                highlighted: false,
            },
        };

        day.highlighted = config
            .highlights
            .contains(&dates::format_day_month_year(date));
        days.push(day);
    }

    debug!(
        events = events.len(),
        days = days.len(),
        "densified season"
    );
    Ok(Season::new(days))
}

fn game_day(
    ordinal: DayOrdinal,
    date: NaiveDate,
    event: &RawEvent,
    config: &CalendarConfig,
) -> Result<Day> {
    let matchup = Matchup::parse(&event.subject)?;
    let (location, opponent) = if matchup.home_team == config.team {
        (Location::Home, matchup.away_team)
    } else {
        (Location::Away, matchup.home_team)
    };

    let start_time = match event.start_time.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(dates::parse_start_time(s)?),
        _ => None,
    };

    Ok(Day {
        ordinal,
        iso_date: date,
        category: DayCategory::Game,
        location,
        opponent,
        start_time,
        highlighted: false,
    })
}
