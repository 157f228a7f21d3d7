//! Densified day records and the season sequence that owns them.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Proleptic-Gregorian ordinal day number.
/// Day 1 = 0001-01-01, monotonic and calendar-independent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DayOrdinal(i32);

impl DayOrdinal {
    /// Create a new ordinal value.
    pub fn new(v: i32) -> Self {
        Self(v)
    }

    /// Raw ordinal value as i32.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Ordinal of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.num_days_from_ce())
    }

    /// Calendar date for this ordinal.
    pub fn to_date(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0).unwrap_or(NaiveDate::MIN)
    }
}

impl From<NaiveDate> for DayOrdinal {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl std::fmt::Display for DayOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a densified day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayCategory {
    /// A scheduled game.
    Game,
    /// A day with no event.
    Off,
    /// The designated all-star day.
    AllStar,
}

/// Where a game is played, from the configured team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    Home,
    Away,
    /// Off days and the all-star day carry no location.
    None,
}

/// One densified day of the season.
///
/// `start_time` is `Some` only when the source explicitly provided a start
/// time; a genuine midnight start is `Some(00:00)` and stays distinguishable
/// from "no time recorded".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub ordinal: DayOrdinal,
    pub iso_date: NaiveDate,
    pub category: DayCategory,
    /// Must be `Location::None` unless `category == Game`.
    pub location: Location,
    /// Empty unless the day is a game or the all-star day.
    pub opponent: String,
    pub start_time: Option<NaiveTime>,
    /// True iff the day's `DD/MM/YYYY` string is in the highlight set.
    pub highlighted: bool,
}

impl Day {
    /// The day's date in the `DD/MM/YYYY` convention used by highlight sets.
    pub fn formatted_date(&self) -> String {
        self.iso_date.format("%d/%m/%Y").to_string()
    }

    /// Calendar month of this day, 1-12.
    pub fn month(&self) -> u32 {
        self.iso_date.month()
    }

    /// Day of month, 1-31.
    pub fn day_of_month(&self) -> u32 {
        self.iso_date.day()
    }
}

/// Ordered, gap-free sequence of days covering the season.
///
/// Invariant: exactly one entry per ordinal from the opening day to the
/// closing day inclusive, strictly ascending. Constructed once by the
/// densifier and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    days: Vec<Day>,
}

impl Season {
    /// Build a season from an already-dense, ordered day sequence.
    /// Only the densifier constructs seasons.
    pub(crate) fn new(days: Vec<Day>) -> Self {
        debug_assert!(days
            .windows(2)
            .all(|w| w[1].ordinal.value() == w[0].ordinal.value() + 1));
        Self { days }
    }

    /// The densified day records, in ordinal order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Number of days in the season.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Ordinal of the first day, when the season is non-empty.
    pub fn opening_day(&self) -> Option<DayOrdinal> {
        self.days.first().map(|d| d.ordinal)
    }

    /// Ordinal of the last day, when the season is non-empty.
    pub fn closing_day(&self) -> Option<DayOrdinal> {
        self.days.last().map(|d| d.ordinal)
    }

    /// Distinct `(year, month)` pairs present in the season, in
    /// chronological order.
    pub fn months(&self) -> Vec<(i32, u32)> {
        let mut months: Vec<(i32, u32)> = Vec::new();
        for day in &self.days {
            let key = (day.iso_date.year(), day.iso_date.month());
            if months.last() != Some(&key) {
                months.push(key);
            }
        }
        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn off_day(date: NaiveDate) -> Day {
        Day {
            ordinal: DayOrdinal::from_date(date),
            iso_date: date,
            category: DayCategory::Off,
            location: Location::None,
            opponent: String::new(),
            start_time: None,
            highlighted: false,
        }
    }

    #[test]
    fn test_ordinal_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
        let ordinal = DayOrdinal::from_date(date);
        assert_eq!(ordinal.to_date(), date);
    }

    #[test]
    fn test_ordinal_is_monotonic_across_month_boundary() {
        let march_31 = DayOrdinal::from_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap());
        let april_1 = DayOrdinal::from_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(april_1.value(), march_31.value() + 1);
    }

    #[test]
    fn test_formatted_date_uses_day_month_year() {
        let day = off_day(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());
        assert_eq!(day.formatted_date(), "15/07/2025");
    }

    #[test]
    fn test_season_months_deduplicates_in_order() {
        let days: Vec<Day> = (0..40)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap()
                    + chrono::Duration::days(i);
                off_day(date)
            })
            .collect();
        let season = Season::new(days);
        assert_eq!(season.months(), vec![(2025, 3), (2025, 4), (2025, 5)]);
    }

    #[test]
    fn test_season_opening_and_closing() {
        let opening = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
        let days: Vec<Day> = (0..3)
            .map(|i| off_day(opening + chrono::Duration::days(i)))
            .collect();
        let season = Season::new(days);
        assert_eq!(season.len(), 3);
        assert_eq!(season.opening_day(), Some(DayOrdinal::from_date(opening)));
        assert_eq!(
            season.closing_day(),
            Some(DayOrdinal::new(DayOrdinal::from_date(opening).value() + 2))
        );
    }

    #[test]
    fn test_empty_season() {
        let season = Season::new(Vec::new());
        assert!(season.is_empty());
        assert!(season.opening_day().is_none());
        assert!(season.closing_day().is_none());
        assert!(season.months().is_empty());
    }

    #[test]
    fn test_category_serialization_names() {
        assert_eq!(
            serde_json::to_string(&DayCategory::AllStar).unwrap(),
            "\"ALL_STAR\""
        );
        assert_eq!(serde_json::to_string(&Location::None).unwrap(), "\"NONE\"");
    }
}
