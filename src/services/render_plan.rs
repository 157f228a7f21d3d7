//! Render plan assembly.
//!
//! Packages the densified season and its computed layout into a single
//! serialisable structure: everything an external renderer needs to draw a
//! cell, fill colour, border emphasis and three text labels per day without
//! consulting any other state.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalendarConfig;
use crate::error::Result;
use crate::models::{Day, DayCategory, Location, Season};
use crate::services::layout;
use crate::services::time_format;

/// Display label for the all-star cell (the stored opponent keeps the
/// configured all-star marker).
const ALL_STAR_CELL_LABEL: &str = "ALL-STAR BREAK";

/// One drawable day cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCell {
    pub ordinal: i32,
    /// `DD/MM/YYYY` date string.
    pub date: String,
    /// Date number drawn in the cell corner.
    pub day_of_month: u32,
    pub category: DayCategory,
    pub location: Location,
    /// Opponent as stored on the day record.
    pub opponent: String,
    /// Display label: abbreviated opponent, all-star text, or empty.
    pub label: String,
    /// Formatted start time, empty when none was recorded.
    pub time_label: String,
    pub highlighted: bool,
    pub week_column: u8,
    /// Cell centre x.
    pub x: f64,
    /// Cell centre y.
    pub y: f64,
}

/// One month block header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthBlock {
    pub year: i32,
    pub month: u32,
    pub label: String,
    /// Anchor x.
    pub x: f64,
    /// Anchor y.
    pub y: f64,
}

/// Complete drawing input for the external renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    pub title: String,
    /// Weekday header labels, ordered from the configured week start.
    pub weekday_headers: Vec<String>,
    pub months: Vec<MonthBlock>,
    pub cells: Vec<DayCell>,
}

/// Build the render plan for a densified season.
pub fn build_render_plan(season: &Season, config: &CalendarConfig) -> Result<RenderPlan> {
    let layout = layout::layout_season(season, config)?;

    let months = layout
        .anchors
        .iter()
        .map(|anchor| MonthBlock {
            year: anchor.year,
            month: anchor.month,
            label: config.month_label(anchor.month),
            x: anchor.x,
            y: anchor.y,
        })
        .collect();

    let cells = season
        .days()
        .iter()
        .zip(&layout.positions)
        .map(|(day, pos)| DayCell {
            ordinal: day.ordinal.value(),
            date: day.formatted_date(),
            day_of_month: day.day_of_month(),
            category: day.category,
            location: day.location,
            opponent: day.opponent.clone(),
            label: cell_label(day, config),
            time_label: time_format::format_start_time(
                day.start_time,
                config.hour_format,
                config.show_meridiem,
            ),
            highlighted: day.highlighted,
            week_column: pos.week_column,
            x: pos.x,
            y: pos.y,
        })
        .collect();

    let plan = RenderPlan {
        title: title_for(season, config),
        weekday_headers: weekday_headers(config.week_start),
        months,
        cells,
    };
    debug!(months = plan.months.len(), cells = plan.cells.len(), "built render plan");
    Ok(plan)
}

fn cell_label(day: &Day, config: &CalendarConfig) -> String {
    match day.category {
        DayCategory::Game => config
            .abbreviations
            .get(&day.opponent)
            .cloned()
            .unwrap_or_else(|| day.opponent.clone()),
        DayCategory::AllStar => ALL_STAR_CELL_LABEL.to_string(),
        DayCategory::Off => String::new(),
    }
}

fn title_for(season: &Season, config: &CalendarConfig) -> String {
    match season.opening_day() {
        Some(opening) => format!(
            "{} {} SCHEDULE",
            opening.to_date().year(),
            config.team.to_uppercase()
        ),
        None => format!("{} SCHEDULE", config.team.to_uppercase()),
    }
}

fn weekday_headers(week_start: Weekday) -> Vec<String> {
    let mut day = week_start;
    (0..7)
        .map(|_| {
            let label = weekday_name(day).to_uppercase();
            day = day.succ();
            label
        })
        .collect()
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawEvent;
    use crate::services::densify;
    use chrono::NaiveDate;

    fn config() -> CalendarConfig {
        CalendarConfig {
            team: "Royals".to_string(),
            ..Default::default()
        }
    }

    fn build(events: &[RawEvent], config: &CalendarConfig) -> RenderPlan {
        let season = densify(events, config).unwrap();
        build_render_plan(&season, config).unwrap()
    }

    #[test]
    fn test_title_uses_opening_year_and_team() {
        let plan = build(&[RawEvent::new("03/27/25", "Royals at Yankees")], &config());
        assert_eq!(plan.title, "2025 ROYALS SCHEDULE");
    }

    #[test]
    fn test_weekday_headers_start_at_week_start() {
        let plan = build(&[RawEvent::new("03/27/25", "Royals at Yankees")], &config());
        assert_eq!(plan.weekday_headers[0], "SUNDAY");
        assert_eq!(plan.weekday_headers[6], "SATURDAY");
        assert_eq!(plan.weekday_headers.len(), 7);
    }

    #[test]
    fn test_game_label_prefers_abbreviation() {
        let mut cfg = config();
        cfg.abbreviations
            .insert("Yankees".to_string(), "NYY".to_string());
        let plan = build(
            &[
                RawEvent::new("04/01/25", "Royals at Yankees"),
                RawEvent::new("04/02/25", "Royals at Red Sox"),
            ],
            &cfg,
        );
        assert_eq!(plan.cells[0].label, "NYY");
        // No abbreviation configured: fall back to the full name.
        assert_eq!(plan.cells[1].label, "Red Sox");
    }

    #[test]
    fn test_all_star_cell_label() {
        let mut cfg = config();
        cfg.all_star_date = NaiveDate::from_ymd_opt(2025, 7, 15);
        let plan = build(
            &[
                RawEvent::new("07/14/25", "Royals at Yankees"),
                RawEvent::new("07/16/25", "Royals at Yankees"),
            ],
            &cfg,
        );
        let all_star = &plan.cells[1];
        assert_eq!(all_star.opponent, "ALL-STAR GAME");
        assert_eq!(all_star.label, "ALL-STAR BREAK");
    }

    #[test]
    fn test_off_day_cell_is_blank() {
        let plan = build(
            &[
                RawEvent::new("04/01/25", "Royals at Yankees"),
                RawEvent::new("04/03/25", "Royals at Yankees"),
            ],
            &config(),
        );
        let off = &plan.cells[1];
        assert_eq!(off.category, DayCategory::Off);
        assert!(off.label.is_empty());
        assert!(off.time_label.is_empty());
    }

    #[test]
    fn test_time_label_respects_hour_format() {
        let mut cfg = config();
        cfg.hour_format = crate::config::HourFormat::H12;
        cfg.show_meridiem = true;
        let plan = build(
            &[RawEvent::new("04/01/25", "Royals at Yankees").with_start_time("1:05 PM")],
            &cfg,
        );
        assert_eq!(plan.cells[0].time_label, "1:05 PM");
    }

    #[test]
    fn test_cells_cover_every_day() {
        let plan = build(
            &[
                RawEvent::new("03/27/25", "Royals at Yankees"),
                RawEvent::new("04/05/25", "Royals at Yankees"),
            ],
            &config(),
        );
        assert_eq!(plan.cells.len(), 10);
        assert_eq!(plan.months.len(), 2);
    }

    #[test]
    fn test_month_label_override_in_plan() {
        let mut cfg = config();
        cfg.month_labels.insert(3, "MARCH/APRIL".to_string());
        let plan = build(
            &[
                RawEvent::new("03/27/25", "Royals at Yankees"),
                RawEvent::new("04/05/25", "Royals at Yankees"),
            ],
            &cfg,
        );
        assert_eq!(plan.months[0].label, "MARCH/APRIL");
        assert_eq!(plan.months[1].label, "APRIL");
    }

    #[test]
    fn test_plan_serializes_screaming_snake_variants() {
        let plan = build(&[RawEvent::new("03/27/25", "Royals at Yankees")], &config());
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"GAME\""));
        assert!(json.contains("\"AWAY\""));
    }
}
