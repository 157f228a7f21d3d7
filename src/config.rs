//! Resolved calendar configuration.
//!
//! Configuration is resolved once (CLI overrides > config file > defaults)
//! into a single immutable [`CalendarConfig`] value that is threaded
//! explicitly into the densifier and the layout engine. Nothing in the
//! engine reads ambient state.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};
use crate::parsing::dates;

/// Hour convention used when rendering start times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourFormat {
    /// Zero-padded `HH:MM`.
    #[default]
    #[serde(rename = "24")]
    H24,
    /// `H:MM` without a leading zero on the hour.
    #[serde(rename = "12")]
    H12,
}

impl std::str::FromStr for HourFormat {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "24" => Ok(Self::H24),
            "12" => Ok(Self::H12),
            other => Err(CalendarError::config(format!(
                "unsupported hour format '{}'. Use 12 or 24.",
                other
            ))),
        }
    }
}

/// Per-month layout adjustment from a config source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthAdjust {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Horizontal shift applied to the month's anchor.
    #[serde(default)]
    pub dx: f64,
    /// Vertical shift applied to the month's anchor.
    #[serde(default)]
    pub dy: f64,
    /// Display label override (e.g. a combined "MARCH/APRIL" opening block).
    #[serde(default)]
    pub label: Option<String>,
}

/// Partial configuration as read from a JSON config file or built from CLI
/// flags. Every field is optional; absent fields keep the previous value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    pub team: Option<String>,
    /// Weekday name, e.g. `"sunday"` or `"mon"`.
    pub week_start: Option<String>,
    pub rows: Option<u32>,
    pub columns: Option<u32>,
    pub cell_width: Option<f64>,
    pub cell_height: Option<f64>,
    pub h_margin: Option<f64>,
    pub v_margin: Option<f64>,
    pub header_height: Option<f64>,
    pub month_spacing: Option<f64>,
    pub months: Option<Vec<MonthAdjust>>,
    /// All-star date, `DD/MM/YYYY`.
    pub all_star_date: Option<String>,
    pub all_star_label: Option<String>,
    pub hour_format: Option<HourFormat>,
    pub show_meridiem: Option<bool>,
    /// Leading schedule rows to skip (pre-season exhibition games).
    pub season_start_offset: Option<usize>,
}

/// Resolved, immutable calendar configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    /// Team name matched exactly against parsed home/away team names.
    pub team: String,
    /// First weekday of each week-row.
    pub week_start: Weekday,
    /// Month-block rows in the multi-month arrangement.
    pub rows: u32,
    /// Month-block columns in the multi-month arrangement.
    pub columns: u32,
    pub cell_width: f64,
    pub cell_height: f64,
    pub h_margin: f64,
    pub v_margin: f64,
    /// Vertical space reserved for the month title row.
    pub header_height: f64,
    /// Vertical gap between stacked month blocks.
    pub month_spacing: f64,
    /// Per-month `(dx, dy)` anchor shifts, keyed by calendar month.
    pub month_shifts: HashMap<u32, (f64, f64)>,
    /// Per-month display label overrides, keyed by calendar month.
    pub month_labels: HashMap<u32, String>,
    pub all_star_date: Option<NaiveDate>,
    /// Marker stored as the all-star day's opponent.
    pub all_star_label: String,
    pub hour_format: HourFormat,
    pub show_meridiem: bool,
    /// Leading schedule rows to skip before the season proper.
    pub season_start_offset: usize,
    /// Highlight dates, `DD/MM/YYYY` strings.
    pub highlights: HashSet<String>,
    /// Optional opponent nickname to abbreviation map for cell labels.
    pub abbreviations: HashMap<String, String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            team: String::new(),
            week_start: Weekday::Sun,
            rows: 2,
            columns: 3,
            cell_width: 3.0,
            cell_height: 2.0,
            h_margin: 0.0,
            v_margin: 0.0,
            header_height: 2.0,
            month_spacing: 2.0,
            month_shifts: HashMap::new(),
            month_labels: HashMap::new(),
            all_star_date: None,
            all_star_label: "ALL-STAR GAME".to_string(),
            hour_format: HourFormat::H24,
            show_meridiem: false,
            season_start_offset: 0,
            highlights: HashSet::new(),
            abbreviations: HashMap::new(),
        }
    }
}

impl CalendarConfig {
    /// Resolve a configuration from an optional JSON config file and CLI
    /// overrides, in CLI > file > defaults precedence.
    pub fn resolve(file_json: Option<&str>, cli: ConfigOverlay) -> Result<Self> {
        let mut config = Self::default();
        if let Some(json) = file_json {
            let overlay: ConfigOverlay = serde_json::from_str(json)
                .map_err(|e| CalendarError::config(format!("invalid config file: {}", e)))?;
            config.apply_overlay(overlay)?;
        }
        config.apply_overlay(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Merge an overlay into this configuration.
    pub fn apply_overlay(&mut self, overlay: ConfigOverlay) -> Result<()> {
        if let Some(team) = overlay.team {
            self.team = team;
        }
        if let Some(week_start) = overlay.week_start {
            self.week_start = week_start.trim().parse::<Weekday>().map_err(|_| {
                CalendarError::config(format!("unknown weekday '{}'", week_start))
            })?;
        }
        if let Some(rows) = overlay.rows {
            self.rows = rows;
        }
        if let Some(columns) = overlay.columns {
            self.columns = columns;
        }
        if let Some(cell_width) = overlay.cell_width {
            self.cell_width = cell_width;
        }
        if let Some(cell_height) = overlay.cell_height {
            self.cell_height = cell_height;
        }
        if let Some(h_margin) = overlay.h_margin {
            self.h_margin = h_margin;
        }
        if let Some(v_margin) = overlay.v_margin {
            self.v_margin = v_margin;
        }
        if let Some(header_height) = overlay.header_height {
            self.header_height = header_height;
        }
        if let Some(month_spacing) = overlay.month_spacing {
            self.month_spacing = month_spacing;
        }
        if let Some(months) = overlay.months {
            for adjust in months {
                if !(1..=12).contains(&adjust.month) {
                    return Err(CalendarError::config(format!(
                        "month {} is out of range 1-12",
                        adjust.month
                    )));
                }
                self.month_shifts
                    .insert(adjust.month, (adjust.dx, adjust.dy));
                if let Some(label) = adjust.label {
                    self.month_labels.insert(adjust.month, label);
                }
            }
        }
        if let Some(all_star_date) = overlay.all_star_date {
            self.all_star_date = Some(dates::parse_day_month_year(&all_star_date)?);
        }
        if let Some(all_star_label) = overlay.all_star_label {
            self.all_star_label = all_star_label;
        }
        if let Some(hour_format) = overlay.hour_format {
            self.hour_format = hour_format;
        }
        if let Some(show_meridiem) = overlay.show_meridiem {
            self.show_meridiem = show_meridiem;
        }
        if let Some(offset) = overlay.season_start_offset {
            self.season_start_offset = offset;
        }
        Ok(())
    }

    /// Reject configurations no layout can be computed from.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(CalendarError::config("rows must be positive"));
        }
        if self.columns == 0 {
            return Err(CalendarError::config("columns must be positive"));
        }
        if self.cell_width <= 0.0 {
            return Err(CalendarError::config("cell_width must be positive"));
        }
        if self.cell_height <= 0.0 {
            return Err(CalendarError::config("cell_height must be positive"));
        }
        Ok(())
    }

    /// Anchor shift for a calendar month, `(0, 0)` unless configured.
    pub fn month_shift(&self, month: u32) -> (f64, f64) {
        self.month_shifts.get(&month).copied().unwrap_or((0.0, 0.0))
    }

    /// Display label for a calendar month: the configured override, or the
    /// upper-case English month name.
    pub fn month_label(&self, month: u32) -> String {
        if let Some(label) = self.month_labels.get(&month) {
            return label.clone();
        }
        month_name(month).to_uppercase()
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
