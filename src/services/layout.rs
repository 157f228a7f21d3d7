//! Calendar grid layout: month anchors and per-day cell positions.
//!
//! Anchors place each month's block on the page; positions place each day
//! inside its month block. Both are derived values, never stored on the
//! season, and the season is never mutated here.

use std::collections::HashMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};
use crate::models::Season;

/// Seven-day month block width plus half a cell of visual gutter, in cells.
const MONTH_BLOCK_WIDTH_CELLS: f64 = 7.5;
/// Worst-case month height, in week rows.
const MONTH_BLOCK_HEIGHT_WEEKS: f64 = 6.0;

/// Origin coordinate of one month's block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthAnchor {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    pub x: f64,
    pub y: f64,
}

/// Derived cell placement for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Column within the week, 0-6, counted from the configured week start.
    pub week_column: u8,
    /// Accumulated row height within the month block.
    pub row: f64,
    /// Cell centre x.
    pub x: f64,
    /// Cell centre y.
    pub y: f64,
}

/// Month anchors plus one position per season day, in season order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonLayout {
    pub anchors: Vec<MonthAnchor>,
    pub positions: Vec<GridPosition>,
}

/// Compute the anchor coordinate for every month present in the season.
///
/// The first two months are pinned to the top-left column bucket, offset
/// only by their configured per-month shift. Every later month is placed by
/// its 1-based order among the remaining months: `order / rows` selects the
/// column bucket and `order % rows` the row bucket.
pub fn compute_month_anchors(
    season: &Season,
    config: &CalendarConfig,
) -> Result<Vec<MonthAnchor>> {
    config.validate()?;

    let months = season.months();
    let mut anchors = Vec::with_capacity(months.len());
    for (index, &(year, month)) in months.iter().enumerate() {
        let (dx, dy) = config.month_shift(month);
        let (x, y) = if index < 2 {
            (config.h_margin + dx, config.v_margin + dy)
        } else {
            // 1-based order among the months after the first two.
            let month_order = (index - 1) as u32;
            let column_bucket = (month_order / config.rows) as f64;
            let row_bucket = (month_order % config.rows) as f64;
            (
                config.h_margin
                    + column_bucket * MONTH_BLOCK_WIDTH_CELLS * config.cell_width
                    + dx,
                config.v_margin
                    - config.header_height
                    - config.month_spacing * (1.0 + row_bucket)
                    - MONTH_BLOCK_HEIGHT_WEEKS * config.cell_height * row_bucket
                    + dy,
            )
        };
        anchors.push(MonthAnchor { year, month, x, y });
    }
    Ok(anchors)
}

/// Compute one [`GridPosition`] per season day.
///
/// The running row resets to one cell height at each month boundary and
/// grows by one cell height when a day lands on the week-start column,
/// except for the first day processed in its month (a month opening exactly
/// on the week start must not gain a spurious empty week).
pub fn compute_positions(
    season: &Season,
    anchors: &[MonthAnchor],
    config: &CalendarConfig,
) -> Result<Vec<GridPosition>> {
    let anchor_by_month: HashMap<(i32, u32), &MonthAnchor> = anchors
        .iter()
        .map(|a| ((a.year, a.month), a))
        .collect();
    let week_start = config.week_start.num_days_from_monday();

    let mut positions = Vec::with_capacity(season.len());
    let mut current_month: Option<(i32, u32)> = None;
    let mut row = 0.0;

    for day in season.days() {
        let key = (day.iso_date.year(), day.iso_date.month());
        let week_column = (7 + day.iso_date.weekday().num_days_from_monday() - week_start) % 7;

        if current_month != Some(key) {
            current_month = Some(key);
            row = config.cell_height;
        } else if week_column == 0 {
            row += config.cell_height;
        }

        let anchor = anchor_by_month.get(&key).ok_or_else(|| {
            CalendarError::config(format!("no anchor for month {}-{:02}", key.0, key.1))
        })?;

        positions.push(GridPosition {
            week_column: week_column as u8,
            row,
            x: anchor.x + week_column as f64 * config.cell_width + 0.5 * config.cell_width,
            y: anchor.y - row + 0.5 * config.cell_height,
        });
    }
    Ok(positions)
}

/// Anchor the season's months and place every day in one pass.
pub fn layout_season(season: &Season, config: &CalendarConfig) -> Result<SeasonLayout> {
    let anchors = compute_month_anchors(season, config)?;
    let positions = compute_positions(season, &anchors, config)?;
    Ok(SeasonLayout { anchors, positions })
}
