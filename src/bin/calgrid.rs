//! Season calendar CLI.
//!
//! Thin shell around the calgrid library: reads the schedule CSV export
//! plus optional highlight, abbreviation and JSON config files, resolves
//! the configuration (CLI > file > defaults), and writes the computed
//! render plan as JSON for an external renderer.
//!
//! # Usage
//!
//! ```bash
//! calgrid 2025RoyalsSchedule.csv --team Royals \
//!     --config calendar.json \
//!     --highlights tickets.txt \
//!     --all-star 15/07/2025 \
//!     --hour-format 12 --meridiem \
//!     --output season.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use calgrid::config::{CalendarConfig, ConfigOverlay, HourFormat};
use calgrid::parsing::csv_parser;
use calgrid::services::{build_render_plan, densify};

#[derive(Debug, Parser)]
#[command(name = "calgrid", about = "Dense season calendar layout generator")]
struct Cli {
    /// Schedule CSV export.
    schedule: PathBuf,

    /// Team name matched against the parsed home/away team names.
    #[arg(long)]
    team: Option<String>,

    /// JSON configuration file merged over the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Highlight dates file, one DD/MM/YYYY entry per line.
    #[arg(long)]
    highlights: Option<PathBuf>,

    /// Nickname-to-abbreviation JSON map used for cell labels.
    #[arg(long)]
    abbreviations: Option<PathBuf>,

    /// All-star date, DD/MM/YYYY.
    #[arg(long, value_name = "DATE")]
    all_star: Option<String>,

    /// First weekday of each week row (e.g. sunday, monday).
    #[arg(long)]
    week_start: Option<String>,

    /// Hour convention for time labels: 12 or 24.
    #[arg(long, value_name = "12|24")]
    hour_format: Option<String>,

    /// Append AM/PM to 12-hour time labels.
    #[arg(long)]
    meridiem: bool,

    /// Leading schedule rows to skip (pre-season exhibition games).
    #[arg(long)]
    offset: Option<usize>,

    /// Output path for the render plan JSON (stdout when omitted).
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    let config = resolve_config(&cli)?;

    let events = csv_parser::parse_schedule_csv(&cli.schedule)?;
    info!(events = events.len(), "parsed schedule rows");

    let season = densify(&events, &config)?;
    info!(days = season.len(), "densified season");

    let plan = build_render_plan(&season, &config)?;
    let json = serde_json::to_string_pretty(&plan).context("Failed to serialize render plan")?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write render plan to {}", path.display()))?;
            info!(path = %path.display(), "wrote render plan");
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CalendarConfig> {
    let file_json = match &cli.config {
        Some(path) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?,
        ),
        None => None,
    };

    let overlay = ConfigOverlay {
        team: cli.team.clone(),
        week_start: cli.week_start.clone(),
        all_star_date: cli.all_star.clone(),
        hour_format: cli
            .hour_format
            .as_deref()
            .map(str::parse::<HourFormat>)
            .transpose()?,
        show_meridiem: cli.meridiem.then_some(true),
        season_start_offset: cli.offset,
        ..Default::default()
    };

    let mut config = CalendarConfig::resolve(file_json.as_deref(), overlay)?;

    if let Some(path) = &cli.highlights {
        config.highlights = read_highlights(path)?;
        info!(highlights = config.highlights.len(), "loaded highlight dates");
    }
    if let Some(path) = &cli.abbreviations {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read abbreviation map {}", path.display()))?;
        config.abbreviations = serde_json::from_str::<HashMap<String, String>>(&content)
            .with_context(|| format!("Invalid abbreviation map {}", path.display()))?;
    }

    Ok(config)
}

/// Read a highlight file: one DD/MM/YYYY date per line, blank lines ignored.
fn read_highlights(path: &PathBuf) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read highlights file {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
