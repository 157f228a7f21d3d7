//! Start-time display formatting.

use chrono::NaiveTime;

use crate::config::HourFormat;

/// Render a stored start time under the configured hour convention.
///
/// A day without a recorded start time renders as an empty string. Absence
/// is carried by the `Option`, never inferred by comparing a formatted time
/// against a literal midnight value, so a genuine midnight start still
/// renders.
pub fn format_start_time(
    time: Option<NaiveTime>,
    hour_format: HourFormat,
    show_meridiem: bool,
) -> String {
    let Some(time) = time else {
        return String::new();
    };

    match hour_format {
        HourFormat::H24 => time.format("%H:%M").to_string(),
        HourFormat::H12 => {
            let clock = time.format("%I:%M").to_string();
            let clock = clock.strip_prefix('0').unwrap_or(&clock);
            if show_meridiem {
                format!("{} {}", clock, time.format("%p"))
            } else {
                clock.to_string()
            }
        }
    }
}
