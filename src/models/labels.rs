use chrono::NaiveTime;

use super::MINUTES_PER_DAY;

/// Axis-style label for a minute of day: "midnight" at the day boundaries,
/// otherwise the 12-hour clock hour ("2am", "12pm").
pub fn axis_label(minute: u16) -> String {
    if minute == 0 || minute == MINUTES_PER_DAY {
        return "midnight".to_string();
    }

    let time = NaiveTime::from_hms_opt(u32::from(minute) / 60, u32::from(minute) % 60, 0)
        .unwrap_or(NaiveTime::MIN);
    time.format("%-I%P").to_string()
}

/// Tooltip-style label: elapsed hours and minutes since midnight ("7h 30m").
pub fn clock_label(minute: u16) -> String {
    format!("{}h {}m", minute / 60, minute % 60)
}
