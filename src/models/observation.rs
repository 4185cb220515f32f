use serde::{Deserialize, Serialize};

/// Minutes in one 24-hour cycle. Minute-of-day values live in `[0, 1440)`;
/// 1440 itself only appears as the end sentinel of the final light segment.
pub const MINUTES_PER_DAY: u16 = 1440;

/// One raw per-minute reading for a single subject. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub minute_of_day: u16,
    pub activity: f64,
    pub temperature: f64,
    pub subject_id: String,
    pub is_light: bool,
}
