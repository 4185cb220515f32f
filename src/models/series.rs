use serde::{Deserialize, Serialize};

use crate::aggregation::lookup;

/// Per-minute summary across all subjects contributing to that minute.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPoint {
    pub minute_of_day: u16,
    pub avg_activity: f64,
    pub avg_temperature: f64,
    pub is_light: bool,
}

/// Maximal run of consecutive series points sharing one light classification.
/// `end` is the minute of the first point after the run, or 1440 for the
/// final run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LightSegment {
    pub start: u16,
    pub end: u16,
    pub is_light: bool,
}

/// The aggregated series plus its light/dark segments. Produced wholesale by
/// [`crate::aggregation::aggregate`] and shared read-only behind an `Arc`;
/// a filter change replaces the whole value, it is never patched in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub series: Vec<AggregatedPoint>,
    pub segments: Vec<LightSegment>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// First point at or after `minute`, or `None` past the end of the series.
    pub fn lookup(&self, minute: u16) -> Option<&AggregatedPoint> {
        lookup(&self.series, minute)
    }
}
