use std::collections::BTreeMap;

use crate::models::{AggregatedPoint, ChartData, Observation};

use super::segments::build_light_segments;

/// Running sums for one minute-of-day bucket.
#[derive(Debug, Default)]
struct MinuteBucket {
    activity_sum: f64,
    temperature_sum: f64,
    light_count: usize,
    count: usize,
}

impl MinuteBucket {
    fn add(&mut self, obs: &Observation) {
        self.activity_sum += obs.activity;
        self.temperature_sum += obs.temperature;
        if obs.is_light {
            self.light_count += 1;
        }
        self.count += 1;
    }

    fn finish(self, minute_of_day: u16) -> AggregatedPoint {
        let count = self.count as f64;
        AggregatedPoint {
            minute_of_day,
            avg_activity: self.activity_sum / count,
            avg_temperature: self.temperature_sum / count,
            // Light wins only on a strict majority; an exact 50/50 split
            // classifies as dark.
            is_light: self.light_count as f64 / count > 0.5,
        }
    }
}

/// Roll raw observations up into one point per distinct minute of day, plus
/// the light/dark segments over the resulting series.
///
/// The series is sorted ascending by minute and is not dense: minutes absent
/// from the input produce no point, so consumers resolve positions through
/// [`lookup`] rather than indexing. Empty input yields empty data.
pub fn aggregate(observations: &[Observation]) -> ChartData {
    // The segment scan reads the first point before iterating; bail out
    // before it can.
    if observations.is_empty() {
        return ChartData::default();
    }

    let mut buckets: BTreeMap<u16, MinuteBucket> = BTreeMap::new();
    for obs in observations {
        buckets.entry(obs.minute_of_day).or_default().add(obs);
    }

    let series: Vec<AggregatedPoint> = buckets
        .into_iter()
        .map(|(minute, bucket)| bucket.finish(minute))
        .collect();

    let segments = build_light_segments(&series);

    ChartData { series, segments }
}

/// First point whose minute is `>= minute`, or `None` when the query lands
/// past the end of the series. Never fails on an empty series.
pub fn lookup(series: &[AggregatedPoint], minute: u16) -> Option<&AggregatedPoint> {
    let idx = series.partition_point(|p| p.minute_of_day < minute);
    series.get(idx)
}
