use crate::models::{AggregatedPoint, LightSegment, MINUTES_PER_DAY};

/// Scan the sorted series once and collect maximal runs of equal light
/// classification. A new segment opens exactly where `is_light` flips; the
/// final segment always closes at the 1440 sentinel, even when the series
/// carries no point near the end of the day.
pub fn build_light_segments(series: &[AggregatedPoint]) -> Vec<LightSegment> {
    let Some(first) = series.first() else {
        return Vec::new();
    };

    let mut segments = Vec::new();
    let mut start = first.minute_of_day;
    let mut is_light = first.is_light;

    for point in &series[1..] {
        if point.is_light != is_light {
            segments.push(LightSegment {
                start,
                end: point.minute_of_day,
                is_light,
            });
            start = point.minute_of_day;
            is_light = point.is_light;
        }
    }

    segments.push(LightSegment {
        start,
        end: MINUTES_PER_DAY,
        is_light,
    });

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(minute: u16, is_light: bool) -> AggregatedPoint {
        AggregatedPoint {
            minute_of_day: minute,
            avg_activity: 1.0,
            avg_temperature: 36.5,
            is_light,
        }
    }

    #[test]
    fn empty_series_has_no_segments() {
        assert!(build_light_segments(&[]).is_empty());
    }

    #[test]
    fn single_run_spans_to_end_of_day() {
        let series = vec![point(5, true), point(6, true), point(200, true)];

        let segments = build_light_segments(&series);

        assert_eq!(
            segments,
            vec![LightSegment {
                start: 5,
                end: MINUTES_PER_DAY,
                is_light: true,
            }]
        );
    }

    #[test]
    fn segment_opens_where_classification_flips() {
        let series = vec![
            point(0, false),
            point(360, false),
            point(361, true),
            point(1080, true),
            point(1081, false),
        ];

        let segments = build_light_segments(&series);

        assert_eq!(
            segments,
            vec![
                LightSegment {
                    start: 0,
                    end: 361,
                    is_light: false,
                },
                LightSegment {
                    start: 361,
                    end: 1081,
                    is_light: true,
                },
                LightSegment {
                    start: 1081,
                    end: MINUTES_PER_DAY,
                    is_light: false,
                },
            ]
        );
    }

    #[test]
    fn segments_are_contiguous_and_end_at_sentinel() {
        let series = vec![
            point(12, true),
            point(40, false),
            point(41, false),
            point(90, true),
            // Sparse tail: last real point sits far from minute 1439.
            point(100, true),
        ];

        let segments = build_light_segments(&series);

        assert_eq!(segments.first().unwrap().start, 12);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert_ne!(pair[0].is_light, pair[1].is_light);
        }
        assert_eq!(segments.last().unwrap().end, MINUTES_PER_DAY);
    }
}
