pub mod labels;
pub mod observation;
pub mod series;

pub use observation::{Observation, MINUTES_PER_DAY};
pub use series::{AggregatedPoint, ChartData, LightSegment};
