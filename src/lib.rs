pub mod aggregation;
pub mod ingest;
pub mod models;
pub mod playback;
pub mod settings;
mod utils;

pub use aggregation::{aggregate, build_light_segments, lookup};
pub use ingest::{load_csv, read_csv, LoadReport};
pub use models::{AggregatedPoint, ChartData, LightSegment, Observation, MINUTES_PER_DAY};
pub use playback::{PlaybackController, PlaybackFrame, PlaybackState, PlaybackStatus, RenderSink};
pub use settings::{PlaybackSettings, SettingsStore};
