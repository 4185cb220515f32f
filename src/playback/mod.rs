pub mod controller;
pub mod sink;
pub mod state;

pub use controller::{PlaybackController, PlaybackFrame};
pub use sink::RenderSink;
pub use state::{PlaybackState, PlaybackStatus};
