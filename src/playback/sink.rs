use std::sync::Arc;

use crate::models::ChartData;

use super::{controller::PlaybackFrame, PlaybackState};

/// Narrow contract between the playback core and whatever draws the chart.
///
/// Frames drive the focus line and tooltip, state changes drive the play
/// button and scrubber, and a data replacement triggers a full redraw.
/// Implementations run on the controller's tasks and must not block.
pub trait RenderSink: Send + Sync + 'static {
    fn frame_changed(&self, frame: PlaybackFrame);
    fn state_changed(&self, state: PlaybackState);
    fn data_changed(&self, data: Arc<ChartData>);
}
