use std::{sync::Arc, time::Duration};

use anyhow::{bail, Result};
use serde::Serialize;
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::{
    aggregation::aggregate,
    models::{labels, AggregatedPoint, ChartData, Observation},
    settings::PlaybackSettings,
};

use super::{sink::RenderSink, PlaybackState, PlaybackStatus};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Everything the renderer needs for one focus-line/tooltip update: the
/// queried minute and the resolved series point, if any.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackFrame {
    pub minute: u16,
    pub point: Option<AggregatedPoint>,
}

impl PlaybackFrame {
    /// Elapsed-time label for the resolved point ("7h 30m"), falling back to
    /// the queried minute when nothing matched.
    pub fn time_label(&self) -> String {
        let minute = self
            .point
            .as_ref()
            .map(|p| p.minute_of_day)
            .unwrap_or(self.minute);
        labels::clock_label(minute)
    }

    /// Tooltip body for the resolved point, or `None` when the renderer
    /// should suppress the tooltip.
    pub fn tooltip_text(&self) -> Option<String> {
        self.point.as_ref().map(|p| {
            format!(
                "Time: {}\nActivity: {:.2}\nTemp: {:.2} °C\nLight: {}",
                labels::clock_label(p.minute_of_day),
                p.avg_activity,
                p.avg_temperature,
                if p.is_light { "Day" } else { "Night" },
            )
        })
    }
}

/// Raw observations plus the aggregation derived from them under the current
/// subject filter. `data` is replaced wholesale on every rebuild.
struct DataState {
    observations: Vec<Observation>,
    subject_filter: Option<String>,
    data: Arc<ChartData>,
}

struct TickerHandle {
    handle: JoinHandle<()>,
    cancel_token: CancellationToken,
}

/// Owns the scrubber position and the periodic advance while playing, and
/// answers nearest-point queries against the current aggregation. One
/// instance per chart; all renderer inputs arrive through its methods.
#[derive(Clone)]
pub struct PlaybackController {
    state: Arc<Mutex<PlaybackState>>,
    data: Arc<Mutex<DataState>>,
    ticker: Arc<Mutex<Option<TickerHandle>>>,
    tick_interval: Duration,
    sink: Arc<dyn RenderSink>,
}

impl PlaybackController {
    pub fn new(sink: Arc<dyn RenderSink>, settings: PlaybackSettings) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackState {
                rate: settings.default_rate.max(1),
                ..PlaybackState::default()
            })),
            data: Arc::new(Mutex::new(DataState {
                observations: Vec::new(),
                subject_filter: None,
                data: Arc::new(ChartData::default()),
            })),
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: Duration::from_millis(settings.tick_interval_ms.max(1)),
            sink,
        }
    }

    pub async fn get_state(&self) -> PlaybackState {
        *self.state.lock().await
    }

    pub async fn chart_data(&self) -> Arc<ChartData> {
        self.data.lock().await.data.clone()
    }

    /// Replace the raw observation set and rebuild the aggregation under the
    /// current subject filter.
    pub async fn load_observations(&self, observations: Vec<Observation>) {
        {
            let mut guard = self.data.lock().await;
            guard.observations = observations;
        }
        self.rebuild().await;
    }

    /// Restrict the aggregation to one subject, or `None` for all subjects.
    /// A filter matching nothing degrades to empty data; it never fails.
    pub async fn set_subject_filter(&self, subject_id: Option<String>) {
        {
            let mut guard = self.data.lock().await;
            guard.subject_filter = subject_id;
        }
        self.rebuild().await;
    }

    /// Flip between Stopped and Playing. Entering Playing schedules the
    /// periodic advance; leaving it cancels any pending tick. Each call flips
    /// exactly one state bit, so repeated toggling never double-schedules.
    pub async fn toggle_play(&self) -> PlaybackState {
        let state = {
            let mut guard = self.state.lock().await;
            guard.status = match guard.status {
                PlaybackStatus::Stopped => PlaybackStatus::Playing,
                PlaybackStatus::Playing => PlaybackStatus::Stopped,
            };
            *guard
        };

        if state.is_playing() {
            self.spawn_ticker().await;
        } else {
            self.cancel_ticker().await;
        }

        self.sink.state_changed(state);
        state
    }

    /// Set the animation rate in minutes per tick; takes effect on the next
    /// tick and does not change the play state.
    pub async fn set_rate(&self, rate: u16) -> Result<PlaybackState> {
        if rate == 0 {
            bail!("rate must be a positive number of minutes per tick");
        }

        let state = {
            let mut guard = self.state.lock().await;
            guard.rate = rate;
            *guard
        };

        self.sink.state_changed(state);
        Ok(state)
    }

    /// Move the scrubber directly; out-of-range minutes wrap modulo 1440.
    /// Allowed whether stopped or playing.
    pub async fn seek(&self, minute: i64) -> PlaybackState {
        let state = {
            let mut guard = self.state.lock().await;
            guard.seek(minute);
            *guard
        };

        let frame = self.resolve_frame(state.current_minute).await;
        self.sink.frame_changed(frame);
        state
    }

    /// Resolve a frame for an arbitrary minute (pointer movement) without
    /// touching the scrubber position.
    pub async fn hover(&self, minute: u16) -> PlaybackFrame {
        self.resolve_frame(minute).await
    }

    /// Frame for the current scrubber position.
    pub async fn current_frame(&self) -> PlaybackFrame {
        let minute = self.state.lock().await.current_minute;
        self.resolve_frame(minute).await
    }

    async fn resolve_frame(&self, minute: u16) -> PlaybackFrame {
        let data = self.chart_data().await;
        PlaybackFrame {
            minute,
            point: data.lookup(minute).cloned(),
        }
    }

    async fn rebuild(&self) {
        let data = {
            let mut guard = self.data.lock().await;
            let filtered: Vec<Observation> = match &guard.subject_filter {
                Some(subject_id) => guard
                    .observations
                    .iter()
                    .filter(|obs| obs.subject_id == *subject_id)
                    .cloned()
                    .collect(),
                None => guard.observations.clone(),
            };

            let data = Arc::new(aggregate(&filtered));
            guard.data = data.clone();
            data
        };

        log_info!(
            "rebuilt aggregation: {} points, {} segments",
            data.series.len(),
            data.segments.len()
        );

        self.sink.data_changed(data);

        let frame = self.current_frame().await;
        self.sink.frame_changed(frame);
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(stale) = ticker_guard.take() {
            stale.cancel_token.cancel();
            stale.handle.abort();
        }

        let cancel_token = CancellationToken::new();
        let token_clone = cancel_token.clone();

        let state = self.state.clone();
        let data = self.data.clone();
        let sink = self.sink.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            // First advance lands one interval after play, not immediately.
            let mut ticker = time::interval_at(Instant::now() + tick_interval, tick_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let minute = {
                            let mut guard = state.lock().await;
                            if guard.status != PlaybackStatus::Playing {
                                break;
                            }
                            guard.advance();
                            guard.current_minute
                        };

                        let snapshot = data.lock().await.data.clone();
                        sink.frame_changed(PlaybackFrame {
                            minute,
                            point: snapshot.lookup(minute).cloned(),
                        });
                    }
                    _ = token_clone.cancelled() => {
                        log_info!("playback ticker shutting down");
                        break;
                    }
                }
            }
        });

        *ticker_guard = Some(TickerHandle {
            handle,
            cancel_token,
        });
    }

    async fn cancel_ticker(&self) {
        let ticker = self.ticker.lock().await.take();
        if let Some(TickerHandle {
            handle,
            cancel_token,
        }) = ticker
        {
            cancel_token.cancel();
            let _ = handle.await;
        }
    }
}
