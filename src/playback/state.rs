use serde::{Deserialize, Serialize};

use crate::models::MINUTES_PER_DAY;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackStatus {
    Stopped,
    Playing,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        PlaybackStatus::Stopped
    }
}

/// Scrubber position and animation rate. Owned by the controller; every
/// mutation goes through its operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    pub current_minute: u16,
    pub rate: u16,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            current_minute: 0,
            rate: 1,
        }
    }
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// One tick: advance by `rate`, wrapping past midnight back to 0.
    pub fn advance(&mut self) {
        let next = (u32::from(self.current_minute) + u32::from(self.rate))
            % u32::from(MINUTES_PER_DAY);
        self.current_minute = next as u16;
    }

    /// Move the position directly; out-of-range values wrap modulo 1440,
    /// matching tick wraparound.
    pub fn seek(&mut self, minute: i64) {
        self.current_minute = minute.rem_euclid(i64::from(MINUTES_PER_DAY)) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_stopped_at_zero_with_unit_rate() {
        let state = PlaybackState::new();
        assert_eq!(state.status, PlaybackStatus::Stopped);
        assert_eq!(state.current_minute, 0);
        assert_eq!(state.rate, 1);
    }

    #[test]
    fn advance_wraps_past_midnight() {
        let mut state = PlaybackState {
            current_minute: 1439,
            rate: 5,
            ..PlaybackState::default()
        };

        state.advance();

        assert_eq!(state.current_minute, 4);
    }

    #[test]
    fn full_cycle_of_ticks_returns_to_start() {
        for rate in [1u16, 2, 5, 10, 60, 360] {
            let mut state = PlaybackState {
                current_minute: 17,
                rate,
                ..PlaybackState::default()
            };

            for _ in 0..(MINUTES_PER_DAY / rate) {
                state.advance();
            }

            assert_eq!(state.current_minute, 17, "rate {rate}");
        }
    }

    #[test]
    fn seek_wraps_out_of_range_values() {
        let mut state = PlaybackState::new();

        state.seek(725);
        assert_eq!(state.current_minute, 725);

        state.seek(1440);
        assert_eq!(state.current_minute, 0);

        state.seek(1500);
        assert_eq!(state.current_minute, 60);

        state.seek(-1);
        assert_eq!(state.current_minute, 1439);
    }
}
