use std::{fs, path::PathBuf, sync::RwLock};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Playback tuning. The tick interval matches the original chart's fixed
/// 100 ms animation cadence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    pub tick_interval_ms: u64,
    pub default_rate: u16,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            default_rate: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct UserSettings {
    playback: PlaybackSettings,
}

/// JSON-backed settings file. Missing or unreadable files fall back to
/// defaults rather than failing startup.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn playback(&self) -> PlaybackSettings {
        self.data.read().unwrap().playback
    }

    pub fn update_playback(&self, settings: PlaybackSettings) -> Result<()> {
        if settings.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be positive");
        }
        if settings.default_rate == 0 {
            bail!("default_rate must be positive");
        }

        {
            let mut guard = self.data.write().unwrap();
            guard.playback = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: UserSettings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        assert_eq!(store.playback(), PlaybackSettings::default());
        assert_eq!(store.playback().tick_interval_ms, 100);
    }

    #[test]
    fn update_persists_and_reload_picks_it_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store
            .update_playback(PlaybackSettings {
                tick_interval_ms: 200,
                default_rate: 5,
            })
            .unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        reopened.reload().unwrap();
        assert_eq!(reopened.playback().tick_interval_ms, 200);
        assert_eq!(reopened.playback().default_rate, 5);
    }

    #[test]
    fn zero_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();

        assert!(store
            .update_playback(PlaybackSettings {
                tick_interval_ms: 0,
                default_rate: 1,
            })
            .is_err());
        assert!(store
            .update_playback(PlaybackSettings {
                tick_interval_ms: 100,
                default_rate: 0,
            })
            .is_err());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.playback(), PlaybackSettings::default());
    }
}
