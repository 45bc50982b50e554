//! Application configuration
//!
//! Persisted with confy under the platform config directory. Loading falls
//! back to defaults on any error so the timer always comes up; saving
//! surfaces its error for the caller to log.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;

/// Application name used for the confy config path.
const APP_NAME: &str = "hengio";
const CONFIG_NAME: &str = "config";

/// Durations offered by the preset picker, in minutes.
pub const DEFAULT_PRESET_MINUTES: [u32; 7] = [5, 10, 15, 25, 30, 45, 60];

/// Errors during configuration persistence
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display and speech language
    pub language: Language,

    /// Master switch for spoken announcements
    pub speech_enabled: bool,

    /// Speech rate multiplier, where 1.0 is the voice's normal pace
    pub speech_rate: f32,

    /// Durations offered by the preset picker, in minutes
    pub preset_minutes: Vec<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            speech_enabled: true,
            speech_rate: 0.95,
            preset_minutes: DEFAULT_PRESET_MINUTES.to_vec(),
        }
    }
}

impl AppConfig {
    /// Load the stored configuration, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match confy::load(APP_NAME, CONFIG_NAME) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(%error, "using default configuration");
                Self::default()
            }
        }
    }

    /// Persist the configuration.
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    /// Preset durations in seconds, in picker order.
    pub fn preset_seconds(&self) -> Vec<u32> {
        self.preset_minutes
            .iter()
            .map(|m| m.saturating_mul(60))
            .collect()
    }
}
