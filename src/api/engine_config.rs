use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};
use crate::interaction::GestureThresholds;

fn default_card_width_px() -> f64 {
    300.0
}

fn default_min_drag_distance_px() -> f64 {
    40.0
}

fn default_autoplay_interval_ms() -> u64 {
    3000
}

fn default_jitter_threshold_px() -> f64 {
    5.0
}

fn default_transition_duration_ms() -> u64 {
    300
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so hosts can keep carousel tuning next to the
/// rest of their settings. Omitted fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderEngineConfig {
    /// Width of one card, which is also the track step per index.
    #[serde(default = "default_card_width_px")]
    pub card_width_px: f64,
    /// Minimum gesture travel that changes the visible item.
    #[serde(default = "default_min_drag_distance_px")]
    pub min_drag_distance_px: f64,
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// Travel beyond which a gesture swallows the following click.
    #[serde(default = "default_jitter_threshold_px")]
    pub jitter_threshold_px: f64,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
}

impl Default for SliderEngineConfig {
    fn default() -> Self {
        Self {
            card_width_px: default_card_width_px(),
            min_drag_distance_px: default_min_drag_distance_px(),
            autoplay_interval_ms: default_autoplay_interval_ms(),
            jitter_threshold_px: default_jitter_threshold_px(),
            transition_duration_ms: default_transition_duration_ms(),
        }
    }
}

impl SliderEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_card_width_px(mut self, card_width_px: f64) -> Self {
        self.card_width_px = card_width_px;
        self
    }

    #[must_use]
    pub fn with_min_drag_distance_px(mut self, min_drag_distance_px: f64) -> Self {
        self.min_drag_distance_px = min_drag_distance_px;
        self
    }

    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, autoplay_interval_ms: u64) -> Self {
        self.autoplay_interval_ms = autoplay_interval_ms;
        self
    }

    #[must_use]
    pub fn with_jitter_threshold_px(mut self, jitter_threshold_px: f64) -> Self {
        self.jitter_threshold_px = jitter_threshold_px;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, transition_duration_ms: u64) -> Self {
        self.transition_duration_ms = transition_duration_ms;
        self
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    #[must_use]
    pub fn gesture_thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            min_drag_distance_px: self.min_drag_distance_px,
            jitter_threshold_px: self.jitter_threshold_px,
        }
    }

    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            SliderError::InvalidConfig(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Parses and validates a config document.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            SliderError::InvalidConfig(format!("failed to parse engine config json: {e}"))
        })?;
        super::validation::validate_engine_config(config)
    }
}
