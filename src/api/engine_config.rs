use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};
use crate::interaction::DEFAULT_SWIPE_THRESHOLD_PX;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3_000;

/// Public carousel bootstrap configuration.
///
/// Field names on the wire follow the embedding contract
/// (`autoPlayInterval`, `enableLoop`, ...), so page authors can pass the same
/// options object they always did. Absent options take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(rename = "autoPlayInterval", default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    #[serde(rename = "enableLoop", default = "default_enable_loop")]
    pub enable_loop: bool,
    /// Accepted for compatibility. Autoplay only ever starts through the
    /// play/pause control or [`super::CarouselEngine::start_autoplay`].
    #[serde(rename = "enableAutoPlay", default)]
    pub enable_autoplay: bool,
    #[serde(rename = "swipeThresholdPx", default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            enable_loop: default_enable_loop(),
            enable_autoplay: false,
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }
}

impl CarouselConfig {
    /// Parses the embedding options object.
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            CarouselError::InvalidConfig(format!("failed to parse carousel options: {e}"))
        })
    }

    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_loop(mut self, enabled: bool) -> Self {
        self.enable_loop = enabled;
        self
    }

    #[must_use]
    pub fn with_enable_autoplay(mut self, enabled: bool) -> Self {
        self.enable_autoplay = enabled;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn autoplay_interval(self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

fn default_autoplay_interval_ms() -> u64 {
    DEFAULT_AUTOPLAY_INTERVAL_MS
}

fn default_enable_loop() -> bool {
    true
}

fn default_swipe_threshold_px() -> f64 {
    DEFAULT_SWIPE_THRESHOLD_PX
}
