use serde::{Deserialize, Serialize};

use crate::core::TimerHandle;
use crate::render::CarouselFrame;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub current_index: usize,
    pub total_slides: usize,
    pub loop_enabled: bool,
    pub playing: bool,
    pub autoplay_interval_ms: u64,
    pub timer_handle: Option<TimerHandle>,
    pub timer_elapsed_ms: u64,
    pub torn_down: bool,
    pub frame: Option<CarouselFrame>,
}
