use crate::error::{CarouselError, CarouselResult};
use crate::render::Renderer;

use super::{CarouselEngine, EngineSnapshot};

impl<R: Renderer> CarouselEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current_index: self.state.current_index(),
            total_slides: self.state.total_slides(),
            loop_enabled: self.state.loop_enabled(),
            playing: self.timer.is_active(),
            autoplay_interval_ms: self.config.autoplay_interval_ms,
            timer_handle: self.timer.handle(),
            timer_elapsed_ms: u64::try_from(self.timer.elapsed().as_millis()).unwrap_or(u64::MAX),
            torn_down: self.torn_down,
            frame: self.last_frame.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CarouselError::InvalidFrame(format!("failed to serialize snapshot: {e}")))
    }
}
