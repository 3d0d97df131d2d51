use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::core::TimerHandle;
use crate::error::CarouselResult;
use crate::interaction::{NavigationCommand, NavigationSource};
use crate::render::Renderer;

use super::{CarouselEngine, EngineSnapshot, PluginEvent};

impl<R: Renderer> CarouselEngine<R> {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.timer.is_active()
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        self.timer.interval()
    }

    #[must_use]
    pub fn autoplay_handle(&self) -> Option<TimerHandle> {
        self.timer.handle()
    }

    /// Time left before the next automatic advance, if playing.
    #[must_use]
    pub fn time_until_next_advance(&self) -> Option<Duration> {
        self.timer.time_until_next_tick()
    }

    /// Starts automatic advance. Calling it while already playing displaces
    /// the existing timer with a fresh one.
    pub fn start_autoplay(&mut self) -> CarouselResult<()> {
        if self.torn_down {
            return Ok(());
        }
        let handle = self.timer.schedule();
        debug!(
            handle = handle.id(),
            interval_ms = self.config.autoplay_interval_ms,
            "autoplay started"
        );
        self.emit_plugin_event(PluginEvent::AutoplayStarted { handle });
        self.update_carousel()
    }

    /// Stops automatic advance. Safe to call when not playing.
    pub fn stop_autoplay(&mut self) -> CarouselResult<()> {
        if !self.timer.cancel() {
            trace!("stop_autoplay while idle");
            return Ok(());
        }
        debug!("autoplay stopped");
        self.emit_plugin_event(PluginEvent::AutoplayStopped);
        self.update_carousel()
    }

    pub fn toggle_autoplay(&mut self) -> CarouselResult<()> {
        if self.is_playing() {
            self.stop_autoplay()
        } else {
            self.start_autoplay()
        }
    }

    /// Feeds elapsed host time to the autoplay timer and performs one
    /// `go_to_next` per completed interval.
    ///
    /// Catch-up after a long gap is collapsed: a looping carousel replays at
    /// most one revolution plus the leftover offset, a bounded one at most
    /// `total_slides` steps. The resulting index matches replaying every
    /// period.
    ///
    /// When a render fails, the failing tick keeps its transition and the
    /// ticks not applied yet stay pending for the next call.
    ///
    /// Returns the number of completed periods.
    pub fn advance_time(&mut self, elapsed: Duration) -> CarouselResult<u64> {
        if self.torn_down {
            return Ok(0);
        }
        let periods = self.timer.advance(elapsed);
        let steps = catch_up_steps(
            periods,
            self.state.total_slides(),
            self.state.loop_enabled(),
        );
        for applied in 0..steps {
            if let Err(err) = self.navigate(NavigationCommand::Next, NavigationSource::Autoplay) {
                let pending = steps - applied - 1;
                self.timer.defer_periods(pending);
                warn!(error = %err, pending, "autoplay render failed, deferring pending ticks");
                return Err(err);
            }
        }
        if periods > 0 {
            trace!(periods, steps, "autoplay ticks fired");
        }
        Ok(periods)
    }

    /// Releases the autoplay timer and detaches the engine from input.
    ///
    /// Further navigation and clock updates are ignored. Idempotent; every
    /// call returns the final snapshot.
    pub fn teardown(&mut self) -> EngineSnapshot {
        if !self.torn_down {
            self.torn_down = true;
            if self.timer.cancel() {
                self.emit_plugin_event(PluginEvent::AutoplayStopped);
            }
            debug!(
                issued = self.timer.issued_count(),
                released = self.timer.released_count(),
                "carousel torn down"
            );
            self.emit_plugin_event(PluginEvent::TornDown);
        }
        self.snapshot()
    }

    pub(super) fn reset_autoplay_timer(&mut self) {
        if let Some(handle) = self.timer.reschedule() {
            trace!(handle = handle.id(), "autoplay timer reset");
            self.emit_plugin_event(PluginEvent::AutoplayTimerReset { handle });
        }
    }
}

fn catch_up_steps(periods: u64, total_slides: usize, loop_enabled: bool) -> u64 {
    let total = total_slides as u64;
    if total == 0 {
        return 0;
    }
    if !loop_enabled {
        return periods.min(total);
    }
    if periods > total {
        total + periods % total
    } else {
        periods
    }
}
