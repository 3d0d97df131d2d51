use serde::{Deserialize, Serialize};

use crate::core::TimerHandle;
use crate::interaction::NavigationSource;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub current_index: usize,
    pub total_slides: usize,
    pub loop_enabled: bool,
    pub playing: bool,
    pub timer_handle: Option<TimerHandle>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginEvent {
    SlideChanged {
        from: usize,
        to: usize,
        source: NavigationSource,
    },
    AutoplayStarted { handle: TimerHandle },
    AutoplayStopped,
    AutoplayTimerReset { handle: TimerHandle },
    Rendered,
    TornDown,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins can observe events and read engine context without mutating
/// navigation state directly.
pub trait CarouselPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
