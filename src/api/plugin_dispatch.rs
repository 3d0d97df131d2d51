use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{CarouselEngine, PluginEvent};

impl<R: Renderer> CarouselEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            current_index: self.state.current_index(),
            total_slides: self.state.total_slides(),
            loop_enabled: self.state.loop_enabled(),
            playing: self.timer.is_active(),
            timer_handle: self.timer.handle(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
