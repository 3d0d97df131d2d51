use tracing::debug;

use crate::error::{CarouselError, CarouselResult};
use crate::extensions::CarouselPlugin;
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer> CarouselEngine<R> {
    /// Attaches an observer. Ids are unique per carousel and must not be blank.
    ///
    /// Plugins attached after mount do not see the mount render pass.
    pub fn register_plugin(&mut self, plugin: Box<dyn CarouselPlugin>) -> CarouselResult<()> {
        if plugin.id().trim().is_empty() {
            return Err(CarouselError::BlankPluginId);
        }
        if self.plugin_position(plugin.id()).is_some() {
            return Err(CarouselError::DuplicatePlugin {
                id: plugin.id().to_owned(),
            });
        }
        debug!(plugin = plugin.id(), "plugin attached");
        self.plugins.push(plugin);
        Ok(())
    }

    /// Detaches the observer with `plugin_id`. Returns `false` when none was
    /// attached.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        match self.plugin_position(plugin_id) {
            Some(position) => {
                self.plugins.remove(position);
                debug!(plugin = plugin_id, "plugin detached");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id).is_some()
    }

    fn plugin_position(&self, plugin_id: &str) -> Option<usize> {
        self.plugins.iter().position(|plugin| plugin.id() == plugin_id)
    }
}
