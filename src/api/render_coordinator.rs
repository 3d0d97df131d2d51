use tracing::trace;

use crate::error::CarouselResult;
use crate::render::Renderer;

use super::{CarouselEngine, PluginEvent};

impl<R: Renderer> CarouselEngine<R> {
    /// Single render pass: track offset, indicators, counter, buttons and the
    /// play/pause control.
    pub fn update_carousel(&mut self) -> CarouselResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        trace!(
            current_index = self.state.current_index(),
            playing = self.is_playing(),
            "carousel rendered"
        );
        self.last_frame = Some(frame);
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }
}
