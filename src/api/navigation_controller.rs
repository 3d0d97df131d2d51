use tracing::{debug, trace};

use crate::error::CarouselResult;
use crate::interaction::{NavigationCommand, NavigationSource};
use crate::render::Renderer;

use super::{CarouselEngine, PluginEvent};

impl<R: Renderer> CarouselEngine<R> {
    /// Moves one slide back, wrapping to the last slide when looping.
    ///
    /// Returns `false` when the request was dropped (first slide without
    /// loop, or no slides). Dropped requests do not render.
    pub fn go_to_previous(&mut self) -> CarouselResult<bool> {
        self.navigate(NavigationCommand::Previous, NavigationSource::Api)
    }

    /// Moves one slide forward, wrapping to the first slide when looping.
    pub fn go_to_next(&mut self) -> CarouselResult<bool> {
        self.navigate(NavigationCommand::Next, NavigationSource::Api)
    }

    /// Jumps to `index`. Out-of-range indices are silently ignored.
    pub fn go_to_slide(&mut self, index: usize) -> CarouselResult<bool> {
        self.navigate(NavigationCommand::GoTo(index), NavigationSource::Api)
    }

    /// Applies one navigation command on behalf of `source`.
    ///
    /// Accepted transitions run one render pass. While autoplay is active,
    /// any transition not caused by the autoplay tick itself re-times the
    /// timer from now.
    pub fn navigate(
        &mut self,
        command: NavigationCommand,
        source: NavigationSource,
    ) -> CarouselResult<bool> {
        if self.torn_down {
            trace!(?command, "ignoring navigation after teardown");
            return Ok(false);
        }

        let from = self.state.current_index();
        let accepted = match command {
            NavigationCommand::Previous => self.state.go_to_previous(),
            NavigationCommand::Next => self.state.go_to_next(),
            NavigationCommand::GoTo(index) => self.state.go_to_slide(index),
            NavigationCommand::ToggleAutoplay => {
                self.toggle_autoplay()?;
                return Ok(true);
            }
        };
        if !accepted {
            trace!(?command, ?source, from, "navigation request dropped");
            return Ok(false);
        }

        let to = self.state.current_index();
        debug!(from, to, ?source, "slide transition");
        if source != NavigationSource::Autoplay {
            self.reset_autoplay_timer();
        }
        if from != to {
            self.emit_plugin_event(PluginEvent::SlideChanged { from, to, source });
        }
        self.update_carousel()?;
        Ok(true)
    }
}
