use tracing::trace;

use crate::error::CarouselResult;
use crate::interaction::{InputEvent, SwipeTracker};
use crate::render::Renderer;

use super::CarouselEngine;

impl<R: Renderer> CarouselEngine<R> {
    /// Routes one raw host event through the input mapper.
    ///
    /// Returns `true` when the event produced an accepted engine operation.
    pub fn handle_input(&mut self, event: InputEvent) -> CarouselResult<bool> {
        if self.torn_down {
            return Ok(false);
        }
        match self.input.map(event) {
            Some((command, source)) => self.navigate(command, source),
            None => {
                trace!(?event, "input produced no command");
                Ok(false)
            }
        }
    }

    #[must_use]
    pub fn swipe_tracker(&self) -> SwipeTracker {
        self.input.swipe()
    }
}
