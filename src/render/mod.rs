mod frame;
mod null_renderer;

pub use frame::{
    ButtonState, CarouselFrame, IndicatorSet, PlayPauseIcon, PlayPauseState, SlidePosition,
};
pub use null_renderer::NullRenderer;

use crate::error::CarouselResult;

/// Presentation port implemented by any host UI backend.
///
/// The engine never touches concrete UI elements. After every accepted
/// transition it materializes a [`CarouselFrame`] and hands it to
/// [`Renderer::render`], which fans out to the per-capability hooks.
pub trait Renderer {
    /// Called once at mount time, before the first frame, with one indicator
    /// per slide.
    fn create_indicators(&mut self, count: usize) -> CarouselResult<()> {
        let _ = count;
        Ok(())
    }

    fn render_slide_position(&mut self, position: &SlidePosition) -> CarouselResult<()>;

    fn render_indicators(&mut self, indicators: &IndicatorSet) -> CarouselResult<()>;

    fn render_buttons(&mut self, buttons: ButtonState) -> CarouselResult<()>;

    fn render_play_pause(&mut self, state: PlayPauseState) -> CarouselResult<()>;

    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.render_slide_position(&frame.position)?;
        self.render_indicators(&frame.indicators)?;
        self.render_buttons(frame.buttons)?;
        self.render_play_pause(frame.play_pause)
    }
}
