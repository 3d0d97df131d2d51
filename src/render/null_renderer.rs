use crate::error::CarouselResult;
use crate::render::{
    ButtonState, CarouselFrame, IndicatorSet, PlayPauseState, Renderer, SlidePosition,
};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates every frame and keeps the last one so tests can assert
/// on what a real backend would have drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub created_indicators: Option<usize>,
    pub render_count: usize,
    pub last_frame: Option<CarouselFrame>,
}

impl Renderer for NullRenderer {
    fn create_indicators(&mut self, count: usize) -> CarouselResult<()> {
        self.created_indicators = Some(count);
        Ok(())
    }

    fn render_slide_position(&mut self, _position: &SlidePosition) -> CarouselResult<()> {
        Ok(())
    }

    fn render_indicators(&mut self, _indicators: &IndicatorSet) -> CarouselResult<()> {
        Ok(())
    }

    fn render_buttons(&mut self, _buttons: ButtonState) -> CarouselResult<()> {
        Ok(())
    }

    fn render_play_pause(&mut self, _state: PlayPauseState) -> CarouselResult<()> {
        Ok(())
    }

    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
