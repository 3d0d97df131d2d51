use crate::core::CarouselState;
use crate::render::{
    ButtonState, CarouselFrame, IndicatorSet, PlayPauseState, Renderer, SlidePosition,
};

use super::CarouselEngine;

impl<R: Renderer> CarouselEngine<R> {
    /// Materializes the frame for the current state without rendering it.
    #[must_use]
    pub fn build_frame(&self) -> CarouselFrame {
        build_carousel_frame(self.state, self.is_playing())
    }
}

pub(super) fn build_carousel_frame(state: CarouselState, playing: bool) -> CarouselFrame {
    let total = state.total_slides();
    let current = state.current_index();
    let position = if state.is_inert() {
        SlidePosition {
            track_offset_percent: 0.0,
            current_display: 0,
            total_display: 0,
        }
    } else {
        SlidePosition {
            track_offset_percent: 0.0 - current as f64 * 100.0,
            current_display: current + 1,
            total_display: total,
        }
    };

    let buttons = if state.is_inert() {
        ButtonState {
            prev_enabled: false,
            next_enabled: false,
        }
    } else if state.loop_enabled() {
        ButtonState {
            prev_enabled: true,
            next_enabled: true,
        }
    } else {
        ButtonState {
            prev_enabled: !state.is_at_first(),
            next_enabled: !state.is_at_last(),
        }
    };

    CarouselFrame {
        position,
        indicators: IndicatorSet::with_active(total, current),
        buttons,
        play_pause: PlayPauseState { playing },
    }
}
