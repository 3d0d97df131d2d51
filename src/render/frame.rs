use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{CarouselError, CarouselResult};

/// Track offset and counter text for the active slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlidePosition {
    /// Horizontal translation of the slide track, in percent of one slide.
    pub track_offset_percent: f64,
    /// One-based position shown in the current-index display; `0` when empty.
    pub current_display: usize,
    pub total_display: usize,
}

impl SlidePosition {
    /// CSS-style transform value for the slide track.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateX({}%)", self.track_offset_percent)
    }

    #[must_use]
    pub fn counter_text(&self) -> String {
        self.current_display.to_string()
    }
}

/// Active flags for every indicator, in slide order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub active: SmallVec<[bool; 16]>,
}

impl IndicatorSet {
    #[must_use]
    pub fn with_active(count: usize, active_index: usize) -> Self {
        Self {
            active: (0..count).map(|index| index == active_index).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|active| *active)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|active| **active).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayPauseIcon {
    Play,
    Pause,
}

/// Play/pause control state. The control always offers the opposite action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPauseState {
    pub playing: bool,
}

impl PlayPauseState {
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.playing { "Pause" } else { "Play" }
    }

    #[must_use]
    pub fn icon(self) -> PlayPauseIcon {
        if self.playing {
            PlayPauseIcon::Pause
        } else {
            PlayPauseIcon::Play
        }
    }

    /// State class toggled on the control element.
    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        self.playing.then_some("playing")
    }
}

/// Backend-agnostic output of one `update_carousel` pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselFrame {
    pub position: SlidePosition,
    pub indicators: IndicatorSet,
    pub buttons: ButtonState,
    pub play_pause: PlayPauseState,
}

impl CarouselFrame {
    pub fn validate(&self) -> CarouselResult<()> {
        if !self.position.track_offset_percent.is_finite() {
            return Err(CarouselError::InvalidFrame(
                "track offset must be finite".to_owned(),
            ));
        }
        if self.indicators.len() != self.position.total_display {
            return Err(CarouselError::InvalidFrame(format!(
                "indicator count {} does not match slide count {}",
                self.indicators.len(),
                self.position.total_display
            )));
        }
        if self.indicators.is_empty() {
            return Ok(());
        }
        if self.indicators.active_count() != 1 {
            return Err(CarouselError::InvalidFrame(format!(
                "exactly one indicator must be active, found {}",
                self.indicators.active_count()
            )));
        }
        if self.indicators.active_index() != self.position.current_display.checked_sub(1) {
            return Err(CarouselError::InvalidFrame(
                "active indicator does not match the counter".to_owned(),
            ));
        }
        Ok(())
    }
}
