use serde::{Deserialize, Serialize};

/// Default minimum horizontal travel, in pixels, for a touch gesture to count
/// as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Keys the carousel reacts to. Anything else maps to `Other` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl KeyCode {
    /// Maps a DOM-style `KeyboardEvent.key` name.
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Raw input delivered by the host presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    KeyDown { key: KeyCode },
    PrevButton,
    NextButton,
    PlayPauseControl,
    IndicatorActivated { index: usize },
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    TouchCancel,
}

/// Engine operation requested by an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCommand {
    Previous,
    Next,
    GoTo(usize),
    ToggleAutoplay,
}

/// Which surface caused a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationSource {
    Api,
    Keyboard,
    Button,
    Indicator,
    Swipe,
    Autoplay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Finger travelled right-to-left; reveals the next slide.
    Left,
    /// Finger travelled left-to-right; reveals the previous slide.
    Right,
}

/// Tracks one touch gesture between start and end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    #[must_use]
    pub fn threshold_px(self) -> f64 {
        self.threshold_px
    }

    #[must_use]
    pub fn is_tracking(self) -> bool {
        self.start_x.is_some()
    }

    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Finishes the gesture. Travel must strictly exceed the threshold.
    ///
    /// An end without a matching start, or with non-finite coordinates, yields
    /// no swipe.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        if !start.is_finite() || !x.is_finite() {
            return None;
        }
        let travel = start - x;
        if travel.abs() <= self.threshold_px {
            return None;
        }
        if travel > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    }
}

/// Sole translator from raw input to engine commands.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputMapper {
    swipe: SwipeTracker,
}

impl InputMapper {
    #[must_use]
    pub fn new(swipe_threshold_px: f64) -> Self {
        Self {
            swipe: SwipeTracker::new(swipe_threshold_px),
        }
    }

    #[must_use]
    pub fn swipe(self) -> SwipeTracker {
        self.swipe
    }

    pub fn map(&mut self, event: InputEvent) -> Option<(NavigationCommand, NavigationSource)> {
        match event {
            InputEvent::KeyDown { key } => match key {
                KeyCode::ArrowLeft => {
                    Some((NavigationCommand::Previous, NavigationSource::Keyboard))
                }
                KeyCode::ArrowRight => Some((NavigationCommand::Next, NavigationSource::Keyboard)),
                KeyCode::Other => None,
            },
            InputEvent::PrevButton => Some((NavigationCommand::Previous, NavigationSource::Button)),
            InputEvent::NextButton => Some((NavigationCommand::Next, NavigationSource::Button)),
            InputEvent::PlayPauseControl => {
                Some((NavigationCommand::ToggleAutoplay, NavigationSource::Button))
            }
            InputEvent::IndicatorActivated { index } => {
                Some((NavigationCommand::GoTo(index), NavigationSource::Indicator))
            }
            InputEvent::TouchStart { x } => {
                self.swipe.begin(x);
                None
            }
            InputEvent::TouchEnd { x } => match self.swipe.end(x)? {
                SwipeDirection::Left => Some((NavigationCommand::Next, NavigationSource::Swipe)),
                SwipeDirection::Right => {
                    Some((NavigationCommand::Previous, NavigationSource::Swipe))
                }
            },
            InputEvent::TouchCancel => {
                self.swipe.cancel();
                None
            }
        }
    }
}
