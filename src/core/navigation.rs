use serde::{Deserialize, Serialize};

/// Navigation state for one carousel instance.
///
/// All transitions are pure index arithmetic. Each transition returns `true`
/// when the request was accepted (a target index existed), even if the target
/// equals the current index, and `false` when it was dropped. Dropped requests
/// leave the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    current_index: usize,
    total_slides: usize,
    loop_enabled: bool,
}

impl CarouselState {
    #[must_use]
    pub fn new(total_slides: usize, loop_enabled: bool) -> Self {
        Self {
            current_index: 0,
            total_slides,
            loop_enabled,
        }
    }

    #[must_use]
    pub fn current_index(self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total_slides(self) -> usize {
        self.total_slides
    }

    #[must_use]
    pub fn loop_enabled(self) -> bool {
        self.loop_enabled
    }

    /// A carousel without slides never moves.
    #[must_use]
    pub fn is_inert(self) -> bool {
        self.total_slides == 0
    }

    #[must_use]
    pub fn last_index(self) -> Option<usize> {
        self.total_slides.checked_sub(1)
    }

    #[must_use]
    pub fn is_at_first(self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_at_last(self) -> bool {
        self.last_index() == Some(self.current_index)
    }

    /// Index `go_to_previous` would land on, if any.
    #[must_use]
    pub fn previous_index(self) -> Option<usize> {
        let last = self.last_index()?;
        if self.current_index > 0 {
            Some(self.current_index - 1)
        } else if self.loop_enabled {
            Some(last)
        } else {
            None
        }
    }

    /// Index `go_to_next` would land on, if any.
    #[must_use]
    pub fn next_index(self) -> Option<usize> {
        let last = self.last_index()?;
        if self.current_index < last {
            Some(self.current_index + 1)
        } else if self.loop_enabled {
            Some(0)
        } else {
            None
        }
    }

    pub fn go_to_previous(&mut self) -> bool {
        match self.previous_index() {
            Some(index) => self.set_index(index),
            None => false,
        }
    }

    pub fn go_to_next(&mut self) -> bool {
        match self.next_index() {
            Some(index) => self.set_index(index),
            None => false,
        }
    }

    /// Jumps to `index`. Out-of-range requests are dropped, never clamped.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if index >= self.total_slides {
            return false;
        }
        self.set_index(index)
    }

    fn set_index(&mut self, index: usize) -> bool {
        self.current_index = index;
        true
    }
}
