use crate::core::{AutoplayTimer, CarouselState};
use crate::extensions::CarouselPlugin;
use crate::interaction::InputMapper;
use crate::render::{CarouselFrame, Renderer};

use super::{CarouselConfig, MountDescriptor};

/// Carousel controller consumed by host applications.
///
/// `CarouselEngine` owns navigation state, the autoplay timer, input mapping
/// and the renderer. It is created through [`super::init_carousel`] or
/// [`CarouselEngine::new`] and owned by the embedding caller; there is no
/// ambient instance.
pub struct CarouselEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: CarouselConfig,
    pub(super) mount: MountDescriptor,
    pub(super) state: CarouselState,
    pub(super) timer: AutoplayTimer,
    pub(super) input: InputMapper,
    pub(super) plugins: Vec<Box<dyn CarouselPlugin>>,
    pub(super) last_frame: Option<CarouselFrame>,
    pub(super) torn_down: bool,
}

impl<R: Renderer> CarouselEngine<R> {
    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    #[must_use]
    pub fn mount(&self) -> &MountDescriptor {
        &self.mount
    }

    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.state.total_slides()
    }

    #[must_use]
    pub fn loop_enabled(&self) -> bool {
        self.state.loop_enabled()
    }

    #[must_use]
    pub fn timer(&self) -> &AutoplayTimer {
        &self.timer
    }

    /// Frame produced by the most recent render pass.
    #[must_use]
    pub fn last_frame(&self) -> Option<&CarouselFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
