use tracing::debug;

use crate::core::{AutoplayTimer, CarouselState};
use crate::error::CarouselResult;
use crate::interaction::InputMapper;
use crate::render::Renderer;

use super::validation::validate_config;
use super::{CarouselConfig, CarouselEngine, MountDescriptor};

impl<R: Renderer> CarouselEngine<R> {
    /// Creates a mounted engine and performs the first render pass.
    ///
    /// Nothing is kept when any step fails: a missing element, an invalid
    /// option or a renderer error during mount all abort construction.
    pub fn new(
        renderer: R,
        mount: MountDescriptor,
        config: CarouselConfig,
    ) -> CarouselResult<Self> {
        mount.validate()?;
        validate_config(config)?;

        let total_slides = mount.slide_count();
        let timer = AutoplayTimer::new(config.autoplay_interval())?;
        if config.enable_autoplay {
            debug!("enableAutoPlay is accepted but does not start autoplay at mount");
        }

        let mut engine = Self {
            renderer,
            config,
            mount,
            state: CarouselState::new(total_slides, config.enable_loop),
            timer,
            input: InputMapper::new(config.swipe_threshold_px),
            plugins: Vec::new(),
            last_frame: None,
            torn_down: false,
        };

        engine.renderer.create_indicators(total_slides)?;
        engine.update_carousel()?;
        debug!(
            total_slides,
            loop_enabled = config.enable_loop,
            autoplay_interval_ms = config.autoplay_interval_ms,
            "carousel mounted"
        );
        Ok(engine)
    }
}

/// Mounts a carousel and returns the owned handle.
pub fn init_carousel<R: Renderer>(
    renderer: R,
    mount: MountDescriptor,
    config: CarouselConfig,
) -> CarouselResult<CarouselEngine<R>> {
    CarouselEngine::new(renderer, mount, config)
}
