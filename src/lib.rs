//! carousel-rs: headless slide carousel engine.
//!
//! The crate keeps navigation state, autoplay timing and input mapping free of
//! any concrete UI runtime. Hosts mount a carousel with a [`render::Renderer`]
//! implementation and feed it input events and elapsed time.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CarouselConfig, CarouselEngine, MountDescriptor, init_carousel};
pub use error::{CarouselError, CarouselResult};
