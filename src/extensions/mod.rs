//! Optional feature modules live here.
//!
//! Keep extensions observational and avoid coupling them into navigation paths.

pub mod plugins;

pub use plugins::{CarouselPlugin, PluginContext, PluginEvent};
