mod autoplay_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod input_controller;
mod json_contract;
mod mount;
mod navigation_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod render_frame_builder;
mod snapshot_controller;
mod validation;

pub use engine::CarouselEngine;
pub use engine_config::{CarouselConfig, DEFAULT_AUTOPLAY_INTERVAL_MS};
pub use engine_init::init_carousel;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use mount::{ElementRole, MountDescriptor};

pub use crate::extensions::{CarouselPlugin, PluginContext, PluginEvent};
