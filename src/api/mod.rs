mod autoplay_controller;
mod click_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod gesture_controller;
mod json_contract;
mod lifecycle_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod snapshot_controller;
pub mod trace;
mod validation;

pub use click_controller::{ClickOutcome, NativeDragPolicy};
pub use engine::SliderEngine;
pub use engine_config::SliderEngineConfig;
pub use engine_snapshot::SliderSnapshot;
pub use json_contract::{SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderSnapshotJsonContractV1};
pub use trace::{SliderTrace, TraceReport, replay_trace};
