//! Observer hooks for host applications.
//!
//! Plugins see every engine event but cannot mutate engine state.

pub mod plugins;

pub use plugins::{IndexChangeCause, PluginContext, SliderEvent, SliderPlugin};
