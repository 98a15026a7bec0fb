//! carousel-rs: headless engine for infinite, draggable, auto-advancing carousels.
//!
//! The crate owns the interaction state machine (autoplay timer, pointer and
//! touch drags, click-through navigation) and leaves markup to a host
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SliderEngine, SliderEngineConfig};
pub use error::{SliderError, SliderResult};
