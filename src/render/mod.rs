mod frame;
mod null_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;

use crate::error::SliderResult;

/// Contract implemented by the presentation layer.
///
/// Backends receive a fully materialized `RenderFrame` after every state
/// transition, so markup and styling stay isolated from gesture and
/// autoplay logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SliderResult<()>;
}
