use crate::error::SliderResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates each frame so tests catch inconsistent state before a
/// real presentation layer is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(*frame);
        Ok(())
    }
}
