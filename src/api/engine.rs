use crate::core::SlideItem;
use crate::extensions::SliderPlugin;
use crate::interaction::{AutoplayScheduler, InteractionState};
use crate::render::Renderer;

use super::SliderEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `SliderEngine` owns the slider state, the autoplay task and the
/// renderer. The host forwards pointer/touch events and a periodic `tick`;
/// the engine hands a `RenderFrame` to the renderer after every state
/// transition.
///
/// Dropping the engine drops the autoplay task with it, so no fire can be
/// observed after teardown. `unmount` does the same while keeping the value
/// around for inspection.
pub struct SliderEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: SliderEngineConfig,
    pub(super) items: Vec<SlideItem>,
    pub(super) current_index: usize,
    pub(super) interaction: InteractionState,
    pub(super) autoplay: AutoplayScheduler,
    pub(super) mounted: bool,
    pub(super) plugins: Vec<Box<dyn SliderPlugin>>,
}

impl<R: Renderer> SliderEngine<R> {
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
