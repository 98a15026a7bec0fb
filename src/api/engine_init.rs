use tracing::debug;

use crate::core::SlideItem;
use crate::error::SliderResult;
use crate::interaction::{AutoplayScheduler, InteractionState};
use crate::render::Renderer;

use super::plugin_dispatch::EventBuffer;
use super::validation::validate_engine_config;
use super::{SliderEngine, SliderEngineConfig};

impl<R: Renderer> SliderEngine<R> {
    /// Creates a mounted engine showing the first item with autoplay armed.
    ///
    /// No frame is rendered here; hosts call [`SliderEngine::render`] for the
    /// initial paint.
    pub fn new(
        renderer: R,
        items: Vec<SlideItem>,
        config: SliderEngineConfig,
    ) -> SliderResult<Self> {
        let config = validate_engine_config(config)?;

        let mut engine = Self {
            renderer,
            config,
            items,
            current_index: 0,
            interaction: InteractionState::default(),
            autoplay: AutoplayScheduler::default(),
            mounted: true,
            plugins: Vec::new(),
        };
        // Plugins cannot be registered yet, so the arming event has no audience.
        let mut events = EventBuffer::new();
        engine.reconcile_autoplay(&mut events);
        debug!(
            total_items = engine.items.len(),
            autoplay_armed = engine.autoplay.is_armed(),
            "slider engine mounted"
        );
        Ok(engine)
    }
}
