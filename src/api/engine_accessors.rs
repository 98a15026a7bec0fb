use crate::core::SlideItem;
use crate::interaction::GestureState;
use crate::render::Renderer;

use super::{SliderEngine, SliderEngineConfig};

impl<R: Renderer> SliderEngine<R> {
    #[must_use]
    pub fn config(&self) -> SliderEngineConfig {
        self.config
    }

    #[must_use]
    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&SlideItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// Index of the visible item; always `< total_items()`, or `0` when empty.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&SlideItem> {
        self.items.get(self.current_index)
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.interaction.gesture()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.interaction.is_dragging()
    }

    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.interaction.drag_offset()
    }

    /// Whether the next click will be swallowed as the tail of a drag.
    #[must_use]
    pub fn click_suppression_latched(&self) -> bool {
        self.interaction.click_suppression_latched()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
