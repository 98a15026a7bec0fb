use crate::error::{SliderError, SliderResult};
use crate::render::Renderer;

use super::{SliderEngine, SliderSnapshot};

impl<R: Renderer> SliderEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            config: self.config,
            current_index: self.current_index,
            total_items: self.items.len(),
            gesture: self.interaction.gesture(),
            suppress_next_click: self.interaction.click_suppression_latched(),
            autoplay_permission: self.autoplay.permission(),
            autoplay_armed: self.autoplay.is_armed(),
            autoplay_stats: self.autoplay.stats(),
            track: self.render_frame().projection(),
            mounted: self.mounted,
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
