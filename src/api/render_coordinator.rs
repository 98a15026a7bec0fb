use tracing::warn;

use crate::error::SliderResult;
use crate::extensions::SliderEvent;
use crate::render::{RenderFrame, Renderer};

use super::SliderEngine;
use super::plugin_dispatch::EventBuffer;

impl<R: Renderer> SliderEngine<R> {
    /// Builds the frame for the current state without rendering it.
    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::new(
            self.current_index,
            self.items.len(),
            self.interaction.drag_offset(),
            self.interaction.is_dragging(),
            self.config.card_width_px,
        )
        .with_transition_duration_ms(self.config.transition_duration_ms)
    }

    /// Renders the current state on demand, e.g. for the first paint.
    pub fn render(&mut self) -> SliderResult<()> {
        let frame = self.render_frame();
        self.renderer.render(&frame)
    }

    /// Emits one frame for a finished transition, then notifies plugins.
    ///
    /// An empty buffer means the event was a no-op and nothing is emitted.
    /// Renderer failures are reported but never undo the transition.
    pub(super) fn commit(&mut self, mut events: EventBuffer) {
        if events.is_empty() {
            return;
        }
        let frame = self.render_frame();
        if let Err(err) = self.renderer.render(&frame) {
            warn!(
                error = %err,
                current_index = frame.current_index,
                "renderer rejected slider frame"
            );
            events.push(SliderEvent::RenderFailed {
                reason: err.to_string(),
            });
        }
        self.dispatch_events(events);
    }
}
