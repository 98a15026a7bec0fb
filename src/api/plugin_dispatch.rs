use smallvec::SmallVec;
use tracing::warn;

use crate::extensions::{PluginContext, SliderEvent};
use crate::render::Renderer;

use super::SliderEngine;

/// Events produced by one transition. A drag end yields at most four, so the
/// common path stays on the stack.
pub(super) type EventBuffer = SmallVec<[SliderEvent; 4]>;

impl<R: Renderer> SliderEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            current_index: self.current_index,
            total_items: self.items.len(),
            is_dragging: self.interaction.is_dragging(),
            drag_offset: self.interaction.drag_offset(),
            autoplay_armed: self.autoplay.is_armed(),
        }
    }

    pub(super) fn dispatch_events(&mut self, events: EventBuffer) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for event in &events {
            for plugin in &mut self.plugins {
                plugin.on_event(event, context);
            }
        }
    }

    /// Logs an out-of-contract call and tells plugins about it.
    ///
    /// State is never touched here.
    pub(super) fn report_contract_violation(&mut self, operation: &str, reason: String) {
        warn!(operation, reason = %reason, "ignoring out-of-contract slider call");
        let mut events = EventBuffer::new();
        events.push(SliderEvent::ContractViolation {
            reason: format!("{operation}: {reason}"),
        });
        self.dispatch_events(events);
    }

    /// Returns `false` (after reporting) when the engine was already unmounted.
    pub(super) fn ensure_mounted(&mut self, operation: &str) -> bool {
        if self.mounted {
            return true;
        }
        self.report_contract_violation(operation, "engine is unmounted".to_owned());
        false
    }
}
