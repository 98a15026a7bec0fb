use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extensions::SliderEvent;
use crate::render::Renderer;

use super::SliderEngine;
use super::plugin_dispatch::EventBuffer;

/// Result of evaluating a click on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickOutcome {
    /// The click was the tail of a drag. The host must stop propagation.
    Suppressed,
    /// The host should open this URL in a new external context.
    Navigate(String),
    /// Nothing to do: no absolute landing page, or the call was out of contract.
    Ignored,
}

impl ClickOutcome {
    #[must_use]
    pub fn stops_propagation(&self) -> bool {
        matches!(self, Self::Suppressed)
    }

    #[must_use]
    pub fn navigation_url(&self) -> Option<&str> {
        match self {
            Self::Navigate(url) => Some(url),
            Self::Suppressed | Self::Ignored => None,
        }
    }
}

/// What the host should do with the browser's native image drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NativeDragPolicy {
    Allow,
    PreventDefault,
}

impl<R: Renderer> SliderEngine<R> {
    /// Evaluates a click on the item at `index`.
    ///
    /// Consumes the click-suppression latch whatever the outcome.
    pub fn click_item(&mut self, index: usize) -> ClickOutcome {
        if !self.ensure_mounted("click_item") {
            return ClickOutcome::Ignored;
        }
        if index >= self.items.len() {
            let reason = format!(
                "item index {index} is out of range for {} items",
                self.items.len()
            );
            self.report_contract_violation("click_item", reason);
            return ClickOutcome::Ignored;
        }

        let thresholds = self.config.gesture_thresholds();
        let suppressed = self.interaction.take_click_suppression(thresholds);
        let mut events = EventBuffer::new();
        let outcome = if suppressed {
            events.push(SliderEvent::ClickSuppressed { index });
            ClickOutcome::Suppressed
        } else if let Some(url) = self.items[index].external_landing_page() {
            let url = url.to_owned();
            events.push(SliderEvent::NavigationRequested { url: url.clone() });
            ClickOutcome::Navigate(url)
        } else {
            ClickOutcome::Ignored
        };
        debug!(index, ?outcome, "item click evaluated");

        // The render state is unchanged by a click, so only plugins hear about it.
        self.dispatch_events(events);
        outcome
    }

    /// Native drag of an item image is always prevented so it cannot hijack
    /// the slider gesture.
    #[must_use]
    pub fn image_drag_start(&self) -> NativeDragPolicy {
        NativeDragPolicy::PreventDefault
    }
}
