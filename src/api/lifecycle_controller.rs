use tracing::{debug, info};

use crate::core::SlideItem;
use crate::error::{SliderError, SliderResult};
use crate::extensions::{IndexChangeCause, SliderEvent};
use crate::interaction::AutoplayPermission;
use crate::render::Renderer;

use super::plugin_dispatch::EventBuffer;
use super::validation::validate_engine_config;
use super::{SliderEngine, SliderEngineConfig};

impl<R: Renderer> SliderEngine<R> {
    /// Tears the engine down: the autoplay task is cancelled before this
    /// returns and every later event, ticks included, is ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let mut events = EventBuffer::new();
        self.cancel_autoplay(&mut events);
        self.mounted = false;
        events.push(SliderEvent::Unmounted);
        info!(current_index = self.current_index, "slider engine unmounted");
        self.dispatch_events(events);
    }

    /// Replaces the item list, which behaves like recreating the engine:
    /// first item, no gesture, autoplay allowed and rescheduled.
    pub fn set_items(&mut self, items: Vec<SlideItem>) -> SliderResult<()> {
        self.ensure_mounted_for_update("set_items")?;

        let mut events = EventBuffer::new();
        self.cancel_autoplay(&mut events);
        self.interaction.reset();
        self.autoplay.set_permission(AutoplayPermission::Allowed);
        self.items = items;

        let from = self.current_index;
        self.current_index = 0;
        events.push(SliderEvent::ItemsReplaced {
            total_items: self.items.len(),
        });
        if from != 0 {
            events.push(SliderEvent::IndexChanged {
                from,
                to: 0,
                cause: IndexChangeCause::ItemsReplaced,
            });
        }
        self.reconcile_autoplay(&mut events);
        debug!(total_items = self.items.len(), "slider items replaced");
        self.commit(events);
        Ok(())
    }

    /// Applies a new validated config. A changed autoplay interval restarts
    /// the live task with the new cadence.
    pub fn set_config(&mut self, config: SliderEngineConfig) -> SliderResult<()> {
        self.ensure_mounted_for_update("set_config")?;
        let config = validate_engine_config(config)?;

        let mut events = EventBuffer::new();
        let interval_changed = config.autoplay_interval_ms != self.config.autoplay_interval_ms;
        self.config = config;
        if interval_changed {
            self.cancel_autoplay(&mut events);
        }
        self.reconcile_autoplay(&mut events);
        events.push(SliderEvent::ConfigChanged);
        self.commit(events);
        Ok(())
    }

    fn ensure_mounted_for_update(&self, operation: &str) -> SliderResult<()> {
        if self.mounted {
            Ok(())
        } else {
            Err(SliderError::InvalidData(format!(
                "{operation} called on an unmounted engine"
            )))
        }
    }
}
