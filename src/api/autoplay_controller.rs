use std::time::Duration;

use tracing::debug;

use crate::core::next_index;
use crate::extensions::{IndexChangeCause, SliderEvent};
use crate::interaction::{AutoplayPermission, AutoplayState, AutoplayStats, AutoplayTransition};
use crate::render::Renderer;

use super::SliderEngine;
use super::plugin_dispatch::EventBuffer;

impl<R: Renderer> SliderEngine<R> {
    #[must_use]
    pub fn autoplay_permission(&self) -> AutoplayPermission {
        self.autoplay.permission()
    }

    #[must_use]
    pub fn is_autoplay_armed(&self) -> bool {
        self.autoplay.is_armed()
    }

    #[must_use]
    pub fn autoplay_stats(&self) -> AutoplayStats {
        self.autoplay.stats()
    }

    /// Time left until the next autoplay advance, `None` when disarmed.
    #[must_use]
    pub fn time_until_autoplay(&self) -> Option<Duration> {
        match self.autoplay.state() {
            AutoplayState::Armed(task) => Some(task.until_next_fire()),
            AutoplayState::Disarmed => None,
        }
    }

    /// Pointer or touch entered the hit area: autoplay is suspended.
    pub fn pointer_enter(&mut self) {
        if !self.ensure_mounted("pointer_enter") {
            return;
        }
        let mut events = EventBuffer::new();
        if self.autoplay.set_permission(AutoplayPermission::Suspended) {
            events.push(SliderEvent::PointerEntered);
            self.reconcile_autoplay(&mut events);
        }
        self.commit(events);
    }

    /// Pointer or touch left the hit area: autoplay is allowed again.
    pub fn pointer_leave(&mut self) {
        if !self.ensure_mounted("pointer_leave") {
            return;
        }
        let mut events = EventBuffer::new();
        if self.autoplay.set_permission(AutoplayPermission::Allowed) {
            events.push(SliderEvent::PointerLeft);
            self.reconcile_autoplay(&mut events);
        }
        self.commit(events);
    }

    /// Advances the autoplay clock by `elapsed`.
    ///
    /// Each completed interval moves one item forward and emits its own
    /// frame, in order, even when one tick spans several intervals.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.mounted {
            debug!("ignoring tick after unmount");
            return;
        }
        let fires = self.autoplay.advance(elapsed);
        let total = self.items.len();
        if fires == 0 || total == 0 {
            return;
        }

        for _ in 0..fires {
            let from = self.current_index;
            let to = next_index(from, total);
            debug!(from, to, "autoplay advance");
            self.commit_index_change(from, to, IndexChangeCause::Autoplay);
        }
    }

    /// Armed exactly when mounted, allowed, idle and non-empty.
    pub(super) fn should_arm_autoplay(&self) -> bool {
        self.mounted
            && self.autoplay.is_allowed()
            && !self.interaction.is_dragging()
            && !self.items.is_empty()
    }

    pub(super) fn reconcile_autoplay(&mut self, events: &mut EventBuffer) {
        let should_arm = self.should_arm_autoplay();
        let interval = self.config.autoplay_interval();
        match self.autoplay.reconcile(should_arm, interval) {
            Some(AutoplayTransition::Armed { task_id }) => {
                debug!(task_id, interval_ms = self.config.autoplay_interval_ms, "autoplay armed");
                events.push(SliderEvent::AutoplayArmed { task_id });
            }
            Some(AutoplayTransition::Disarmed { task_id }) => {
                debug!(task_id, "autoplay disarmed");
                events.push(SliderEvent::AutoplayDisarmed { task_id });
            }
            None => {}
        }
    }

    /// Cancels the live task outright, used when the engine is reset or torn down.
    pub(super) fn cancel_autoplay(&mut self, events: &mut EventBuffer) {
        if let Some(task_id) = self.autoplay.cancel() {
            debug!(task_id, "autoplay cancelled");
            events.push(SliderEvent::AutoplayDisarmed { task_id });
        }
    }

    fn commit_index_change(&mut self, from: usize, to: usize, cause: IndexChangeCause) {
        if from == to {
            return;
        }
        self.current_index = to;
        let mut events = EventBuffer::new();
        events.push(SliderEvent::IndexChanged { from, to, cause });
        self.commit(events);
    }
}
