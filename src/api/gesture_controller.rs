use tracing::debug;

use crate::core::{next_index, previous_index};
use crate::extensions::{IndexChangeCause, SliderEvent};
use crate::interaction::{AutoplayPermission, DragResolution, PointerSource};
use crate::render::Renderer;

use super::SliderEngine;
use super::plugin_dispatch::EventBuffer;
use super::validation::pointer_coordinate_violation;

impl<R: Renderer> SliderEngine<R> {
    /// Mouse button pressed at `x` (client coordinates).
    pub fn pointer_down(&mut self, x: f64) {
        self.drag_start(PointerSource::Mouse, x);
    }

    pub fn pointer_move(&mut self, x: f64) {
        self.drag_move(PointerSource::Mouse, x);
    }

    pub fn pointer_up(&mut self, x: f64) {
        self.drag_end(PointerSource::Mouse, x);
    }

    /// Touch began; `x` is the first active touch point.
    pub fn touch_start(&mut self, x: f64) {
        self.drag_start(PointerSource::Touch, x);
    }

    /// Touch moved; `x` is the first active touch point.
    pub fn touch_move(&mut self, x: f64) {
        self.drag_move(PointerSource::Touch, x);
    }

    /// Touch ended; `x` is the first changed touch point.
    pub fn touch_end(&mut self, x: f64) {
        self.drag_end(PointerSource::Touch, x);
    }

    fn accept_pointer_input(&mut self, operation: &str, x: f64) -> bool {
        if !self.ensure_mounted(operation) {
            return false;
        }
        if let Some(reason) = pointer_coordinate_violation(x) {
            self.report_contract_violation(operation, reason);
            return false;
        }
        true
    }

    fn drag_start(&mut self, source: PointerSource, x: f64) {
        if !self.accept_pointer_input("drag_start", x) {
            return;
        }
        if !self.interaction.on_drag_start(x) {
            debug!(?source, x, "drag already in progress, ignoring start");
            return;
        }
        let mut events = EventBuffer::new();
        events.push(SliderEvent::DragStarted { source, x });
        self.autoplay.set_permission(AutoplayPermission::Suspended);
        self.reconcile_autoplay(&mut events);
        self.commit(events);
    }

    fn drag_move(&mut self, source: PointerSource, x: f64) {
        if !self.accept_pointer_input("drag_move", x) {
            return;
        }
        let thresholds = self.config.gesture_thresholds();
        if !self.interaction.on_drag_move(x, thresholds) {
            return;
        }
        let mut events = EventBuffer::new();
        events.push(SliderEvent::DragMoved {
            source,
            offset: self.interaction.drag_offset(),
        });
        self.commit(events);
    }

    fn drag_end(&mut self, source: PointerSource, x: f64) {
        if !self.accept_pointer_input("drag_end", x) {
            return;
        }
        let Some(start_x) = self.interaction.gesture().start_x() else {
            return;
        };
        let thresholds = self.config.gesture_thresholds();
        let Some(resolution) = self.interaction.on_drag_end(x, thresholds) else {
            return;
        };

        let distance = start_x - x;
        let mut events = EventBuffer::new();
        events.push(SliderEvent::DragEnded { source, distance });

        let total = self.items.len();
        let from = self.current_index;
        let change = match resolution {
            DragResolution::Advance => {
                Some((next_index(from, total), IndexChangeCause::DragAdvance))
            }
            DragResolution::Retreat => {
                Some((previous_index(from, total), IndexChangeCause::DragRetreat))
            }
            DragResolution::Settle => None,
        };
        if let Some((to, cause)) = change {
            self.current_index = to;
            if to != from {
                events.push(SliderEvent::IndexChanged { from, to, cause });
            }
        }
        debug!(?source, distance, ?resolution, index = self.current_index, "drag ended");

        self.autoplay.set_permission(AutoplayPermission::Allowed);
        self.reconcile_autoplay(&mut events);
        self.commit(events);
    }
}
