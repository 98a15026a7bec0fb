use serde::{Deserialize, Serialize};

mod autoplay;

pub use autoplay::{
    AutoplayPermission, AutoplayScheduler, AutoplayState, AutoplayStats, AutoplayTransition,
    ScheduledTask,
};

/// Input device that produced a gesture event.
///
/// Mouse and touch drive the same state machine; the source is only carried
/// through to plugin events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Drag gesture state. `start_x` only exists while a drag is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging { start_x: f64, offset: f64 },
}

impl GestureState {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Signed track displacement; always `0.0` when idle.
    #[must_use]
    pub fn offset(self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Dragging { offset, .. } => offset,
        }
    }

    #[must_use]
    pub fn start_x(self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Dragging { start_x, .. } => Some(start_x),
        }
    }
}

/// How a finished drag moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragResolution {
    /// Pointer travelled left far enough: show the next item.
    Advance,
    /// Pointer travelled right far enough: show the previous item.
    Retreat,
    /// Travel stayed under the drag threshold.
    Settle,
}

/// One-shot latch that swallows the click browsers synthesize after a drag.
///
/// Set during a move that exceeds the jitter threshold, cleared on gesture
/// start, and consumed exactly once by [`ClickLatch::take`] when a click is
/// evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickLatch {
    latched: bool,
}

impl ClickLatch {
    pub fn latch(&mut self) {
        self.latched = true;
    }

    pub fn clear(&mut self) {
        self.latched = false;
    }

    #[must_use]
    pub fn is_latched(self) -> bool {
        self.latched
    }

    /// Returns the latch value and clears it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.latched)
    }
}

/// Gesture thresholds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureThresholds {
    /// Minimum travel at gesture end that changes the visible item.
    pub min_drag_distance_px: f64,
    /// Movement beyond this marks the gesture as a drag for click suppression.
    pub jitter_threshold_px: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            min_drag_distance_px: 40.0,
            jitter_threshold_px: 5.0,
        }
    }
}

/// Gesture tracker plus click latch.
///
/// Every transition method returns whether the state actually changed so the
/// caller can skip emission for no-op events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    gesture: GestureState,
    click_latch: ClickLatch,
}

impl InteractionState {
    #[must_use]
    pub fn gesture(self) -> GestureState {
        self.gesture
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn drag_offset(self) -> f64 {
        self.gesture.offset()
    }

    #[must_use]
    pub fn click_suppression_latched(self) -> bool {
        self.click_latch.is_latched()
    }

    /// `Idle -> Dragging`. A start while already dragging is ignored.
    pub fn on_drag_start(&mut self, x: f64) -> bool {
        if self.gesture.is_dragging() {
            return false;
        }
        self.gesture = GestureState::Dragging {
            start_x: x,
            offset: 0.0,
        };
        self.click_latch.clear();
        true
    }

    /// Updates the drag offset. Ignored when idle.
    pub fn on_drag_move(&mut self, x: f64, thresholds: GestureThresholds) -> bool {
        let GestureState::Dragging { start_x, offset } = self.gesture else {
            return false;
        };
        let delta = x - start_x;
        let was_latched = self.click_latch.is_latched();
        if delta.abs() > thresholds.jitter_threshold_px {
            self.click_latch.latch();
        }
        self.gesture = GestureState::Dragging {
            start_x,
            offset: delta,
        };
        delta != offset || was_latched != self.click_latch.is_latched()
    }

    /// `Dragging -> Idle`. Returns `None` when no drag was in progress.
    pub fn on_drag_end(
        &mut self,
        x: f64,
        thresholds: GestureThresholds,
    ) -> Option<DragResolution> {
        let start_x = self.gesture.start_x()?;
        self.gesture = GestureState::Idle;

        // Positive distance means the pointer moved leftward.
        let distance = start_x - x;
        if distance.abs() < thresholds.min_drag_distance_px {
            return Some(DragResolution::Settle);
        }
        if distance > 0.0 {
            Some(DragResolution::Advance)
        } else if distance < 0.0 {
            Some(DragResolution::Retreat)
        } else {
            Some(DragResolution::Settle)
        }
    }

    /// Decides whether a click must be swallowed and consumes the latch.
    ///
    /// This is the only place the latch is consumed.
    pub fn take_click_suppression(&mut self, thresholds: GestureThresholds) -> bool {
        let latched = self.click_latch.take();
        latched || self.gesture.offset().abs() >= thresholds.min_drag_distance_px
    }

    /// Drops any gesture and latch, used when the item list is replaced.
    pub fn reset(&mut self) {
        self.gesture = GestureState::Idle;
        self.click_latch.clear();
    }
}
