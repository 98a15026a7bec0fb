use serde::{Deserialize, Serialize};

use crate::core::{TrackProjection, project_track};
use crate::error::{SliderError, SliderResult};

/// Backend-agnostic render state for one carousel update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub current_index: usize,
    pub total_items: usize,
    pub translate_x: f64,
    pub transition_enabled: bool,
    pub is_dragging: bool,
    pub card_width_px: f64,
    /// Duration of the settle animation when `transition_enabled` is set.
    pub transition_duration_ms: u64,
}

impl RenderFrame {
    #[must_use]
    pub fn new(
        current_index: usize,
        total_items: usize,
        drag_offset: f64,
        is_dragging: bool,
        card_width_px: f64,
    ) -> Self {
        let TrackProjection {
            translate_x,
            transition_enabled,
        } = project_track(current_index, drag_offset, is_dragging, card_width_px);
        Self {
            current_index,
            total_items,
            translate_x,
            transition_enabled,
            is_dragging,
            card_width_px,
            transition_duration_ms: 0,
        }
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn projection(&self) -> TrackProjection {
        TrackProjection {
            translate_x: self.translate_x,
            transition_enabled: self.transition_enabled,
        }
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.translate_x.is_finite() {
            return Err(SliderError::InvalidData(
                "frame translate_x must be finite".to_owned(),
            ));
        }
        if !self.card_width_px.is_finite() || self.card_width_px <= 0.0 {
            return Err(SliderError::InvalidData(
                "frame card_width_px must be finite and > 0".to_owned(),
            ));
        }
        let index_in_range = if self.total_items == 0 {
            self.current_index == 0
        } else {
            self.current_index < self.total_items
        };
        if !index_in_range {
            return Err(SliderError::InvalidData(format!(
                "frame current_index {} is out of range for {} items",
                self.current_index, self.total_items
            )));
        }
        if self.is_dragging == self.transition_enabled {
            return Err(SliderError::InvalidData(
                "frame transition must be disabled exactly while dragging".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;

    #[test]
    fn out_of_range_index_fails_validation() {
        let mut frame = RenderFrame::new(1, 3, 0.0, false, 300.0);
        assert!(frame.validate().is_ok());
        frame.current_index = 3;
        assert!(frame.validate().is_err());
    }

    #[test]
    fn empty_list_frame_is_valid_at_zero() {
        let frame = RenderFrame::new(0, 0, 0.0, false, 300.0);
        assert!(frame.validate().is_ok());
        assert_eq!(frame.translate_x, 0.0);
    }
}
