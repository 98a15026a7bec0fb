use serde::{Deserialize, Serialize};

/// Track placement derived from slider state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackProjection {
    /// Horizontal translation of the whole track in pixels.
    pub translate_x: f64,
    /// `false` while a gesture is in progress so the track follows the pointer 1:1.
    pub transition_enabled: bool,
}

/// Projects slider state into the track placement the presentation layer applies.
///
/// `drag_offset` is ignored unless `dragging` is set.
#[must_use]
pub fn project_track(
    current_index: usize,
    drag_offset: f64,
    dragging: bool,
    card_width: f64,
) -> TrackProjection {
    let settled = -(current_index as f64 * card_width);
    let offset = if dragging { drag_offset } else { 0.0 };
    TrackProjection {
        translate_x: settled + offset,
        transition_enabled: !dragging,
    }
}
