use serde::{Deserialize, Serialize};

use crate::core::TrackProjection;
use crate::interaction::{AutoplayPermission, AutoplayStats, GestureState};

use super::SliderEngineConfig;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub config: SliderEngineConfig,
    pub current_index: usize,
    pub total_items: usize,
    pub gesture: GestureState,
    pub suppress_next_click: bool,
    pub autoplay_permission: AutoplayPermission,
    pub autoplay_armed: bool,
    pub autoplay_stats: AutoplayStats,
    pub track: TrackProjection,
    pub mounted: bool,
}
