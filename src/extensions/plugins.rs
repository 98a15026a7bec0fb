use serde::{Deserialize, Serialize};

use crate::interaction::PointerSource;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub current_index: usize,
    pub total_items: usize,
    pub is_dragging: bool,
    pub drag_offset: f64,
    pub autoplay_armed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexChangeCause {
    Autoplay,
    DragAdvance,
    DragRetreat,
    ItemsReplaced,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    IndexChanged {
        from: usize,
        to: usize,
        cause: IndexChangeCause,
    },
    DragStarted {
        source: PointerSource,
        x: f64,
    },
    DragMoved {
        source: PointerSource,
        offset: f64,
    },
    DragEnded {
        source: PointerSource,
        distance: f64,
    },
    PointerEntered,
    PointerLeft,
    AutoplayArmed {
        task_id: u64,
    },
    AutoplayDisarmed {
        task_id: u64,
    },
    ClickSuppressed {
        index: usize,
    },
    NavigationRequested {
        url: String,
    },
    /// An input arrived outside the engine contract and was ignored.
    ContractViolation {
        reason: String,
    },
    RenderFailed {
        reason: String,
    },
    ItemsReplaced {
        total_items: usize,
    },
    ConfigChanged,
    Unmounted,
}

/// Extension hook interface for host-side observers (analytics, link
/// handlers, debug overlays).
pub trait SliderPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &SliderEvent, context: PluginContext);
}
