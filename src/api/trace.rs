//! Scripted event traces.
//!
//! A trace is a JSON document listing host events in order, each optionally
//! paired with the state expected afterwards. Replaying a trace drives a
//! headless engine and reports what was observed, which makes recorded
//! browser sessions usable as regression fixtures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::SlideItem;
use crate::error::{SliderError, SliderResult};
use crate::render::NullRenderer;

use super::{ClickOutcome, SliderEngine, SliderEngineConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderTrace {
    pub trace_name: String,
    #[serde(default)]
    pub config: SliderEngineConfig,
    pub items: Vec<SlideItem>,
    pub steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceStep {
    pub action: TraceAction,
    #[serde(default)]
    pub expect: Option<TraceExpectation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceAction {
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp { x: f64 },
    PointerEnter,
    PointerLeave,
    TouchStart { x: f64 },
    TouchMove { x: f64 },
    TouchEnd { x: f64 },
    Tick { elapsed_ms: u64 },
    Click { index: usize },
    Unmount,
}

/// Fields left as `None` are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceExpectation {
    #[serde(default)]
    pub current_index: Option<usize>,
    #[serde(default)]
    pub is_dragging: Option<bool>,
    #[serde(default)]
    pub autoplay_armed: Option<bool>,
    #[serde(default)]
    pub click: Option<ClickOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceObservation {
    pub step: usize,
    pub current_index: usize,
    pub translate_x: f64,
    pub transition_enabled: bool,
    pub is_dragging: bool,
    pub autoplay_armed: bool,
    #[serde(default)]
    pub click: Option<ClickOutcome>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceMismatch {
    pub step: usize,
    pub field: String,
    pub expected: String,
    pub observed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceReport {
    pub trace_name: String,
    pub frames_rendered: usize,
    pub observations: Vec<TraceObservation>,
    pub mismatches: Vec<TraceMismatch>,
}

impl TraceReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

impl SliderTrace {
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse slider trace: {e}")))
    }
}

/// Replays `trace` against a fresh headless engine.
pub fn replay_trace(trace: &SliderTrace) -> SliderResult<TraceReport> {
    let mut engine =
        SliderEngine::new(NullRenderer::default(), trace.items.clone(), trace.config)?;
    let mut observations = Vec::with_capacity(trace.steps.len());
    let mut mismatches = Vec::new();

    for (step, entry) in trace.steps.iter().enumerate() {
        let click = apply_action(&mut engine, entry.action);
        let frame = engine.render_frame();
        let observation = TraceObservation {
            step,
            current_index: frame.current_index,
            translate_x: frame.translate_x,
            transition_enabled: frame.transition_enabled,
            is_dragging: frame.is_dragging,
            autoplay_armed: engine.is_autoplay_armed(),
            click,
        };
        if let Some(expect) = &entry.expect {
            compare(step, expect, &observation, &mut mismatches);
        }
        observations.push(observation);
    }

    Ok(TraceReport {
        trace_name: trace.trace_name.clone(),
        frames_rendered: engine.renderer().render_count,
        observations,
        mismatches,
    })
}

fn apply_action(
    engine: &mut SliderEngine<NullRenderer>,
    action: TraceAction,
) -> Option<ClickOutcome> {
    match action {
        TraceAction::PointerDown { x } => engine.pointer_down(x),
        TraceAction::PointerMove { x } => engine.pointer_move(x),
        TraceAction::PointerUp { x } => engine.pointer_up(x),
        TraceAction::PointerEnter => engine.pointer_enter(),
        TraceAction::PointerLeave => engine.pointer_leave(),
        TraceAction::TouchStart { x } => engine.touch_start(x),
        TraceAction::TouchMove { x } => engine.touch_move(x),
        TraceAction::TouchEnd { x } => engine.touch_end(x),
        TraceAction::Tick { elapsed_ms } => engine.tick(Duration::from_millis(elapsed_ms)),
        TraceAction::Click { index } => return Some(engine.click_item(index)),
        TraceAction::Unmount => engine.unmount(),
    }
    None
}

fn compare(
    step: usize,
    expect: &TraceExpectation,
    observed: &TraceObservation,
    mismatches: &mut Vec<TraceMismatch>,
) {
    let mut check = |field: &str, expected: Option<String>, actual: String| {
        if let Some(expected) = expected {
            if expected != actual {
                mismatches.push(TraceMismatch {
                    step,
                    field: field.to_owned(),
                    expected,
                    observed: actual,
                });
            }
        }
    };
    check(
        "current_index",
        expect.current_index.map(|v| v.to_string()),
        observed.current_index.to_string(),
    );
    check(
        "is_dragging",
        expect.is_dragging.map(|v| v.to_string()),
        observed.is_dragging.to_string(),
    );
    check(
        "autoplay_armed",
        expect.autoplay_armed.map(|v| v.to_string()),
        observed.autoplay_armed.to_string(),
    );
    check(
        "click",
        expect.click.as_ref().map(|v| format!("{:?}", Some(v))),
        format!("{:?}", observed.click),
    );
}
