use std::time::Duration;

use approx::assert_relative_eq;
use carousel_rs::SliderError;
use carousel_rs::api::{NativeDragPolicy, SliderEngine, SliderEngineConfig};
use carousel_rs::core::SlideItem;
use carousel_rs::interaction::AutoplayPermission;
use carousel_rs::render::NullRenderer;

fn items(count: usize) -> Vec<SlideItem> {
    (0..count)
        .map(|i| SlideItem::new(format!("slide-{i}.png"), format!("Slide {i}")))
        .collect()
}

#[test]
fn engine_starts_on_first_item_with_autoplay_armed() {
    let engine = SliderEngine::new(NullRenderer::default(), items(5), SliderEngineConfig::default())
        .expect("engine init");

    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.total_items(), 5);
    assert!(!engine.is_dragging());
    assert_eq!(engine.autoplay_permission(), AutoplayPermission::Allowed);
    assert!(engine.is_autoplay_armed());
    assert_eq!(engine.time_until_autoplay(), Some(Duration::from_millis(3000)));
    assert!(engine.is_mounted());
    assert_eq!(engine.renderer().render_count, 0);
}

#[test]
fn default_config_matches_documented_values() {
    let config = SliderEngineConfig::default();
    assert_relative_eq!(config.card_width_px, 300.0);
    assert_relative_eq!(config.min_drag_distance_px, 40.0);
    assert_relative_eq!(config.jitter_threshold_px, 5.0);
    assert_eq!(config.autoplay_interval_ms, 3000);
    assert_eq!(config.transition_duration_ms, 300);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = SliderEngineConfig::default().with_card_width_px(-10.0);
    let err = SliderEngine::new(NullRenderer::default(), items(3), config)
        .err()
        .expect("negative card width must fail");
    assert!(matches!(err, SliderError::InvalidConfig(_)));

    let config = SliderEngineConfig::default().with_min_drag_distance_px(f64::NAN);
    assert!(SliderEngine::new(NullRenderer::default(), items(3), config).is_err());
}

#[test]
fn explicit_render_paints_current_state() {
    let mut engine =
        SliderEngine::new(NullRenderer::default(), items(4), SliderEngineConfig::default())
            .expect("engine init");
    engine.render().expect("initial render");

    let frame = engine.renderer().last_frame.expect("frame recorded");
    assert_eq!(frame.current_index, 0);
    assert_relative_eq!(frame.translate_x, 0.0);
    assert!(frame.transition_enabled);
    assert!(!frame.is_dragging);
    assert_eq!(frame.transition_duration_ms, 300);
}

#[test]
fn empty_item_list_never_arms_or_moves() {
    let mut engine =
        SliderEngine::new(NullRenderer::default(), Vec::new(), SliderEngineConfig::default())
            .expect("engine init");
    assert!(!engine.is_autoplay_armed());

    engine.tick(Duration::from_secs(30));
    assert_eq!(engine.current_index(), 0);

    engine.pointer_down(300.0);
    engine.pointer_up(0.0);
    assert_eq!(engine.current_index(), 0);
    assert!(!engine.is_autoplay_armed());
    assert_eq!(engine.autoplay_stats().scheduled, 0);

    let frame = engine.renderer().last_frame.expect("drag frames still emitted");
    assert_eq!(frame.total_items, 0);
    assert_eq!(frame.current_index, 0);
}

#[test]
fn image_drag_is_always_prevented() {
    let engine = SliderEngine::new(NullRenderer::default(), items(2), SliderEngineConfig::default())
        .expect("engine init");
    assert_eq!(engine.image_drag_start(), NativeDragPolicy::PreventDefault);
}

#[test]
fn set_items_resets_like_a_fresh_engine() {
    let mut engine =
        SliderEngine::new(NullRenderer::default(), items(5), SliderEngineConfig::default())
            .expect("engine init");
    engine.tick(Duration::from_millis(9000));
    assert_eq!(engine.current_index(), 3);
    engine.pointer_enter();
    engine.pointer_down(200.0);

    engine.set_items(items(2)).expect("replace items");

    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.total_items(), 2);
    assert!(!engine.is_dragging());
    assert_eq!(engine.autoplay_permission(), AutoplayPermission::Allowed);
    assert!(engine.is_autoplay_armed());
    assert_eq!(engine.autoplay_stats().live_tasks(), 1);
}

#[test]
fn set_config_restarts_autoplay_only_when_interval_changes() {
    let mut engine =
        SliderEngine::new(NullRenderer::default(), items(5), SliderEngineConfig::default())
            .expect("engine init");
    engine.tick(Duration::from_millis(2000));

    engine
        .set_config(SliderEngineConfig::default().with_card_width_px(250.0))
        .expect("same interval");
    assert_eq!(engine.autoplay_stats().scheduled, 1);
    assert_eq!(engine.time_until_autoplay(), Some(Duration::from_millis(1000)));
    let frame = engine.renderer().last_frame.expect("config change renders");
    assert_relative_eq!(frame.card_width_px, 250.0);

    engine
        .set_config(SliderEngineConfig::default().with_autoplay_interval_ms(1000))
        .expect("new interval");
    assert_eq!(engine.autoplay_stats().scheduled, 2);
    assert_eq!(engine.autoplay_stats().live_tasks(), 1);
    engine.tick(Duration::from_millis(1000));
    assert_eq!(engine.current_index(), 1);

    let err = engine
        .set_config(SliderEngineConfig::default().with_autoplay_interval_ms(0))
        .expect_err("zero interval must fail");
    assert!(matches!(err, SliderError::InvalidConfig(_)));
}
