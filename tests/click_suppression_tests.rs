use carousel_rs::api::{ClickOutcome, SliderEngine, SliderEngineConfig};
use carousel_rs::core::SlideItem;
use carousel_rs::render::NullRenderer;

fn linked_items() -> Vec<SlideItem> {
    vec![
        SlideItem::new("a.png", "A").with_landing_page("https://example.com/a"),
        SlideItem::new("b.png", "B"),
        SlideItem::new("c.png", "C").with_landing_page("/relative/c"),
        SlideItem::new("d.png", "D").with_landing_page("http://example.com/d"),
    ]
}

fn engine() -> SliderEngine<NullRenderer> {
    SliderEngine::new(NullRenderer::default(), linked_items(), SliderEngineConfig::default())
        .expect("engine init")
}

#[test]
fn plain_click_navigates_to_absolute_landing_page() {
    let mut engine = engine();
    let outcome = engine.click_item(0);
    assert_eq!(outcome, ClickOutcome::Navigate("https://example.com/a".to_owned()));
    assert!(!outcome.stops_propagation());
    assert_eq!(outcome.navigation_url(), Some("https://example.com/a"));
}

#[test]
fn missing_or_relative_landing_page_is_skipped() {
    let mut engine = engine();
    assert_eq!(engine.click_item(1), ClickOutcome::Ignored);
    assert_eq!(engine.click_item(2), ClickOutcome::Ignored);
}

#[test]
fn short_drag_above_jitter_swallows_exactly_one_click() {
    let mut engine = engine();
    engine.pointer_down(100.0);
    engine.pointer_move(110.0);
    assert!(engine.click_suppression_latched());
    engine.pointer_up(110.0);
    assert_eq!(engine.current_index(), 0);

    let first = engine.click_item(0);
    assert_eq!(first, ClickOutcome::Suppressed);
    assert!(first.stops_propagation());
    assert!(!engine.click_suppression_latched());

    let second = engine.click_item(0);
    assert_eq!(second, ClickOutcome::Navigate("https://example.com/a".to_owned()));
}

#[test]
fn wiggle_within_jitter_still_navigates() {
    let mut engine = engine();
    engine.touch_start(100.0);
    engine.touch_move(104.0);
    engine.touch_end(103.0);
    assert_eq!(
        engine.click_item(3),
        ClickOutcome::Navigate("http://example.com/d".to_owned())
    );
}

#[test]
fn new_gesture_clears_stale_latch() {
    let mut engine = engine();
    engine.pointer_down(100.0);
    engine.pointer_move(120.0);
    engine.pointer_up(120.0);
    assert!(engine.click_suppression_latched());

    engine.pointer_down(100.0);
    assert!(!engine.click_suppression_latched());
    engine.pointer_up(101.0);
    assert!(matches!(engine.click_item(0), ClickOutcome::Navigate(_)));
}

#[test]
fn large_live_offset_suppresses_click_mid_drag() {
    let config = SliderEngineConfig::default().with_jitter_threshold_px(500.0);
    let mut engine =
        SliderEngine::new(NullRenderer::default(), linked_items(), config).expect("engine init");
    engine.pointer_down(100.0);
    engine.pointer_move(50.0);
    assert!(!engine.click_suppression_latched());

    assert_eq!(engine.click_item(0), ClickOutcome::Suppressed);
}

#[test]
fn suppressed_click_on_unlinked_item_still_consumes_latch() {
    let mut engine = engine();
    engine.pointer_down(0.0);
    engine.pointer_move(20.0);
    engine.pointer_up(20.0);

    assert_eq!(engine.click_item(1), ClickOutcome::Suppressed);
    assert!(matches!(engine.click_item(0), ClickOutcome::Navigate(_)));
}

#[test]
fn out_of_range_click_is_ignored_without_touching_latch() {
    let mut engine = engine();
    engine.pointer_down(0.0);
    engine.pointer_move(20.0);
    engine.pointer_up(20.0);

    assert_eq!(engine.click_item(99), ClickOutcome::Ignored);
    assert!(engine.click_suppression_latched());
}

#[test]
fn clicks_do_not_emit_frames() {
    let mut engine = engine();
    engine.click_item(0);
    engine.click_item(1);
    assert_eq!(engine.renderer().render_count, 0);
}
