use std::time::Duration;

use carousel_rs::api::{SliderEngine, SliderEngineConfig};
use carousel_rs::core::SlideItem;
use carousel_rs::interaction::AutoplayPermission;
use carousel_rs::render::NullRenderer;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    PointerDown(f64),
    PointerMove(f64),
    PointerUp(f64),
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd(f64),
    Enter,
    Leave,
    Tick(u64),
    Click(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let x = -2_000.0f64..2_000.0;
    prop_oneof![
        x.clone().prop_map(Op::PointerDown),
        x.clone().prop_map(Op::PointerMove),
        x.clone().prop_map(Op::PointerUp),
        x.clone().prop_map(Op::TouchStart),
        x.clone().prop_map(Op::TouchMove),
        x.prop_map(Op::TouchEnd),
        Just(Op::Enter),
        Just(Op::Leave),
        (0u64..20_000).prop_map(Op::Tick),
        (0usize..10).prop_map(Op::Click),
    ]
}

fn items(count: usize) -> Vec<SlideItem> {
    (0..count)
        .map(|i| SlideItem::new(format!("{i}.png"), format!("Slide {i}")))
        .collect()
}

fn apply(engine: &mut SliderEngine<NullRenderer>, op: &Op) {
    match *op {
        Op::PointerDown(x) => engine.pointer_down(x),
        Op::PointerMove(x) => engine.pointer_move(x),
        Op::PointerUp(x) => engine.pointer_up(x),
        Op::TouchStart(x) => engine.touch_start(x),
        Op::TouchMove(x) => engine.touch_move(x),
        Op::TouchEnd(x) => engine.touch_end(x),
        Op::Enter => engine.pointer_enter(),
        Op::Leave => engine.pointer_leave(),
        Op::Tick(ms) => engine.tick(Duration::from_millis(ms)),
        Op::Click(index) => {
            let _ = engine.click_item(index);
        }
    }
}

proptest! {
    #[test]
    fn index_stays_in_range_and_timer_stays_single(
        total in 0usize..8,
        ops in prop::collection::vec(op_strategy(), 0..80)
    ) {
        let mut engine =
            SliderEngine::new(NullRenderer::default(), items(total), SliderEngineConfig::default())
                .expect("engine init");

        for op in &ops {
            apply(&mut engine, op);

            let index = engine.current_index();
            if total == 0 {
                prop_assert_eq!(index, 0);
            } else {
                prop_assert!(index < total);
            }
            prop_assert!(engine.render_frame().validate().is_ok());
            prop_assert!(engine.autoplay_stats().live_tasks() <= 1);

            let expect_armed = total > 0
                && !engine.is_dragging()
                && engine.autoplay_permission() == AutoplayPermission::Allowed;
            prop_assert_eq!(engine.is_autoplay_armed(), expect_armed);
            if !engine.is_dragging() {
                prop_assert_eq!(engine.drag_offset(), 0.0);
            }
        }
    }

    #[test]
    fn autoplay_cadence_matches_fire_count(
        total in 1usize..8,
        fires in 0usize..40
    ) {
        let config = SliderEngineConfig::default();
        let interval = Duration::from_millis(config.autoplay_interval_ms);
        let mut engine = SliderEngine::new(NullRenderer::default(), items(total), config)
            .expect("engine init");

        for _ in 0..fires {
            engine.tick(interval);
        }
        prop_assert_eq!(engine.current_index(), fires % total);
    }
}
