use kline_chart::ChartError;
use kline_chart::api::{ChartEngine, ChartEngineConfig};
use kline_chart::core::{ContentRect, PriceRecord};
use kline_chart::interaction::{KineticScrollConfig, ScrollState};
use kline_chart::render::NullRenderer;

const FRAME: f64 = 1.0 / 60.0;

fn engine_with(len: usize) -> ChartEngine<NullRenderer> {
    let records = (0..len)
        .map(|i| {
            let base = 50.0 + (i % 7) as f64;
            PriceRecord::new(i as f64 * 3_600.0, base, base + 1.5, base - 1.5, base + 0.5)
                .expect("valid record")
        })
        .collect();
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::new(10.0)).expect("init");
    engine.set_viewport(ContentRect::new(0.0, 0.0, 30.0, 90.0));
    engine.load_series(records);
    engine
}

#[test]
fn drag_left_reveals_older_records_and_clamps() {
    let mut engine = engine_with(5);
    engine.on_pan_start();

    engine.on_pan_move(-10.0).expect("move");
    assert_eq!(engine.visible_window().range, Some((1, 3)));

    engine.on_pan_move(-100.0).expect("move");
    assert_eq!(engine.scroll_offset(), 20.0);
    assert_eq!(engine.visible_window().range, Some((0, 2)));

    engine.on_pan_move(5.0).expect("move");
    assert_eq!(engine.scroll_offset(), 15.0);
    assert_eq!(engine.visible_window().range, Some((0, 3)));

    engine.on_pan_move(500.0).expect("move");
    assert_eq!(engine.scroll_offset(), 0.0);
    assert_eq!(engine.visible_window().range, Some((2, 4)));
}

#[test]
fn clamped_move_does_not_request_redraw() {
    let mut engine = engine_with(5);
    engine.take_redraw_request();
    engine.on_pan_start();
    engine.on_pan_move(40.0).expect("move");
    assert_eq!(engine.scroll_offset(), 0.0);
    assert!(!engine.redraw_requested());
}

#[test]
fn fast_release_settles_then_decays_to_idle() {
    let mut engine = engine_with(100);
    engine.on_pan_start();
    engine.on_pan_end(-2_000.0).expect("release");
    assert!(engine.scroll_state().is_settling());

    let mut ticks = 0;
    while engine.scroll_state().is_settling() {
        engine.step_settle(FRAME).expect("tick");
        ticks += 1;
        assert!(ticks < 10_000, "settle must terminate");
    }
    assert_eq!(engine.scroll_state(), ScrollState::Idle);
    assert!(engine.scroll_offset() > 0.0);
    assert!(engine.scroll_offset() < engine.max_scroll_offset());
}

#[test]
fn fling_into_bound_is_absorbed() {
    let mut engine = engine_with(100);
    engine.on_pan_start();
    engine.on_pan_end(2_000.0).expect("release");
    assert!(engine.scroll_state().is_settling());

    let moved = engine.step_settle(FRAME).expect("tick");
    assert!(!moved);
    assert_eq!(engine.scroll_offset(), 0.0);
    assert_eq!(engine.scroll_state(), ScrollState::Idle);
}

#[test]
fn fling_reaching_oldest_record_stops_at_max() {
    let mut engine = engine_with(10);
    engine.on_pan_start();
    engine.on_pan_end(-5_000.0).expect("release");

    while engine.scroll_state().is_settling() {
        engine.step_settle(FRAME).expect("tick");
    }
    assert_eq!(engine.scroll_offset(), engine.max_scroll_offset());
    assert_eq!(engine.visible_window().range, Some((0, 2)));
}

#[test]
fn new_drag_cancels_settle() {
    let mut engine = engine_with(100);
    engine.on_pan_start();
    engine.on_pan_end(-2_000.0).expect("release");
    engine.step_settle(FRAME).expect("tick");
    let offset = engine.scroll_offset();

    engine.on_pan_start();
    assert_eq!(engine.scroll_state(), ScrollState::Dragging);
    assert!(!engine.step_settle(FRAME).expect("tick"));
    assert_eq!(engine.scroll_offset(), offset);
}

#[test]
fn cancel_discards_velocity_without_moving() {
    let mut engine = engine_with(100);
    engine.on_pan_start();
    engine.on_pan_end(-2_000.0).expect("release");
    engine.step_settle(FRAME).expect("tick");
    let offset = engine.scroll_offset();

    engine.cancel_scroll();
    assert_eq!(engine.scroll_state(), ScrollState::Idle);
    assert!(!engine.step_settle(FRAME).expect("tick"));
    assert_eq!(engine.scroll_offset(), offset);
}

#[test]
fn loading_data_mid_settle_returns_to_idle_at_newest() {
    let mut engine = engine_with(100);
    engine.on_pan_start();
    engine.on_pan_end(-2_000.0).expect("release");
    engine.step_settle(FRAME).expect("tick");
    assert!(engine.scroll_offset() > 0.0);

    engine.load_series(Vec::new());
    assert_eq!(engine.scroll_state(), ScrollState::Idle);
    assert_eq!(engine.scroll_offset(), 0.0);
}

#[test]
fn fling_distance_moves_offset_immediately() {
    let mut engine = engine_with(100);
    engine.on_fling(-45.0).expect("fling");
    assert_eq!(engine.scroll_offset(), 45.0);
    assert_eq!(engine.scroll_state(), ScrollState::Idle);
}

#[test]
fn scroll_helpers_jump_to_edges() {
    let mut engine = engine_with(100);
    engine.scroll_to_oldest();
    assert_eq!(engine.scroll_offset(), 970.0);
    assert_eq!(engine.visible_window().range, Some((0, 2)));
    engine.scroll_to_latest();
    assert_eq!(engine.scroll_offset(), 0.0);
}

#[test]
fn gesture_inputs_reject_non_finite_values() {
    let mut engine = engine_with(10);
    let err = engine.on_pan_move(f64::NAN).expect_err("nan delta must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(engine.on_pan_end(f64::INFINITY).is_err());
    assert!(engine.on_fling(f64::NAN).is_err());
    assert!(engine.step_settle(0.0).is_err());
    assert!(engine.step_settle(-FRAME).is_err());
    assert_eq!(engine.scroll_offset(), 0.0);
}

#[test]
fn kinetic_config_is_validated() {
    let mut engine = engine_with(10);
    let err = engine
        .set_kinetic_scroll_config(KineticScrollConfig {
            fling_threshold_px_per_sec: 50.0,
            decay_per_second: 1.5,
            stop_velocity_abs: 5.0,
        })
        .expect_err("decay above one must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let config = KineticScrollConfig {
        fling_threshold_px_per_sec: 500.0,
        decay_per_second: 0.1,
        stop_velocity_abs: 1.0,
    };
    engine.set_kinetic_scroll_config(config).expect("valid config");
    assert_eq!(engine.kinetic_scroll_config(), config);

    engine.on_pan_start();
    engine.on_pan_end(-400.0).expect("release");
    assert_eq!(engine.scroll_state(), ScrollState::Idle);
}
