use kline_chart::api::{ChartEngine, ChartEngineConfig};
use kline_chart::core::{ContentRect, PriceRecord, compute_visible_window, max_scroll_offset};
use kline_chart::render::NullRenderer;

const DAY: f64 = 86_400.0;

fn flat_series(len: usize) -> Vec<PriceRecord> {
    (0..len)
        .map(|i| {
            let base = 100.0 + i as f64;
            PriceRecord::new(i as f64 * DAY, base, base + 2.0, base - 2.0, base + 1.0)
                .expect("valid record")
        })
        .collect()
}

fn engine_with(len: usize, content: ContentRect) -> ChartEngine<NullRenderer> {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::new(10.0)).expect("init");
    engine.set_viewport(content);
    engine.load_series(flat_series(len));
    engine
}

#[test]
fn window_starts_at_newest_record() {
    let window = compute_visible_window(5, 10.0, 0.0, 30.0, 30.0);
    assert_eq!(window.range, Some((2, 4)));
    assert!(window.contains(4));
    assert!(!window.contains(1));
    let pairs: Vec<(usize, f64)> = window.iter().collect();
    assert_eq!(pairs, vec![(2, 5.0), (3, 15.0), (4, 25.0)]);
}

#[test]
fn max_scroll_offset_reveals_oldest_record_at_left_edge() {
    let max = max_scroll_offset(50, 10.0, 120.0);
    assert_eq!(max, 380.0);

    let window = compute_visible_window(50, 10.0, max, 120.0, 120.0);
    assert_eq!(window.range, Some((0, 11)));
    assert_eq!(window.center_xs.first().copied(), Some(5.0));
    assert_eq!(window.center_xs.last().copied(), Some(115.0));
}

#[test]
fn empty_series_yields_empty_window_and_frame() {
    let engine = engine_with(0, ContentRect::new(0.0, 0.0, 100.0, 100.0));
    assert!(engine.visible_window().is_empty());
    assert!(engine.drawable_items().is_empty());
    assert_eq!(engine.price_range().max, 0.0);
    assert_eq!(engine.price_range().min, 0.0);
    assert!(engine.price_ticks().is_empty());
    assert_eq!(engine.max_scroll_offset(), 0.0);
}

#[test]
fn zero_area_viewport_yields_no_items() {
    let engine = engine_with(20, ContentRect::new(50.0, 50.0, 50.0, 80.0));
    assert!(engine.drawable_items().is_empty());
    assert!(engine.price_ticks().is_empty());
}

#[test]
fn viewport_shrink_clamps_scroll_offset() {
    let mut engine = engine_with(20, ContentRect::new(0.0, 0.0, 100.0, 100.0));
    engine.scroll_to_oldest();
    assert_eq!(engine.scroll_offset(), 100.0);

    engine.set_viewport(ContentRect::new(0.0, 0.0, 150.0, 100.0));
    assert_eq!(engine.max_scroll_offset(), 50.0);
    assert_eq!(engine.scroll_offset(), 50.0);
    assert_eq!(engine.visible_window().range, Some((0, 14)));
}

#[test]
fn window_tracks_content_offset_from_origin() {
    let engine = engine_with(5, ContentRect::new(100.0, 0.0, 130.0, 90.0));
    let xs: Vec<f64> = engine.drawable_items().iter().map(|i| i.center_x).collect();
    assert_eq!(xs, vec![105.0, 115.0, 125.0]);
}

#[test]
fn loading_new_series_resets_offset_to_newest() {
    let mut engine = engine_with(40, ContentRect::new(0.0, 0.0, 100.0, 100.0));
    engine.on_pan_move(-120.0).expect("pan");
    assert_eq!(engine.scroll_offset(), 120.0);

    engine.load_series(flat_series(30));
    assert_eq!(engine.scroll_offset(), 0.0);
    assert_eq!(engine.visible_window().range, Some((20, 29)));
}
