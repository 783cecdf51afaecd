use kline_chart::api::{ChartEngine, ChartEngineConfig};
use kline_chart::core::{ContentRect, PriceRecord};
use kline_chart::render::{NullRenderer, RenderStyle, TextHAlign};

// 2020-01-30T00:00:00Z
const JAN_30: f64 = 1_580_342_400.0;
const DAY: f64 = 86_400.0;

fn scenario_engine() -> ChartEngine<NullRenderer> {
    let ohlc = [
        (11.0, 30.0, 1.0, 10.0),
        (10.0, 13.0, 2.0, 12.0),
        (9.0, 10.0, 8.0, 9.0),
        (8.0, 10.0, 7.0, 9.0),
        (9.0, 16.0, 8.0, 15.0),
    ];
    let records = ohlc
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| {
            PriceRecord::new(JAN_30 + i as f64 * DAY, open, high, low, close)
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
fn empty_series_renders_outline_only() {
    let mut engine =
        ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default()).expect("init");
    engine.set_chart_size(300.0, 200.0);
    engine.load_series(Vec::new());

    let frame = engine.build_render_frame();
    frame.validate().expect("valid frame");
    assert_eq!(frame.lines.len(), 4);
    assert!(frame.rects.is_empty());
    assert!(frame.texts.is_empty());
    assert!(frame.price_ticks.is_empty());

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_line_count, 4);
}

#[test]
fn zero_area_viewport_renders_empty_frame() {
    let mut engine = scenario_engine();
    engine.set_viewport(ContentRect::new(0.0, 0.0, 0.0, 0.0));

    let frame = engine.build_render_frame();
    assert!(frame.is_empty());
    engine.render().expect("zero-area frame is still renderable");
}

#[test]
fn frame_carries_candles_grid_and_labels() {
    let engine = scenario_engine();
    let frame = engine.build_render_frame();
    frame.validate().expect("valid frame");

    assert_eq!(frame.items.len(), 3);
    assert_eq!(frame.price_range.max, 16.0);
    assert_eq!(frame.price_range.min, 7.0);
    assert_eq!(frame.price_ticks.as_slice(), &[16.0, 13.75, 11.5, 9.25, 7.0]);

    // wick + body per candle
    assert_eq!(frame.rects.len(), 6);
    // outline, three price grid lines, one month divider
    assert_eq!(frame.lines.len(), 8);

    let labels: Vec<&str> = frame.texts.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        labels,
        vec!["16.00", "13.75", "11.50", "9.25", "7.00", "2020-02-01"]
    );
    let date = &frame.texts[5];
    assert_eq!(date.h_align, TextHAlign::Center);
    assert_eq!(date.x, 5.0);
    assert!(date.y > frame.content.bottom);
}

#[test]
fn candle_colors_follow_direction_style() {
    let mut engine = scenario_engine();
    engine.scroll_to_oldest();
    let style = RenderStyle::default();

    let frame = engine.build_render_frame();
    // oldest visible record closes below its open
    assert_eq!(frame.rects[0].fill_color, style.fall_color);
    assert_eq!(frame.rects[1].fill_color, style.fall_color);
    assert_eq!(frame.rects[2].fill_color, style.rise_color);
}

#[test]
fn price_label_precision_follows_config() {
    let config = ChartEngineConfig::new(10.0).with_price_label_decimals(0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("init");
    engine.set_viewport(ContentRect::new(0.0, 0.0, 30.0, 90.0));
    engine.load_series(vec![
        PriceRecord::new(JAN_30, 10.0, 12.6, 9.4, 11.0).expect("valid record"),
    ]);

    let frame = engine.build_render_frame();
    assert_eq!(frame.price_ticks.as_slice(), &[13.0, 12.0, 11.0, 10.0, 9.0]);
    assert_eq!(frame.texts[0].text, "13");
}

#[test]
fn renderer_receives_frame_counts() {
    let mut engine = scenario_engine();
    engine.render().expect("render");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_item_count, 3);
    assert_eq!(renderer.last_rect_count, 6);
    assert_eq!(renderer.last_line_count, 8);
    assert_eq!(renderer.last_text_count, 6);
}

#[test]
fn partly_visible_candles_are_clipped_to_content() {
    let mut engine = scenario_engine();
    engine.set_viewport(ContentRect::new(10.0, 0.0, 40.0, 90.0));
    engine.on_pan_start();
    engine.on_pan_move(-5.0).expect("pan move");

    let frame = engine.build_render_frame();
    frame.validate().expect("valid frame");
    assert_eq!(frame.items.len(), 4);
    // unclipped bodies would span 6.5 to 43.5
    assert_eq!(frame.items[0].body.left, 6.5);
    assert_eq!(frame.items[3].body.right, 43.5);

    assert_eq!(frame.rects.len(), 8);
    for rect in &frame.rects {
        assert!(rect.x >= frame.content.left);
        assert!(rect.x + rect.width <= frame.content.right + 1e-9);
        assert!(rect.width > 0.0);
    }
    assert_eq!(frame.rects[1].x, 10.0);
    assert_eq!(frame.rects[7].x + frame.rects[7].width, 40.0);
}
