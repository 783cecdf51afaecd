use tracing::debug;

use crate::core::{ChartGeometry, PriceSeries, PriceTicks, Viewport, VisibleWindow};
use crate::error::ChartResult;
use crate::interaction::ScrollController;
use crate::render::Renderer;

use super::validation::validate_engine_config;
use super::{ChartEngine, ChartEngineConfig};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with no data and a zero-area viewport.
    ///
    /// The host is expected to call `set_viewport` or `set_chart_size` once
    /// layout is known, then `load_series`.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_engine_config(&config)?;
        debug!(
            candle_width_px = config.candle_width_px,
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            scroll: ScrollController::new(config.kinetic_scroll),
            config,
            viewport: Viewport::default(),
            series: PriceSeries::default(),
            window: VisibleWindow::empty(),
            geometry: ChartGeometry::default(),
            price_ticks: PriceTicks::default(),
            redraw_requested: true,
        })
    }
}
