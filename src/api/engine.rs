use crate::core::{ChartGeometry, PriceSeries, PriceTicks, Viewport, VisibleWindow};
use crate::error::ChartResult;
use crate::interaction::ScrollController;
use crate::render::Renderer;

use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series, viewport and scroll offset, feeds them
/// through the windowing and geometry passes whenever one of them changes,
/// and hands the resulting frame to its renderer.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) viewport: Viewport,
    pub(super) series: PriceSeries,
    pub(super) scroll: ScrollController,
    pub(super) window: VisibleWindow,
    pub(super) geometry: ChartGeometry,
    pub(super) price_ticks: PriceTicks,
    pub(super) redraw_requested: bool,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn candle_width_px(&self) -> f64 {
        self.config.candle_width_px
    }

    /// Builds the current frame and passes it to the renderer.
    ///
    /// Consumes any pending redraw request.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
