use tracing::trace;

use crate::core::{
    ChartGeometry, DrawableItem, PriceRange, PriceTicks, VisibleWindow, build_geometry,
    compute_visible_window, max_scroll_offset, price_ticks,
};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn visible_window(&self) -> &VisibleWindow {
        &self.window
    }

    #[must_use]
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// Drawable items of the visible records, oldest first.
    #[must_use]
    pub fn drawable_items(&self) -> &[DrawableItem] {
        &self.geometry.items
    }

    /// Max high / min low of the visible records; `0/0` when nothing is visible.
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        self.geometry.price_range
    }

    /// Price axis labels from max to min; empty when nothing is visible.
    #[must_use]
    pub fn price_ticks(&self) -> &PriceTicks {
        &self.price_ticks
    }

    #[must_use]
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub(super) fn sync_scroll_bound(&mut self) {
        let max_offset = max_scroll_offset(
            self.series.len(),
            self.config.candle_width_px,
            self.viewport.content_width(),
        );
        self.scroll.set_max_offset(max_offset);
    }

    /// Recomputes window, geometry and ticks from the current state.
    ///
    /// Cost is bounded by the number of visible candles.
    pub(super) fn refresh_geometry(&mut self) {
        let content = self.viewport.content_rect();
        self.window = compute_visible_window(
            self.series.len(),
            self.config.candle_width_px,
            self.scroll.offset(),
            content.width(),
            content.right,
        );
        self.geometry = build_geometry(
            &self.series,
            &self.window,
            self.config.candle_width_px,
            self.viewport,
            self.config.candle_proportions,
            &self.config.date_label_format,
        );
        self.price_ticks = if self.geometry.is_empty() {
            PriceTicks::default()
        } else {
            price_ticks(self.geometry.price_range, self.config.price_label_decimals)
        };
        self.redraw_requested = true;
        trace!(
            offset = self.scroll.offset(),
            visible = self.geometry.items.len(),
            max_price = self.geometry.price_range.max,
            min_price = self.geometry.price_range.min,
            "geometry refreshed"
        );
    }
}
