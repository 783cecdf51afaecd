use tracing::{debug, warn};

use crate::core::{PriceRecord, PriceSeries, max_scroll_offset};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the price series and anchors the view at the newest record.
    ///
    /// Records breaking OHLC invariants are dropped, the rest are sorted by
    /// time and repeated timestamps keep the last record. Any gesture in flight is dropped. An empty sequence is
    /// accepted and renders a border-only frame.
    pub fn load_series(&mut self, records: Vec<PriceRecord>) {
        let (series, stats) = PriceSeries::canonical(records);
        if stats.reordered || stats.duplicate_count > 0 || stats.filtered_count > 0 {
            warn!(
                original_count = stats.original_count,
                filtered_count = stats.filtered_count,
                duplicate_count = stats.duplicate_count,
                reordered = stats.reordered,
                canonical_count = series.len(),
                "canonicalized records on load_series"
            );
        }
        debug!(count = series.len(), "load series");

        self.series = series;
        let max_offset = max_scroll_offset(
            self.series.len(),
            self.config.candle_width_px,
            self.viewport.content_width(),
        );
        self.scroll.reset(max_offset);
        self.refresh_geometry();
    }

    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        self.series.records()
    }
}
