use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CandleDirection, ContentRect, PriceSeries, Viewport, VisibleWindow};

/// Axis-aligned pixel rectangle produced for one candle part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl CandleRect {
    #[must_use]
    pub fn centered(center_x: f64, width: f64, y1: f64, y2: f64) -> Self {
        let half = width / 2.0;
        Self {
            left: center_x - half,
            top: y1.min(y2),
            right: center_x + half,
            bottom: y1.max(y2),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Render-ready geometry for one visible record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawableItem {
    /// Index of the source record in the loaded series.
    pub index: usize,
    pub center_x: f64,
    pub body: CandleRect,
    pub wick: CandleRect,
    pub direction: CandleDirection,
    /// Set only for the first trading period of a calendar month.
    pub date_label: Option<String>,
}

/// Price extent of the visible records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub max: f64,
    pub min: f64,
}

impl PriceRange {
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.max == self.min
    }

    /// Linear price-to-pixel mapping; a flat range maps to the vertical center.
    #[must_use]
    pub fn price_to_pixel(self, price: f64, content: ContentRect) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return content.center_y();
        }
        content.top + (self.max - price) / span * content.height()
    }
}

/// Relative candle part widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleProportions {
    /// Body width as a fraction of the candle slot.
    pub body_width_ratio: f64,
    /// Wick width as a fraction of the candle slot.
    pub wick_width_ratio: f64,
}

impl Default for CandleProportions {
    fn default() -> Self {
        Self {
            body_width_ratio: 0.7,
            wick_width_ratio: 0.1,
        }
    }
}

/// Output of one geometry pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub items: Vec<DrawableItem>,
    pub price_range: PriceRange,
}

impl ChartGeometry {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Max high / min low over the records covered by `window`.
#[must_use]
pub fn visible_price_range(series: &PriceSeries, window: &VisibleWindow) -> Option<PriceRange> {
    let (start, end) = window.range?;
    let visible = series.records().get(start..=end)?;
    let mut iter = visible.iter();
    let first = iter.next()?;
    let init = PriceRange {
        max: first.high,
        min: first.low,
    };
    Some(iter.fold(init, |range, record| PriceRange {
        max: range.max.max(record.high),
        min: range.min.min(record.low),
    }))
}

/// Builds drawable items for every record in `window`, oldest first.
///
/// The pass is total: an empty window, a zero-area viewport or a flat price
/// range all produce a valid (possibly empty) result.
#[must_use]
pub fn build_geometry(
    series: &PriceSeries,
    window: &VisibleWindow,
    candle_width: f64,
    viewport: Viewport,
    proportions: CandleProportions,
    date_format: &str,
) -> ChartGeometry {
    if !viewport.is_drawable() {
        return ChartGeometry::default();
    }
    let Some(price_range) = visible_price_range(series, window) else {
        return ChartGeometry::default();
    };

    let content = viewport.content_rect();
    let body_width = candle_width * proportions.body_width_ratio;
    let wick_width = candle_width * proportions.wick_width_ratio;

    let project = |(index, center_x): (usize, f64)| -> Option<DrawableItem> {
        let record = series.get(index)?;
        let open_y = price_range.price_to_pixel(record.open, content);
        let close_y = price_range.price_to_pixel(record.close, content);
        let high_y = price_range.price_to_pixel(record.high, content);
        let low_y = price_range.price_to_pixel(record.low, content);
        let date_label = if series.opens_month(index) {
            format_date_label(record.time, date_format)
        } else {
            None
        };
        Some(DrawableItem {
            index,
            center_x,
            body: CandleRect::centered(center_x, body_width, open_y, close_y),
            wick: CandleRect::centered(center_x, wick_width, high_y, low_y),
            direction: record.direction(),
            date_label,
        })
    };

    #[cfg(feature = "parallel-projection")]
    let items: Vec<DrawableItem> = {
        let slots: Vec<(usize, f64)> = window.iter().collect();
        slots.into_par_iter().filter_map(project).collect()
    };

    #[cfg(not(feature = "parallel-projection"))]
    let items: Vec<DrawableItem> = window.iter().filter_map(project).collect();

    ChartGeometry { items, price_range }
}

fn format_date_label(time: f64, date_format: &str) -> Option<String> {
    let datetime = crate::core::primitives::unix_seconds_to_datetime(time)?;
    let mut label = String::new();
    write!(label, "{}", datetime.format(date_format)).ok()?;
    if label.is_empty() { None } else { Some(label) }
}
