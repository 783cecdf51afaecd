pub mod candlestick;
pub mod geometry;
pub mod price_axis;
pub mod primitives;
pub mod series;
pub mod types;
pub mod windowing;

pub use candlestick::{CandleDirection, PriceRecord};
pub use geometry::{
    CandleProportions, CandleRect, ChartGeometry, DrawableItem, PriceRange, build_geometry,
    visible_price_range,
};
pub use price_axis::{PRICE_AXIS_BANDS, PriceTicks, price_ticks};
pub use series::{CanonicalizeStats, PriceSeries};
pub use types::{AxisMargins, ContentRect, Viewport};
pub use windowing::{
    VisibleWindow, candle_center_x, compute_visible_window, max_scroll_offset, total_data_width,
};
