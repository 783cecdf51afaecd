use serde::{Deserialize, Serialize};

/// Contiguous range of series indices mapped onto the viewport.
///
/// Candle slots are laid out right-to-left from the newest record, which
/// sits against `anchor_x` when the scroll offset is zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisibleWindow {
    /// Inclusive `(start, end)` indices, `None` when nothing is visible.
    pub range: Option<(usize, usize)>,
    /// Horizontal pixel center of each visible record, oldest first.
    pub center_xs: Vec<f64>,
}

impl VisibleWindow {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.center_xs.len()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.range
            .is_some_and(|(start, end)| index >= start && index <= end)
    }

    /// `(series index, center x)` pairs in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        let start = self.range.map_or(0, |(start, _)| start);
        self.center_xs
            .iter()
            .enumerate()
            .map(move |(offset, &x)| (start + offset, x))
    }
}

/// Total pixel width occupied by `series_len` candle slots.
#[must_use]
pub fn total_data_width(series_len: usize, candle_width: f64) -> f64 {
    series_len as f64 * candle_width
}

/// Largest scroll offset that still keeps data on screen.
#[must_use]
pub fn max_scroll_offset(series_len: usize, candle_width: f64, viewport_width: f64) -> f64 {
    let overflow = total_data_width(series_len, candle_width) - viewport_width;
    if overflow.is_finite() && overflow > 0.0 {
        overflow
    } else {
        0.0
    }
}

/// Resolves which records intersect the viewport and where their centers land.
///
/// A slot is visible when any part of it overlaps the open interval
/// `(anchor_x - viewport_width, anchor_x)`. Non-positive widths and an empty
/// series yield an empty window.
#[must_use]
pub fn compute_visible_window(
    series_len: usize,
    candle_width: f64,
    scroll_offset: f64,
    viewport_width: f64,
    anchor_x: f64,
) -> VisibleWindow {
    if series_len == 0
        || !candle_width.is_finite()
        || candle_width <= 0.0
        || !viewport_width.is_finite()
        || viewport_width <= 0.0
        || !scroll_offset.is_finite()
        || scroll_offset < 0.0
    {
        return VisibleWindow::empty();
    }

    let last = series_len - 1;
    let hidden_right = (scroll_offset / candle_width).floor();
    if hidden_right >= series_len as f64 {
        return VisibleWindow::empty();
    }
    let end = last - hidden_right as usize;

    let reach = ((scroll_offset + viewport_width) / candle_width).ceil();
    let start = if reach >= series_len as f64 {
        0
    } else {
        series_len - reach as usize
    };

    if start > end {
        return VisibleWindow::empty();
    }

    let center_xs = (start..=end)
        .map(|index| candle_center_x(index, series_len, candle_width, scroll_offset, anchor_x))
        .collect();

    VisibleWindow {
        range: Some((start, end)),
        center_xs,
    }
}

/// Center of record `index`'s slot for the given scroll offset.
///
/// A positive offset pushes slots to the right, past the anchor, which
/// brings older records into view from the left.
#[must_use]
pub fn candle_center_x(
    index: usize,
    series_len: usize,
    candle_width: f64,
    scroll_offset: f64,
    anchor_x: f64,
) -> f64 {
    let slots_from_newest = series_len.saturating_sub(1).saturating_sub(index) as f64;
    anchor_x + scroll_offset - candle_width * slots_from_newest - candle_width / 2.0
}
