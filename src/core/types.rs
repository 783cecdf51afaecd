use serde::{Deserialize, Serialize};

/// Pixel rectangle in host coordinates.
///
/// A rect built through `ContentRect::new` is always normalized: every edge
/// is finite and `right >= left`, `bottom >= top`. Degenerate input collapses
/// to a zero-area rect instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ContentRect {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let left = finite_or_zero(left);
        let top = finite_or_zero(top);
        let right = finite_or_zero(right).max(left);
        let bottom = finite_or_zero(bottom).max(top);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
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
    pub fn center_y(self) -> f64 {
        self.top + self.height() / 2.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Shrinks the rect by the given margins, collapsing when they overlap.
    #[must_use]
    pub fn inset(self, margins: AxisMargins) -> Self {
        Self::new(
            self.left + margins.left,
            self.top + margins.top,
            self.right - margins.right,
            self.bottom - margins.bottom,
        )
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Space reserved around the content rect for axis labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMargins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl AxisMargins {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl Default for AxisMargins {
    fn default() -> Self {
        // Bottom margin hosts the date labels, top margin keeps the max price
        // label clear of the chart edge.
        Self::new(10.0, 20.0, 10.0, 20.0)
    }
}

/// Drawable content area of the chart, axis margins already excluded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    content: ContentRect,
}

impl Viewport {
    #[must_use]
    pub fn new(content: ContentRect) -> Self {
        Self { content }
    }

    /// Builds a viewport from the full chart size, restrained by `margins`.
    #[must_use]
    pub fn from_chart_size(width: f64, height: f64, margins: AxisMargins) -> Self {
        Self::new(ContentRect::from_size(width, height).inset(margins))
    }

    pub fn set_content_rect(&mut self, content: ContentRect) {
        self.content = ContentRect::new(content.left, content.top, content.right, content.bottom);
    }

    #[must_use]
    pub fn content_rect(self) -> ContentRect {
        self.content
    }

    #[must_use]
    pub fn content_width(self) -> f64 {
        self.content.width()
    }

    #[must_use]
    pub fn content_height(self) -> f64 {
        self.content.height()
    }

    #[must_use]
    pub fn is_drawable(self) -> bool {
        !self.content.is_empty()
    }
}
