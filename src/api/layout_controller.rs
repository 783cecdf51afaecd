use tracing::debug;

use crate::core::{ContentRect, Viewport};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the drawable content rect; axis margins must already be excluded.
    pub fn set_viewport(&mut self, content: ContentRect) {
        self.viewport.set_content_rect(content);
        debug!(
            width = self.viewport.content_width(),
            height = self.viewport.content_height(),
            "set viewport"
        );
        self.sync_scroll_bound();
        self.refresh_geometry();
    }

    /// Derives the content rect from the full chart size and configured margins.
    pub fn set_chart_size(&mut self, width: f64, height: f64) {
        let viewport = Viewport::from_chart_size(width, height, self.config.axis_margins);
        self.set_viewport(viewport.content_rect());
    }
}
