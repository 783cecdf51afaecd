use serde::{Deserialize, Serialize};

use crate::core::{ContentRect, DrawableItem, PriceRange, PriceTicks};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ScrollState;
use crate::render::Renderer;

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub content: ContentRect,
    pub record_count: usize,
    pub scroll_offset: f64,
    pub max_scroll_offset: f64,
    pub scroll_state: ScrollState,
    pub visible_range: Option<(usize, usize)>,
    pub price_range: PriceRange,
    pub price_ticks: PriceTicks,
    pub items: Vec<DrawableItem>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            content: self.viewport.content_rect(),
            record_count: self.series.len(),
            scroll_offset: self.scroll.offset(),
            max_scroll_offset: self.scroll.max_offset(),
            scroll_state: self.scroll.state(),
            visible_range: self.window.range,
            price_range: self.geometry.price_range,
            price_ticks: self.price_ticks.clone(),
            items: self.geometry.items.clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}

impl EngineSnapshot {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot json: {e}")))
    }
}
