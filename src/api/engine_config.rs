use serde::{Deserialize, Serialize};

use crate::core::{AxisMargins, CandleProportions};
use crate::error::{ChartError, ChartResult};
use crate::interaction::KineticScrollConfig;
use crate::render::RenderStyle;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Horizontal slot width of one candle in pixels.
    #[serde(default = "default_candle_width_px")]
    pub candle_width_px: f64,
    #[serde(default)]
    pub candle_proportions: CandleProportions,
    #[serde(default)]
    pub axis_margins: AxisMargins,
    #[serde(default)]
    pub kinetic_scroll: KineticScrollConfig,
    #[serde(default = "default_price_label_decimals")]
    pub price_label_decimals: u32,
    /// `chrono` strftime pattern for month-opening date labels.
    #[serde(default = "default_date_label_format")]
    pub date_label_format: String,
    #[serde(default)]
    pub render_style: RenderStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            candle_width_px: default_candle_width_px(),
            candle_proportions: CandleProportions::default(),
            axis_margins: AxisMargins::default(),
            kinetic_scroll: KineticScrollConfig::default(),
            price_label_decimals: default_price_label_decimals(),
            date_label_format: default_date_label_format(),
            render_style: RenderStyle::default(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(candle_width_px: f64) -> Self {
        Self {
            candle_width_px,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_candle_proportions(mut self, proportions: CandleProportions) -> Self {
        self.candle_proportions = proportions;
        self
    }

    #[must_use]
    pub fn with_axis_margins(mut self, margins: AxisMargins) -> Self {
        self.axis_margins = margins;
        self
    }

    #[must_use]
    pub fn with_kinetic_scroll(mut self, config: KineticScrollConfig) -> Self {
        self.kinetic_scroll = config;
        self
    }

    #[must_use]
    pub fn with_price_label_decimals(mut self, decimals: u32) -> Self {
        self.price_label_decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_date_label_format(mut self, format: impl Into<String>) -> Self {
        self.date_label_format = format.into();
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize chart config: {e}")))
    }
}

fn default_candle_width_px() -> f64 {
    10.0
}

fn default_price_label_decimals() -> u32 {
    2
}

fn default_date_label_format() -> String {
    "%Y-%m-%d".to_owned()
}
