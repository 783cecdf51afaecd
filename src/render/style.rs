use serde::{Deserialize, Serialize};

use crate::core::CandleDirection;
use crate::render::Color;

/// Caller-supplied visual style; geometry never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub rise_color: Color,
    pub fall_color: Color,
    pub outline_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub outline_width_px: f64,
    pub grid_line_width_px: f64,
    pub font_size_px: f64,
    /// Gap between the content bottom and the date label baseline.
    pub date_label_padding_px: f64,
    /// Inset of price labels from the content edges.
    pub price_label_padding_px: f64,
}

impl RenderStyle {
    #[must_use]
    pub fn candle_color(&self, direction: CandleDirection) -> Color {
        match direction {
            CandleDirection::Rise => self.rise_color,
            CandleDirection::Fall => self.fall_color,
        }
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            rise_color: Color::from_hex(0xfd4331),
            fall_color: Color::from_hex(0x05aa3b),
            outline_color: Color::from_hex(0xcccccc),
            grid_color: Color::from_hex(0xeeeeee),
            text_color: Color::from_hex(0x666666),
            outline_width_px: 1.0,
            grid_line_width_px: 1.0,
            font_size_px: 10.0,
            date_label_padding_px: 5.0,
            price_label_padding_px: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RenderStyle;
    use crate::core::CandleDirection;

    #[test]
    fn direction_selects_style_color() {
        let style = RenderStyle::default();
        assert_eq!(style.candle_color(CandleDirection::Rise), style.rise_color);
        assert_eq!(style.candle_color(CandleDirection::Fall), style.fall_color);
    }
}
