use chrono::format::{Item, StrftimeItems};

use crate::core::CandleProportions;
use crate::error::{ChartError, ChartResult};
use crate::interaction::KineticScrollConfig;
use crate::render::RenderStyle;

use super::ChartEngineConfig;

/// Highest precision `rust_decimal` can round to.
const MAX_PRICE_LABEL_DECIMALS: u32 = 28;

pub(super) fn validate_engine_config(config: &ChartEngineConfig) -> ChartResult<()> {
    validate_candle_width(config.candle_width_px)?;
    validate_candle_proportions(config.candle_proportions)?;
    validate_kinetic_scroll_config(config.kinetic_scroll)?;
    validate_render_style(config.render_style)?;
    validate_date_label_format(&config.date_label_format)?;

    let margins = config.axis_margins;
    for (name, value) in [
        ("left", margins.left),
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "axis margin `{name}` must be finite and >= 0"
            )));
        }
    }

    if config.price_label_decimals > MAX_PRICE_LABEL_DECIMALS {
        return Err(ChartError::InvalidData(format!(
            "price label decimals must be <= {MAX_PRICE_LABEL_DECIMALS}"
        )));
    }
    Ok(())
}

fn validate_candle_width(candle_width_px: f64) -> ChartResult<()> {
    if !candle_width_px.is_finite() || candle_width_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "candle width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_candle_proportions(proportions: CandleProportions) -> ChartResult<()> {
    for (name, ratio) in [
        ("body_width_ratio", proportions.body_width_ratio),
        ("wick_width_ratio", proportions.wick_width_ratio),
    ] {
        if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
            return Err(ChartError::InvalidData(format!(
                "candle {name} must be finite and in (0, 1]"
            )));
        }
    }
    if proportions.wick_width_ratio > proportions.body_width_ratio {
        return Err(ChartError::InvalidData(
            "candle wick must not be wider than its body".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_kinetic_scroll_config(config: KineticScrollConfig) -> ChartResult<()> {
    if !config.decay_per_second.is_finite()
        || config.decay_per_second <= 0.0
        || config.decay_per_second >= 1.0
    {
        return Err(ChartError::InvalidData(
            "kinetic scroll decay_per_second must be finite and in (0, 1)".to_owned(),
        ));
    }
    if !config.stop_velocity_abs.is_finite() || config.stop_velocity_abs <= 0.0 {
        return Err(ChartError::InvalidData(
            "kinetic scroll stop_velocity_abs must be finite and > 0".to_owned(),
        ));
    }
    if !config.fling_threshold_px_per_sec.is_finite() || config.fling_threshold_px_per_sec < 0.0 {
        return Err(ChartError::InvalidData(
            "kinetic scroll fling_threshold_px_per_sec must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for color in [
        style.rise_color,
        style.fall_color,
        style.outline_color,
        style.grid_color,
        style.text_color,
    ] {
        color.validate()?;
    }
    for (name, value) in [
        ("outline_width_px", style.outline_width_px),
        ("grid_line_width_px", style.grid_line_width_px),
        ("font_size_px", style.font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }
    for (name, value) in [
        ("date_label_padding_px", style.date_label_padding_px),
        ("price_label_padding_px", style.price_label_padding_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "render style `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

fn validate_date_label_format(format: &str) -> ChartResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "date label format `{format}` is not a valid strftime pattern"
        )));
    }
    Ok(())
}

pub(super) fn validate_finite_input(value: f64, name: &str) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!("{name} must be finite")));
    }
    Ok(value)
}
