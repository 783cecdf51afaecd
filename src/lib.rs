//! kline-chart: scrollable candlestick chart geometry.
//!
//! The crate maps an ordered OHLC series onto pixel geometry inside a
//! viewport and keeps that mapping in sync with pan/fling gestures. Drawing
//! itself is delegated to a `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
