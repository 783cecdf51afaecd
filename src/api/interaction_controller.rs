use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::interaction::{KineticScrollConfig, ScrollState};
use crate::render::Renderer;

use super::ChartEngine;
use super::validation::{validate_finite_input, validate_kinetic_scroll_config};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state()
    }

    /// Horizontal pixel distance from the newest-data anchor.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        self.scroll.max_offset()
    }

    #[must_use]
    pub fn kinetic_scroll_config(&self) -> KineticScrollConfig {
        self.scroll.config()
    }

    pub fn set_kinetic_scroll_config(&mut self, config: KineticScrollConfig) -> ChartResult<()> {
        validate_kinetic_scroll_config(config)?;
        self.config.kinetic_scroll = config;
        self.scroll.set_config(config);
        Ok(())
    }

    /// Begins a drag; an active settle is cancelled.
    pub fn on_pan_start(&mut self) {
        self.scroll.pan_start();
    }

    /// Applies a drag step of `delta_x` screen pixels.
    ///
    /// Negative deltas (content dragged left) reveal older records.
    pub fn on_pan_move(&mut self, delta_x: f64) -> ChartResult<()> {
        let delta_x = validate_finite_input(delta_x, "pan delta")?;
        if self.scroll.pan_move(delta_x) {
            self.refresh_geometry();
        }
        Ok(())
    }

    /// Releases a drag with the pointer velocity in px/s.
    pub fn on_pan_end(&mut self, velocity_px_per_sec: f64) -> ChartResult<()> {
        let velocity = validate_finite_input(velocity_px_per_sec, "pan release velocity")?;
        self.scroll.pan_end(velocity);
        Ok(())
    }

    /// Applies a one-shot fling displacement reported by the gesture recognizer.
    pub fn on_fling(&mut self, distance_x: f64) -> ChartResult<()> {
        let distance_x = validate_finite_input(distance_x, "fling distance")?;
        if self.scroll.fling_by(distance_x) {
            self.refresh_geometry();
        }
        Ok(())
    }

    /// Advances an active settle by `delta_seconds`.
    ///
    /// Returns `true` when the offset moved. Hosts keep ticking while
    /// `scroll_state()` reports `Settling`.
    pub fn step_settle(&mut self, delta_seconds: f64) -> ChartResult<bool> {
        if !delta_seconds.is_finite() || delta_seconds <= 0.0 {
            return Err(ChartError::InvalidData(
                "settle delta seconds must be finite and > 0".to_owned(),
            ));
        }
        let moved = self.scroll.step(delta_seconds);
        if moved {
            self.refresh_geometry();
        }
        Ok(moved)
    }

    /// Stops any drag or settle in place.
    pub fn cancel_scroll(&mut self) {
        self.scroll.cancel();
    }

    /// Jumps back to the newest record.
    pub fn scroll_to_latest(&mut self) {
        if self.scroll.scroll_to(0.0) {
            self.refresh_geometry();
        }
    }

    /// Jumps to the oldest record.
    pub fn scroll_to_oldest(&mut self) {
        if self.scroll.scroll_to(self.scroll.max_offset()) {
            self.refresh_geometry();
        }
    }

    pub fn on_single_tap(&mut self, x: f64, y: f64) {
        trace!(x, y, "single tap ignored");
    }

    pub fn on_double_tap(&mut self, x: f64, y: f64) {
        trace!(x, y, "double tap ignored");
    }

    pub fn on_long_press(&mut self, x: f64, y: f64) {
        trace!(x, y, "long press ignored");
    }
}
