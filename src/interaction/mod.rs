use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Scroll gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollState {
    Idle,
    Dragging,
    /// Post-release deceleration with the remaining signed velocity in px/s.
    Settling { velocity_px_per_sec: f64 },
}

impl ScrollState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    #[must_use]
    pub fn is_settling(self) -> bool {
        matches!(self, Self::Settling { .. })
    }
}

/// Tuning for fling deceleration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KineticScrollConfig {
    /// Release velocity (abs, px/s) above which a drag turns into a fling.
    pub fling_threshold_px_per_sec: f64,
    /// Multiplicative velocity decay per second, in `(0, 1)`.
    pub decay_per_second: f64,
    /// Settling stops when `abs(velocity)` drops below this threshold.
    pub stop_velocity_abs: f64,
}

impl Default for KineticScrollConfig {
    fn default() -> Self {
        Self {
            fling_threshold_px_per_sec: 50.0,
            decay_per_second: 0.02,
            stop_velocity_abs: 5.0,
        }
    }
}

/// Clamps a scroll offset into `[0, max_offset]`.
///
/// Non-finite offsets collapse to the newest-data anchor.
#[must_use]
pub fn clamp_offset(offset: f64, max_offset: f64) -> f64 {
    let max_offset = if max_offset.is_finite() {
        max_offset.max(0.0)
    } else {
        0.0
    };
    if !offset.is_finite() {
        return 0.0;
    }
    offset.clamp(0.0, max_offset)
}

/// Converts pan/fling input into a bounded horizontal scroll offset.
///
/// Screen deltas follow the pointer: a negative `delta_x` (content dragged
/// left) increases the offset and reveals older records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollController {
    state: ScrollState,
    offset: f64,
    max_offset: f64,
    config: KineticScrollConfig,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(KineticScrollConfig::default())
    }
}

impl ScrollController {
    #[must_use]
    pub fn new(config: KineticScrollConfig) -> Self {
        Self {
            state: ScrollState::Idle,
            offset: 0.0,
            max_offset: 0.0,
            config,
        }
    }

    #[must_use]
    pub fn state(&self) -> ScrollState {
        self.state
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    #[must_use]
    pub fn config(&self) -> KineticScrollConfig {
        self.config
    }

    pub fn set_config(&mut self, config: KineticScrollConfig) {
        self.config = config;
    }

    /// Updates the scroll bound after a layout or data change.
    ///
    /// Returns `true` when the current offset had to be pulled back in range.
    pub fn set_max_offset(&mut self, max_offset: f64) -> bool {
        self.max_offset = clamp_offset(max_offset, f64::MAX);
        self.apply_offset(self.offset)
    }

    /// Anchors at the newest data with a fresh bound, dropping any gesture.
    pub fn reset(&mut self, max_offset: f64) {
        self.transition(ScrollState::Idle);
        self.max_offset = clamp_offset(max_offset, f64::MAX);
        self.offset = 0.0;
    }

    pub fn pan_start(&mut self) {
        self.transition(ScrollState::Dragging);
    }

    /// Applies a drag delta; a move outside a drag starts one.
    ///
    /// Returns `true` when the offset changed.
    pub fn pan_move(&mut self, delta_x: f64) -> bool {
        if self.state != ScrollState::Dragging {
            self.transition(ScrollState::Dragging);
        }
        self.apply_offset(self.offset - delta_x)
    }

    /// Ends a drag, settling when the release velocity exceeds the fling threshold.
    pub fn pan_end(&mut self, velocity_px_per_sec: f64) {
        if self.state != ScrollState::Dragging {
            return;
        }
        if velocity_px_per_sec.abs() > self.config.fling_threshold_px_per_sec {
            self.transition(ScrollState::Settling {
                velocity_px_per_sec,
            });
        } else {
            self.transition(ScrollState::Idle);
        }
    }

    /// Applies a one-shot fling displacement without touching the gesture phase.
    pub fn fling_by(&mut self, distance_x: f64) -> bool {
        self.apply_offset(self.offset - distance_x)
    }

    /// Advances settling by `delta_seconds`.
    ///
    /// Returns `true` when the offset moved. Settling ends once the velocity
    /// decays below `stop_velocity_abs` or the offset reaches either bound.
    pub fn step(&mut self, delta_seconds: f64) -> bool {
        let ScrollState::Settling {
            velocity_px_per_sec,
        } = self.state
        else {
            return false;
        };

        let displacement = velocity_px_per_sec * delta_seconds;
        let target = self.offset - displacement;
        let moved = self.apply_offset(target);
        let hit_bound = (displacement > 0.0 && self.offset <= 0.0)
            || (displacement < 0.0 && self.offset >= self.max_offset);

        let velocity = velocity_px_per_sec * self.config.decay_per_second.powf(delta_seconds);
        trace!(
            offset = self.offset,
            velocity,
            hit_bound,
            "settle step"
        );

        if hit_bound {
            debug!(offset = self.offset, "fling absorbed at scroll bound");
            self.transition(ScrollState::Idle);
        } else if velocity.abs() < self.config.stop_velocity_abs {
            self.transition(ScrollState::Idle);
        } else {
            self.state = ScrollState::Settling {
                velocity_px_per_sec: velocity,
            };
        }
        moved
    }

    /// Stops any gesture in place, discarding pending velocity.
    pub fn cancel(&mut self) {
        self.transition(ScrollState::Idle);
    }

    /// Jumps to `offset` (clamped) and ends any gesture.
    pub fn scroll_to(&mut self, offset: f64) -> bool {
        self.transition(ScrollState::Idle);
        self.apply_offset(offset)
    }

    fn apply_offset(&mut self, offset: f64) -> bool {
        let clamped = clamp_offset(offset, self.max_offset);
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    fn transition(&mut self, next: ScrollState) {
        if std::mem::discriminant(&self.state) != std::mem::discriminant(&next) {
            debug!(from = ?self.state, to = ?next, "scroll state transition");
        }
        self.state = next;
    }
}
