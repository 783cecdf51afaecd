use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PriceRange;
use crate::core::primitives::round_half_up;

/// Number of equal bands the price axis is divided into.
pub const PRICE_AXIS_BANDS: usize = 4;

/// Price labels from top (max) to bottom (min).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceTicks {
    pub values: SmallVec<[f64; PRICE_AXIS_BANDS + 1]>,
}

impl PriceTicks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Resolves `max, max - d, max - 2d, max - 3d, min` with `d = (max - min) / 4`.
///
/// The step comes from the unrounded range and each value is rounded half-up
/// to `decimals` on its own, so labels stay evenly spaced. Arithmetic runs in
/// `Decimal` so midpoints are not lost to binary float error.
#[must_use]
pub fn price_ticks(range: PriceRange, decimals: u32) -> PriceTicks {
    let (Some(max), Some(min)) = (Decimal::from_f64(range.max), Decimal::from_f64(range.min))
    else {
        return float_price_ticks(range, decimals);
    };
    let bands = Decimal::from(PRICE_AXIS_BANDS as u64);
    let step = (max - min) / bands;

    let mut values = SmallVec::new();
    for band in 0..PRICE_AXIS_BANDS {
        values.push(round_decimal(max - step * Decimal::from(band as u64), decimals));
    }
    values.push(round_decimal(min, decimals));
    PriceTicks { values }
}

fn round_decimal(value: Decimal, decimals: u32) -> f64 {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_f64().unwrap_or(f64::NAN)
}

fn float_price_ticks(range: PriceRange, decimals: u32) -> PriceTicks {
    let step = (range.max - range.min) / PRICE_AXIS_BANDS as f64;
    let mut values = SmallVec::new();
    for band in 0..PRICE_AXIS_BANDS {
        values.push(round_half_up(range.max - step * band as f64, decimals));
    }
    values.push(round_half_up(range.min, decimals));
    PriceTicks { values }
}
