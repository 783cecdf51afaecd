use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, unix_seconds_to_datetime};
use crate::error::{ChartError, ChartResult};

/// One trading period's price summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Period start as unix seconds (UTC).
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceRecord {
    /// Builds a validated record from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite and `time` is a representable UTC instant
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        if unix_seconds_to_datetime(time).is_none() {
            return Err(ChartError::InvalidData(
                "record time must be a representable unix timestamp".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "ohlc low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "ohlc open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
        })
    }

    /// Converts strongly-typed temporal/decimal input into a validated record.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Whether the record still satisfies the invariants `new` enforces.
    ///
    /// Records built through struct literals or deserialization skip `new`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && unix_seconds_to_datetime(self.time).is_some()
            && self.low <= self.high
            && (self.low..=self.high).contains(&self.open)
            && (self.low..=self.high).contains(&self.close)
    }

    #[must_use]
    pub fn direction(self) -> CandleDirection {
        CandleDirection::of(self.open, self.close)
    }

    #[must_use]
    pub fn datetime(self) -> Option<DateTime<Utc>> {
        unix_seconds_to_datetime(self.time)
    }
}

/// Price movement within one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleDirection {
    Rise,
    Fall,
}

impl CandleDirection {
    /// `close < open` is a fall; an unchanged close counts as a rise.
    #[must_use]
    pub fn of(open: f64, close: f64) -> Self {
        if close < open { Self::Fall } else { Self::Rise }
    }

    #[must_use]
    pub fn is_fall(self) -> bool {
        self == Self::Fall
    }
}
