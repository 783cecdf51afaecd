use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::PriceRecord;
use crate::core::primitives::calendar_month;

/// Ordered, oldest-first price data owned by the chart.
///
/// Month-opening flags are resolved once when the series is built so the
/// per-frame geometry pass never looks at neighbouring records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
    month_openers: Vec<bool>,
}

/// Counters reported by `PriceSeries::canonical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanonicalizeStats {
    pub original_count: usize,
    pub filtered_count: usize,
    pub duplicate_count: usize,
    pub reordered: bool,
}

impl PriceSeries {
    /// Wraps records that are already sorted by time.
    #[must_use]
    pub fn from_sorted(records: Vec<PriceRecord>) -> Self {
        let month_openers = resolve_month_openers(&records);
        Self {
            records,
            month_openers,
        }
    }

    /// Drops invalid records, sorts by time and keeps the last record for
    /// repeated timestamps.
    #[must_use]
    pub fn canonical(mut records: Vec<PriceRecord>) -> (Self, CanonicalizeStats) {
        let original_count = records.len();
        records.retain(PriceRecord::is_valid);
        let filtered_count = original_count - records.len();
        let reordered = records
            .windows(2)
            .any(|pair| pair[0].time.total_cmp(&pair[1].time) == Ordering::Greater);
        if reordered {
            records.sort_by(|a, b| a.time.total_cmp(&b.time));
        }

        let mut deduped: Vec<PriceRecord> = Vec::with_capacity(records.len());
        let mut duplicate_count = 0_usize;
        for record in records {
            if let Some(last) = deduped.last_mut() {
                if record.time.total_cmp(&last.time) == Ordering::Equal {
                    *last = record;
                    duplicate_count += 1;
                    continue;
                }
            }
            deduped.push(record);
        }

        (
            Self::from_sorted(deduped),
            CanonicalizeStats {
                original_count,
                filtered_count,
                duplicate_count,
                reordered,
            },
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PriceRecord> {
        self.records.get(index)
    }

    /// Whether record `index` is the first trading period of its calendar month.
    #[must_use]
    pub fn opens_month(&self, index: usize) -> bool {
        self.month_openers.get(index).copied().unwrap_or(false)
    }
}

fn resolve_month_openers(records: &[PriceRecord]) -> Vec<bool> {
    let mut previous: Option<(i32, u32)> = None;
    records
        .iter()
        .map(|record| {
            let month = calendar_month(record.time);
            let opens = month.is_some() && month != previous;
            previous = month;
            opens
        })
        .collect()
}
