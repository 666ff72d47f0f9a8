//! Running numeric summary over transaction amounts
//!
//! `StatisticsSummary` folds amounts one at a time and produces a
//! [`Statistics`] value. It starts with `min = +∞` and `max = -∞` so that an
//! empty summary reports those sentinels instead of zero.
//!
//! # Summation
//!
//! The sum is accumulated with Kahan compensation, so long runs of small
//! amounts added to a large running total do not drift. A plain running sum
//! is kept alongside to recover the infinite result when the compensated sum
//! degenerates to NaN after an overflow.

use crate::types::Statistics;

/// Accumulator for count, sum, min, max and average of `f64` values
#[derive(Debug, Clone, Copy)]
pub struct StatisticsSummary {
    count: u64,
    sum: f64,
    compensation: f64,
    simple_sum: f64,
    min: f64,
    max: f64,
}

impl StatisticsSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        StatisticsSummary {
            count: 0,
            sum: 0.0,
            compensation: 0.0,
            simple_sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Record another value
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.simple_sum += value;
        self.add_compensated(value);
        self.min = nan_aware(self.min, value, f64::min);
        self.max = nan_aware(self.max, value, f64::max);
    }

    fn add_compensated(&mut self, value: f64) {
        let adjusted = value - self.compensation;
        let next = self.sum + adjusted;
        self.compensation = (next - self.sum) - adjusted;
        self.sum = next;
    }

    /// Number of values recorded
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all recorded values, zero when empty
    pub fn sum(&self) -> f64 {
        let sum = self.sum - self.compensation;
        if sum.is_nan() && self.simple_sum.is_infinite() {
            self.simple_sum
        } else {
            sum
        }
    }

    /// Arithmetic mean, zero when empty
    pub fn average(&self) -> f64 {
        if self.count > 0 {
            self.sum() / self.count as f64
        } else {
            0.0
        }
    }

    /// Smallest recorded value, `+∞` when empty
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest recorded value, `-∞` when empty
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Freeze the summary into a [`Statistics`] value
    pub fn into_statistics(self) -> Statistics {
        Statistics {
            count: self.count(),
            sum: self.sum(),
            average: self.average(),
            min: self.min(),
            max: self.max(),
        }
    }
}

impl Default for StatisticsSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for StatisticsSummary {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.accept(value);
        }
    }
}

impl FromIterator<f64> for StatisticsSummary {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}

/// `f64::min`/`f64::max` ignore NaN; once seen, NaN sticks instead
fn nan_aware(current: f64, value: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if current.is_nan() || value.is_nan() {
        f64::NAN
    } else {
        pick(current, value)
    }
}
