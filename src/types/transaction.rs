//! Transaction-related types for the transaction statistics service
//!
//! This module defines the immutable transaction record held by the store and
//! the fixed window that statistics are computed over.

use chrono::{DateTime, TimeDelta, Utc};

/// Length of the trailing statistics window, in seconds
pub const WINDOW_SECONDS: i64 = 60;

/// Trailing window used to filter transactions at query time
pub fn window() -> TimeDelta {
    TimeDelta::seconds(WINDOW_SECONDS)
}

/// Recorded monetary transaction
///
/// Created by the gateway from a validated request and never mutated
/// afterwards. The store accepts whatever it is given; sanitising the
/// amount and timestamp is the gateway's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transaction {
    /// Transaction amount
    pub amount: f64,

    /// Instant the transaction happened, normalised to UTC
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction record
    pub fn new(amount: f64, timestamp: DateTime<Utc>) -> Self {
        Transaction { amount, timestamp }
    }

    /// Whether this transaction falls inside the window ending at `now`
    ///
    /// The lower bound is exclusive: a transaction exactly one window old is
    /// outside. When the window start is earlier than the earliest
    /// representable instant, every transaction is inside.
    pub fn is_within_window(&self, now: DateTime<Utc>) -> bool {
        match now.checked_sub_signed(window()) {
            Some(start) => self.timestamp > start,
            None => true,
        }
    }
}
