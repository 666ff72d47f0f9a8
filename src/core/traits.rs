//! Core trait for windowed transaction storage
//!
//! The HTTP layer only talks to the store through [`StatisticsStore`], so the
//! list-backed [`TransactionStore`](crate::core::TransactionStore) can later be
//! swapped for a time-bucketed index without touching the handlers.

use crate::types::{Statistics, Transaction};
use chrono::{DateTime, Utc};

/// Trait for storing transactions and summarising the trailing window
///
/// All methods take `&self` and must be safe to call concurrently from any
/// number of threads without external synchronization.
pub trait StatisticsStore: Send + Sync {
    /// Record a transaction
    fn add(&self, transaction: Transaction);

    /// Remove every transaction atomically
    fn clear(&self);

    /// Summarise the transactions whose timestamp is within the window ending at `now`
    fn statistics(&self, now: DateTime<Utc>) -> Statistics;

    /// Drop transactions with `timestamp <= cutoff`, returning how many were removed
    fn prune(&self, cutoff: DateTime<Utc>) -> usize;

    /// Number of transactions held, including ones outside the window
    fn len(&self) -> usize;

    /// Whether the store holds no transactions at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
