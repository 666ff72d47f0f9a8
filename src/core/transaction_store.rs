//! Thread-safe transaction storage with windowed statistics
//!
//! This module provides the `TransactionStore` struct, the single process-wide
//! collection of recorded transactions.
//!
//! # Design
//!
//! Transactions live in one `Vec` behind a `parking_lot::RwLock`. Appends,
//! clears and prunes take the write lock; statistics queries take the read lock
//! and fold the matching records in a single pass. Because a clear swaps the
//! whole vector out under the write lock, a concurrent query sees either every
//! record or none of them.
//!
//! # Eviction
//!
//! Records that fall out of the window are not removed by queries. They are
//! simply skipped, and the optional pruner (see [`crate::core::pruner`]) may
//! drop them later to bound memory.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::summary::StatisticsSummary;
use super::traits::StatisticsStore;
use crate::types::{Statistics, Transaction};

/// Thread-safe store of recorded transactions
///
/// Share it between request handlers behind an `Arc`. All methods take
/// `&self`.
#[derive(Debug, Default)]
pub struct TransactionStore {
    /// Every transaction recorded since the last clear, in arrival order
    transactions: RwLock<Vec<Transaction>>,
}

impl TransactionStore {
    /// Create a new empty transaction store
    pub fn new() -> Self {
        TransactionStore {
            transactions: RwLock::new(Vec::new()),
        }
    }

    /// Append a transaction
    ///
    /// No validation is performed. Negative or zero amounts are aggregated
    /// like any other value.
    pub fn add(&self, transaction: Transaction) {
        self.transactions.write().push(transaction);
    }

    /// Remove every transaction
    ///
    /// The old vector is swapped out under the write lock and dropped after
    /// the lock is released.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.transactions.write());
        drop(removed);
    }

    /// Summarise transactions with `timestamp > now - 60s`
    ///
    /// # Returns
    ///
    /// A [`Statistics`] value. With no matching transaction, `count`, `sum`
    /// and `average` are zero, `min` is `+∞` and `max` is `-∞`.
    pub fn statistics(&self, now: DateTime<Utc>) -> Statistics {
        let transactions = self.transactions.read();
        transactions
            .iter()
            .filter(|tx| tx.is_within_window(now))
            .map(|tx| tx.amount)
            .collect::<StatisticsSummary>()
            .into_statistics()
    }

    /// Drop every transaction with `timestamp <= cutoff`
    ///
    /// # Returns
    ///
    /// The number of transactions removed
    pub fn prune(&self, cutoff: DateTime<Utc>) -> usize {
        let mut transactions = self.transactions.write();
        let before = transactions.len();
        transactions.retain(|tx| tx.timestamp > cutoff);
        before - transactions.len()
    }

    /// Number of transactions held, including ones outside the window
    pub fn len(&self) -> usize {
        self.transactions.read().len()
    }

    /// Whether the store holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.read().is_empty()
    }
}

impl StatisticsStore for TransactionStore {
    fn add(&self, transaction: Transaction) {
        TransactionStore::add(self, transaction)
    }

    fn clear(&self) {
        TransactionStore::clear(self)
    }

    fn statistics(&self, now: DateTime<Utc>) -> Statistics {
        TransactionStore::statistics(self, now)
    }

    fn prune(&self, cutoff: DateTime<Utc>) -> usize {
        TransactionStore::prune(self, cutoff)
    }

    fn len(&self) -> usize {
        TransactionStore::len(self)
    }

    fn is_empty(&self) -> bool {
        TransactionStore::is_empty(self)
    }
}
