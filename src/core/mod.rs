//! Core business logic module
//!
//! This module contains the windowed statistics components:
//! - `traits` - Trait abstraction for interchangeable store implementations
//! - `transaction_store` - Thread-safe transaction storage and statistics query
//! - `summary` - Running count/sum/min/max/average accumulator
//! - `pruner` - Optional background eviction of expired transactions

pub mod pruner;
pub mod summary;
pub mod traits;
pub mod transaction_store;

pub use pruner::{prune_expired, spawn_pruner};
pub use summary::StatisticsSummary;
pub use traits::StatisticsStore;
pub use transaction_store::TransactionStore;
