//! Background pruning of expired transactions
//!
//! The store never needs pruning for correctness; this only bounds memory.
//! A record is pruned once it is older than the window plus a grace period,
//! so a query whose reference instant was taken just before a pruning pass
//! still sees every record it would have seen without one.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::traits::StatisticsStore;
use crate::types::window;

/// Remove transactions older than `now - window - grace`
///
/// # Returns
///
/// The number of transactions removed. Nothing is removed when the cutoff
/// falls outside the representable date range.
pub fn prune_expired(store: &dyn StatisticsStore, now: DateTime<Utc>, grace: TimeDelta) -> usize {
    let cutoff = window()
        .checked_add(&grace)
        .and_then(|age| now.checked_sub_signed(age));

    match cutoff {
        Some(cutoff) => store.prune(cutoff),
        None => 0,
    }
}

/// Spawn a tokio task that prunes the store every `interval`
///
/// The interval doubles as the grace period. The task runs until it is
/// aborted or the runtime shuts down.
pub fn spawn_pruner(store: Arc<dyn StatisticsStore>, interval: Duration) -> JoinHandle<()> {
    let grace = TimeDelta::from_std(interval).unwrap_or_else(|_| TimeDelta::weeks(52));
    info!(interval_secs = interval.as_secs_f64(), "Starting transaction pruner");

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let removed = prune_expired(store.as_ref(), Utc::now(), grace);
            if removed > 0 {
                debug!(removed, remaining = store.len(), "Pruned expired transactions");
            }
        }
    })
}
