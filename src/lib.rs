//! Transaction Statistics Library
//! # Overview
//!
//! This library records monetary transactions and computes rolling statistics
//! over the last 60 seconds, served through a small HTTP+JSON API.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Statistics, ServiceError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Windowed statistics components:
//!   - [`core::transaction_store`] - Thread-safe transaction storage and queries
//!   - [`core::summary`] - Count/sum/min/max/average accumulator
//!   - [`core::pruner`] - Optional eviction of expired transactions
//! - [`api`] - HTTP gateway (validation, handlers, server bootstrap)
//!
//! # Endpoints
//!
//! - **POST /transacao**: Record a transaction (`201`, or `422` when invalid)
//! - **DELETE /transacao**: Remove every transaction (`200`)
//! - **GET /estatistica**: Statistics for the last 60 seconds (`200`)
//!
//! # Statistics
//!
//! Each query returns:
//! - `count`: Number of transactions in the window
//! - `sum`: Sum of their amounts
//! - `avg`: `sum / count`, or zero when the window is empty
//! - `min` / `max`: Smallest and largest amount, `+∞` / `-∞` when the window is empty

// Module declarations
pub mod api;
pub mod cli;
pub mod core;
pub mod types;

pub use api::{router, ServerConfig};
pub use crate::core::{StatisticsStore, StatisticsSummary, TransactionStore};
pub use types::{ServiceError, Statistics, Transaction};
