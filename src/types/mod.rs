//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The transaction record and the statistics window
//! - `statistics`: The statistics result returned by the store
//! - `error`: Error types for the service

pub mod error;
pub mod statistics;
pub mod transaction;

pub use error::ServiceError;
pub use statistics::Statistics;
pub use transaction::{window, Transaction, WINDOW_SECONDS};
