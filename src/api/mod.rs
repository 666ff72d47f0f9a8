//! HTTP gateway module
//!
//! Fronts the transaction store with a small JSON API.
//!
//! # Components
//!
//! - `dto` - Request/response bodies, validation and wire formatting
//! - `handlers` - axum handlers and shared state
//! - `server` - Router construction, runtime and listener setup

pub mod dto;
pub mod handlers;
pub mod server;

pub use dto::{convert_request, StatisticsResponse, TransactionRequest};
pub use handlers::AppState;
pub use server::{router, run, serve, ServerConfig};
