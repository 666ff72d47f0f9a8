//! HTTP server bootstrap
//!
//! # Architecture
//!
//! ```text
//! run(ServerConfig)
//!     └── tokio multi-threaded runtime (worker_threads)
//!         ├── Arc<TransactionStore>   (single process-wide instance)
//!         ├── pruner task             (optional, prune_interval)
//!         └── axum Router
//!             ├── POST   /transacao   -> create_transaction
//!             ├── DELETE /transacao   -> clear_transactions
//!             └── GET    /estatistica -> get_statistics
//! ```

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{clear_transactions, create_transaction, get_statistics, AppState};
use crate::core::{spawn_pruner, StatisticsStore, TransactionStore};
use crate::types::ServiceError;

/// Server configuration
///
/// Controls the bind address, the size of the runtime and how often expired
/// transactions are pruned.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Host or IP to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Number of tokio worker threads
    pub worker_threads: usize,
    /// Time between pruning passes, `None` disables pruning
    pub prune_interval: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            worker_threads: num_cpus::get(),
            prune_interval: Some(Duration::from_secs(30)),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig, falling back to defaults for zero values
    ///
    /// A zero worker count is replaced by the default with a warning. A zero
    /// prune interval disables pruning.
    pub fn new(host: String, port: u16, worker_threads: usize, prune_interval_secs: u64) -> Self {
        let default = Self::default();

        let worker_threads = if worker_threads == 0 {
            warn!(
                "Invalid worker_threads ({}), using default ({})",
                worker_threads, default.worker_threads
            );
            default.worker_threads
        } else {
            worker_threads
        };

        let prune_interval = if prune_interval_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(prune_interval_secs))
        };

        Self {
            host,
            port,
            worker_threads,
            prune_interval,
        }
    }

    /// `host:port` for display, with IPv6 hosts in brackets
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Parse the configured host as an IP literal and pair it with the port
    ///
    /// IPv6 hosts may be given with or without brackets.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServiceError> {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        host.parse::<IpAddr>()
            .map(|ip| SocketAddr::new(ip, self.port))
            .map_err(|_| ServiceError::InvalidAddress {
                address: self.address(),
            })
    }
}

/// Build the router for the given store
pub fn router(store: Arc<dyn StatisticsStore>) -> Router {
    Router::new()
        .route(
            "/transacao",
            post(create_transaction).delete(clear_transactions),
        )
        .route("/estatistica", get(get_statistics))
        .with_state(AppState::new(store))
        .layer(TraceLayer::new_for_http())
}

/// Create the runtime and serve until a shutdown signal arrives
///
/// # Returns
///
/// * `Ok(())` after a graceful shutdown
/// * `Err(ServiceError)` if the runtime, address or listener could not be set up
pub fn run(config: ServerConfig) -> Result<(), ServiceError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.worker_threads)
        .enable_all()
        .build()
        .map_err(|e| ServiceError::Runtime {
            message: e.to_string(),
        })?;

    runtime.block_on(serve(config))
}

/// Bind the listener and serve on the current runtime
pub async fn serve(config: ServerConfig) -> Result<(), ServiceError> {
    let addr = config.socket_addr()?;

    // Created once here and shared by every handler
    let store: Arc<dyn StatisticsStore> = Arc::new(TransactionStore::new());

    let pruner = config
        .prune_interval
        .map(|interval| spawn_pruner(Arc::clone(&store), interval));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServiceError::bind(&config.address(), &e))?;

    info!(
        "Listening on {} with {} worker threads",
        listener.local_addr()?,
        config.worker_threads
    );

    let result = axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Some(pruner) = pruner {
        pruner.abort();
    }

    result?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
