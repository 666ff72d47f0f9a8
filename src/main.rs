//! Transaction Statistics Server
//!
//! HTTP service recording transactions and reporting statistics for the last
//! 60 seconds.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --port 3000
//! cargo run -- --host 127.0.0.1 --worker-threads 4 --prune-interval 10
//! RUST_LOG=transaction_statistics=debug cargo run
//! ```
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl-C or SIGTERM)
//! - 1: Error (invalid address, port in use, runtime failure, etc.)

use std::process;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transaction_statistics::{api, cli};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transaction_statistics=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = cli::parse_args();
    let config = args.to_server_config();

    info!(
        "Starting transaction statistics server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.address()
    );

    if let Err(e) = api::run(config) {
        error!("Server error: {}", e);
        process::exit(1);
    }
}
