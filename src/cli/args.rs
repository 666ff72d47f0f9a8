use crate::api::ServerConfig;
use clap::Parser;

/// Serve rolling transaction statistics over HTTP
#[derive(Parser, Debug)]
#[command(name = "transaction-statistics")]
#[command(about = "Record transactions and serve statistics for the last 60 seconds", long_about = None)]
pub struct CliArgs {
    /// Address to bind the HTTP server to
    #[arg(
        long = "host",
        value_name = "HOST",
        env = "TX_STATS_HOST",
        default_value = "0.0.0.0",
        help = "Address to bind the HTTP server to"
    )]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(
        long = "port",
        value_name = "PORT",
        env = "TX_STATS_PORT",
        default_value_t = 8080,
        help = "Port to bind the HTTP server to"
    )]
    pub port: u16,

    /// Number of runtime worker threads
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        env = "TX_STATS_WORKER_THREADS",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    /// Seconds between pruning passes over expired transactions
    #[arg(
        long = "prune-interval",
        value_name = "SECONDS",
        env = "TX_STATS_PRUNE_INTERVAL",
        default_value_t = 30,
        help = "Seconds between pruning passes over expired transactions (0 disables pruning)"
    )]
    pub prune_interval: u64,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// Missing values fall back to the defaults of [`ServerConfig`]. Invalid
    /// values are corrected by [`ServerConfig::new`] with a warning.
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(
            self.host.clone(),
            self.port,
            self.worker_threads.unwrap_or(default.worker_threads),
            self.prune_interval,
        )
    }
}
