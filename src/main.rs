//! Mock Service - CLI entry point.
//!
//! Startup order: parse args → init tracing → load config → open rule
//! store → bind route table → listen. Route binding happens once here;
//! rule changes made through the admin API only become live after
//! `POST /admin/restart` exits the process and a supervisor relaunches it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mock_service::config::{load_config, MockServerConfig};
use mock_service::lifecycle::Shutdown;
use mock_service::store::RuleStore;
use mock_service::HttpServer;

#[derive(Parser, Debug)]
#[command(
    name = "mock-service",
    about = "Configurable HTTP mock server: persisted rules, canned responses",
    version
)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "mock-service.toml")]
    config: PathBuf,

    /// Override the configured bind address (e.g. "127.0.0.1:9000")
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = if args.config.exists() {
        tracing::info!(path = %args.config.display(), "Loading configuration");
        load_config(&args.config)?
    } else {
        tracing::info!("No configuration file, using defaults");
        MockServerConfig::default()
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        data_dir = %config.data.dir.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Load persisted rules; corrupt state resets to empty, never fails.
    let store = Arc::new(RuleStore::open(config.data.rules_file())?);

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    // Route table is captured inside the server, before traffic is accepted.
    let server = HttpServer::new(&config, store);
    let shutdown = Shutdown::new();
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
