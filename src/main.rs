//! Forza Server
//!
//! Run with: cargo run --bin forza
//!
//! Reads `config.toml` from the default locations (see `forza-cli config`)
//! with `FORZA_*` environment overrides. `RUST_LOG` takes precedence over
//! the configured log level.

use clap::Parser;
use forza::api::{serve, AppState};
use forza::config::{Config, LoggingConfig};
use forza::nexra::NexraClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "forza")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Forza AI server: web UI, chat and code explainer API")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Forza server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Completion API: {} (model {})", config.nexra.url, config.nexra.model);

    let client = Arc::new(NexraClient::new(config.nexra_client_config())?);
    let state = AppState::new(client, &config);

    serve(state, &config.bind_addr()).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("forza={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
