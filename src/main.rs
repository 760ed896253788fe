mod api;
mod config;
mod server;
mod store;
mod util;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use clap::Parser;
use config::{Config, LogConfig};
use server::Server;
use tracing::info;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "mood-tracker", version, about = "Mood tracker HTTP service")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listening address, e.g. 127.0.0.1:8000
    #[arg(long)]
    addr: Option<String>,

    /// Override the mood data file
    #[arg(long)]
    data_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path).map_err(|e| anyhow!("{}", e))?,
            None => Config::default(),
        };

        if let Some(addr) = self.addr {
            config.server_addr = addr;
        }
        if let Some(data_file) = self.data_file {
            config.data_file = data_file;
        }

        config.validate().map_err(|e| anyhow!("{}", e))?;
        Ok(config)
    }
}

/// Initialize logging. `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    match &log.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file '{}'", path))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.init(),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config()?;
    init_logging(&config.log)?;

    info!("Starting Mood Tracker API");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let server = Server::bind(&config)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    server.run().await?;

    Ok(())
}
