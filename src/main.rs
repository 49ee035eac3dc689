//! fast-healthchecks server
//!
//! Serves the probes described by a YAML configuration file over HTTP.

use anyhow::Context;
use clap::Parser;
use fast_healthchecks::config::Config;
use fast_healthchecks::server;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "healthcheck-server", version, about = "Serve health probes over HTTP")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(
        short,
        long,
        env = "HEALTHCHECKS_CONFIG",
        default_value = "config/healthchecks.yaml"
    )]
    config: PathBuf,

    /// Override the listen host
    #[arg(long, env = "HEALTHCHECKS_HOST")]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long, env = "HEALTHCHECKS_PORT")]
    port: Option<u16>,

    /// Emit logs as JSON
    #[arg(long, env = "HEALTHCHECKS_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads env fallbacks
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(cli.json_logs);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_file(&cli.config)
        .await
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    server::builder::serve(config).await?;
    Ok(())
}
