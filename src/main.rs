use std::path::PathBuf;

use clap::Parser;
use cityhub_core::config::Config;

#[derive(Parser)]
#[command(name = "cityhub", about = "CityHub — municipal information portal", version)]
struct Cli {
    /// TOML file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding cities.json, help_centers.json, schemes.json and events.json.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data.dir = dir;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    tracing::debug!(?config, "configuration resolved");

    cityhub_web::serve(config).await
}
