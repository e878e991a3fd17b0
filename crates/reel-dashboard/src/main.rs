//! reel dashboard server binary.
//!
//! Reads `reel.toml` (or the path specified with `--config`), loads the
//! titles file once, and serves the dashboard over HTTP until killed.
//!
//! ```
//! cargo run -p reel-dashboard --bin server -- --data netflix_titles.csv
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use reel_dashboard::{AppState, DashboardConfig};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Catalogue dashboard server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "reel.toml")]
  config: PathBuf,

  /// Titles file to load, overriding `data_path` from the config.
  #[arg(short, long, value_name = "FILE")]
  data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let config = DashboardConfig::load(&cli.config, cli.data.as_deref())
    .context("failed to read configuration")?;

  let catalog = reel_csv::load_catalog(&config.data_path, config.encoding)
    .with_context(|| format!("failed to load titles from {:?}", config.data_path))?;

  let address = config.address();
  let app = reel_dashboard::router(AppState::new(catalog, config));

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
