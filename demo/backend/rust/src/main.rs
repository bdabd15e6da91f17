/* demo/backend/rust/src/main.rs */

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use storefront_server::{MemoryStore, StorefrontRenderer, StorefrontServer};
use storefront_server_axum::IntoAxumRouter;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::load_config;

#[derive(Parser)]
#[command(name = "storefront-demo", about = "Serve fixture storefronts over HTTP")]
struct Cli {
  /// Path to storefront.toml
  #[arg(short, long, default_value = "storefront.toml")]
  config: PathBuf,
  /// Emit logs as JSON lines
  #[arg(long)]
  log_json: bool,
}

fn init_tracing(json: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  if json {
    tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer().json()).init();
  } else {
    tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let config = load_config(&cli.config)?;
  init_tracing(cli.log_json || config.server.log_json);

  let fixtures = config.fixtures_path(&cli.config);
  let json = std::fs::read_to_string(&fixtures)
    .with_context(|| format!("failed to read fixtures {}", fixtures.display()))?;
  let store = MemoryStore::from_json(&json)
    .with_context(|| format!("invalid fixtures {}", fixtures.display()))?;
  info!(storefronts = store.storefronts().len(), fixtures = %fixtures.display(), "fixtures loaded");

  let renderer = StorefrontRenderer::from_store(Arc::new(store)).options(config.render.clone());
  let mut server = StorefrontServer::new(renderer);
  if let Some(domain) = &config.server.base_domain {
    server = server.base_domain(domain.clone());
  }
  server.serve(&config.server.bind).await.map_err(|e| anyhow!("server error: {e}"))
}
