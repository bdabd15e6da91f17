/* demo/backend/rust/src/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use storefront_server::RenderOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub render: RenderOptions,
  pub data: DataSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_bind")]
  pub bind: String,
  /// Storefronts answer on `<subdomain>.<base_domain>`.
  #[serde(default)]
  pub base_domain: Option<String>,
  #[serde(default)]
  pub log_json: bool,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { bind: default_bind(), base_domain: None, log_json: false }
  }
}

fn default_bind() -> String {
  "127.0.0.1:3000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
  /// JSON fixture file, relative to the config file.
  pub fixtures: PathBuf,
}

impl DemoConfig {
  pub fn parse(text: &str) -> Result<Self> {
    toml::from_str(text).context("invalid storefront config")
  }

  /// `STOREFRONT_BIND` takes precedence over `[server] bind`.
  pub fn apply_env(&mut self, bind: Option<String>) {
    if let Some(bind) = bind.filter(|b| !b.trim().is_empty()) {
      self.server.bind = bind;
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.server.bind.trim().is_empty() {
      bail!("server.bind must not be empty");
    }
    if self.server.base_domain.as_deref().is_some_and(|d| d.trim().is_empty()) {
      bail!("server.base_domain must not be empty when set");
    }
    let render = &self.render;
    for (name, value) in [
      ("render.homepage_category_limit", render.homepage_category_limit),
      ("render.featured_limit", render.featured_limit),
      ("render.related_limit", render.related_limit),
    ] {
      if value == 0 {
        bail!("{name} must be positive");
      }
    }
    Ok(())
  }

  pub fn fixtures_path(&self, config_path: &Path) -> PathBuf {
    match config_path.parent() {
      Some(dir) if self.data.fixtures.is_relative() => dir.join(&self.data.fixtures),
      _ => self.data.fixtures.clone(),
    }
  }
}

pub fn load_config(path: &Path) -> Result<DemoConfig> {
  let text =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config = DemoConfig::parse(&text)?;
  config.apply_env(std::env::var("STOREFRONT_BIND").ok());
  config.validate()?;
  Ok(config)
}
