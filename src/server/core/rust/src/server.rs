/* src/server/core/rust/src/server.rs */

use std::sync::Arc;

use crate::render::StorefrontRenderer;

/// Framework-agnostic parts extracted from `StorefrontServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct StorefrontParts {
  pub renderer: Arc<StorefrontRenderer>,
  pub base_domain: Option<String>,
}

impl StorefrontParts {
  /// Tenant identifier for a `Host` header value. A subdomain of the base
  /// domain maps to the subdomain; anything else is a custom domain and is
  /// passed whole. The bare base domain serves no storefront.
  pub fn identifier_for_host(&self, host: &str) -> Option<String> {
    host_identifier(host, self.base_domain.as_deref())
  }
}

pub(crate) fn host_identifier(host: &str, base_domain: Option<&str>) -> Option<String> {
  let host = strip_port(host.trim()).trim_end_matches('.').to_ascii_lowercase();
  if host.is_empty() {
    return None;
  }
  let Some(base) = base_domain.map(|b| b.trim().trim_matches('.').to_ascii_lowercase()) else {
    return Some(host);
  };
  if host == base {
    return None;
  }
  match host.strip_suffix(&base).and_then(|rest| rest.strip_suffix('.')) {
    Some(sub) if !sub.is_empty() => Some(sub.to_string()),
    _ => Some(host),
  }
}

fn strip_port(host: &str) -> &str {
  match host.rsplit_once(':') {
    Some((name, port)) if !name.contains(':') && port.bytes().all(|b| b.is_ascii_digit()) => name,
    _ => host,
  }
}

pub struct StorefrontServer {
  renderer: StorefrontRenderer,
  base_domain: Option<String>,
}

impl StorefrontServer {
  pub fn new(renderer: StorefrontRenderer) -> Self {
    Self { renderer, base_domain: None }
  }

  /// Domain under which storefronts are served as `<subdomain>.<base>`.
  pub fn base_domain(mut self, domain: impl Into<String>) -> Self {
    self.base_domain = Some(domain.into());
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> StorefrontParts {
    StorefrontParts { renderer: Arc::new(self.renderer), base_domain: self.base_domain }
  }
}
