/* src/server/core/rust/src/tenant.rs */

use storefront_injector::TenantConfig;
use tracing::debug;

use crate::provider::{SiteStore, StoreResult};

/// Look a storefront up by subdomain, then owner user id, then custom domain.
pub async fn find_tenant(site: &dyn SiteStore, identifier: &str) -> StoreResult<Option<TenantConfig>> {
  let identifier = identifier.trim();
  if identifier.is_empty() {
    return Ok(None);
  }

  if let Some(tenant) = site.find_by_subdomain(identifier).await? {
    debug!(identifier, "tenant matched by subdomain");
    return Ok(Some(tenant));
  }
  if let Some(tenant) = site.find_by_user_id(identifier).await? {
    debug!(identifier, "tenant matched by user id");
    return Ok(Some(tenant));
  }
  let tenant = site.find_by_custom_domain(identifier).await?;
  if tenant.is_some() {
    debug!(identifier, "tenant matched by custom domain");
  }
  Ok(tenant)
}
