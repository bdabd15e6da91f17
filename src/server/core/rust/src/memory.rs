/* src/server/core/rust/src/memory.rs */

//! In-memory `SiteStore` + `Catalog`, loaded from a JSON fixture. Backs the
//! demo server and the render tests.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use serde_json::{Map, Value};
use storefront_engine::{PageSetting, normalize_path};
use storefront_injector::{Category, FooterLink, PageTemplate, Product, TenantConfig};

use crate::errors::StorefrontError;
use crate::provider::{BoxFuture, Catalog, ProductFilter, SiteStore, StoreResult};

/// One storefront and everything it serves.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontFixture {
  #[serde(flatten)]
  pub config: TenantConfig,
  /// Page type -> template.
  #[serde(default)]
  pub templates: HashMap<String, PageTemplate>,
  #[serde(default)]
  pub page_settings: Vec<PageSetting>,
  /// Page setting id -> dynamic content.
  #[serde(default)]
  pub page_content: HashMap<String, Value>,
  #[serde(default)]
  pub products: Vec<Product>,
  #[serde(default)]
  pub categories: Vec<Category>,
  /// Product ids on the featured slider. Empty means the first products.
  #[serde(default)]
  pub featured: Vec<String>,
  #[serde(default)]
  pub footer_links: Vec<FooterLink>,
  #[serde(default)]
  pub site_settings: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryStore {
  storefronts: Vec<StorefrontFixture>,
  /// Operations forced to fail, by trait method name.
  #[serde(skip)]
  failing: HashSet<String>,
}

fn ready<'a, T: Send + 'a>(value: T) -> BoxFuture<'a, T> {
  Box::pin(std::future::ready(value))
}

impl MemoryStore {
  pub fn new(storefronts: Vec<StorefrontFixture>) -> Self {
    Self { storefronts, failing: HashSet::new() }
  }

  pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(json)
  }

  pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
    serde_json::from_value(value)
  }

  /// Make `operation` (e.g. `"fetch_footer_links"`) return an upstream error.
  pub fn failing(mut self, operation: &str) -> Self {
    self.failing.insert(operation.to_string());
    self
  }

  pub fn storefronts(&self) -> &[StorefrontFixture] {
    &self.storefronts
  }

  fn check(&self, operation: &'static str) -> StoreResult<()> {
    if self.failing.contains(operation) {
      return Err(StorefrontError::upstream(format!("{operation} unavailable")));
    }
    Ok(())
  }

  fn storefront(&self, id: &str) -> Option<&StorefrontFixture> {
    self.storefronts.iter().find(|s| s.config.id == id)
  }

  fn find_tenant(
    &self,
    operation: &'static str,
    matches: impl Fn(&TenantConfig) -> bool,
  ) -> StoreResult<Option<TenantConfig>> {
    self.check(operation)?;
    Ok(self.storefronts.iter().map(|s| &s.config).find(|c| matches(c)).cloned())
  }

  fn with_storefront<T: Default>(
    &self,
    operation: &'static str,
    id: &str,
    read: impl FnOnce(&StorefrontFixture) -> T,
  ) -> StoreResult<T> {
    self.check(operation)?;
    Ok(self.storefront(id).map(read).unwrap_or_default())
  }
}

fn in_category(product: &Product, category: &str) -> bool {
  product.category.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(category))
}

impl SiteStore for MemoryStore {
  fn find_by_subdomain<'a>(
    &'a self,
    subdomain: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<TenantConfig>>> {
    ready(self.find_tenant("find_by_subdomain", |c| {
      !c.subdomain.is_empty() && c.subdomain.eq_ignore_ascii_case(subdomain)
    }))
  }

  fn find_by_user_id<'a>(
    &'a self,
    user_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<TenantConfig>>> {
    ready(self.find_tenant("find_by_user_id", |c| c.user_id.as_deref() == Some(user_id)))
  }

  fn find_by_custom_domain<'a>(
    &'a self,
    domain: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<TenantConfig>>> {
    ready(self.find_tenant("find_by_custom_domain", |c| {
      c.custom_domain.as_deref().is_some_and(|d| d.eq_ignore_ascii_case(domain))
    }))
  }

  fn load_page_template<'a>(
    &'a self,
    storefront_id: &'a str,
    page_type: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<PageTemplate>>> {
    ready(self.with_storefront("load_page_template", storefront_id, |s| {
      s.templates.get(page_type).cloned()
    }))
  }

  fn template_types<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Vec<String>>> {
    ready(self.with_storefront("template_types", storefront_id, |s| {
      let mut types: Vec<String> = s.templates.keys().cloned().collect();
      types.sort();
      types
    }))
  }

  fn page_setting_by_route<'a>(
    &'a self,
    storefront_id: &'a str,
    route: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<PageSetting>>> {
    let route = normalize_path(route);
    ready(self.with_storefront("page_setting_by_route", storefront_id, |s| {
      s.page_settings.iter().find(|p| normalize_path(&p.route) == route).cloned()
    }))
  }

  fn page_settings<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Vec<PageSetting>>> {
    ready(self.with_storefront("page_settings", storefront_id, |s| s.page_settings.clone()))
  }

  fn page_content<'a>(
    &'a self,
    storefront_id: &'a str,
    setting: &'a PageSetting,
  ) -> BoxFuture<'a, StoreResult<Option<Value>>> {
    ready(self.with_storefront("page_content", storefront_id, |s| {
      s.page_content.get(&setting.id).cloned()
    }))
  }
}

impl Catalog for MemoryStore {
  fn fetch_products<'a>(
    &'a self,
    storefront_id: &'a str,
    filter: &'a ProductFilter,
  ) -> BoxFuture<'a, StoreResult<Vec<Product>>> {
    ready(self.with_storefront("fetch_products", storefront_id, |s| {
      s.products
        .iter()
        .filter(|p| filter.category.as_deref().is_none_or(|c| in_category(p, c)))
        .take(filter.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
    }))
  }

  fn fetch_product_by_slug<'a>(
    &'a self,
    storefront_id: &'a str,
    slug: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<Product>>> {
    ready(self.with_storefront("fetch_product_by_slug", storefront_id, |s| {
      s.products.iter().find(|p| p.path_key() == slug).cloned()
    }))
  }

  fn fetch_categories<'a>(
    &'a self,
    storefront_id: &'a str,
    limit: Option<usize>,
  ) -> BoxFuture<'a, StoreResult<Vec<Category>>> {
    ready(self.with_storefront("fetch_categories", storefront_id, |s| {
      s.categories.iter().take(limit.unwrap_or(usize::MAX)).cloned().collect()
    }))
  }

  fn fetch_category_by_slug<'a>(
    &'a self,
    storefront_id: &'a str,
    slug: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<Category>>> {
    ready(self.with_storefront("fetch_category_by_slug", storefront_id, |s| {
      s.categories.iter().find(|c| c.path_key() == slug).cloned()
    }))
  }

  fn fetch_featured_products<'a>(
    &'a self,
    storefront_id: &'a str,
    limit: usize,
  ) -> BoxFuture<'a, StoreResult<Vec<Product>>> {
    ready(self.with_storefront("fetch_featured_products", storefront_id, |s| {
      if s.featured.is_empty() {
        return s.products.iter().take(limit).cloned().collect();
      }
      s.featured
        .iter()
        .filter_map(|id| s.products.iter().find(|p| &p.id == id))
        .take(limit)
        .cloned()
        .collect()
    }))
  }

  fn fetch_related_products<'a>(
    &'a self,
    storefront_id: &'a str,
    product: &'a Product,
    limit: usize,
  ) -> BoxFuture<'a, StoreResult<Vec<Product>>> {
    ready(self.with_storefront("fetch_related_products", storefront_id, |s| {
      s.products
        .iter()
        .filter(|p| p.id != product.id)
        .filter(|p| product.category.as_deref().is_none_or(|c| in_category(p, c)))
        .take(limit)
        .cloned()
        .collect()
    }))
  }

  fn fetch_footer_links<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Vec<FooterLink>>> {
    ready(self.with_storefront("fetch_footer_links", storefront_id, |s| s.footer_links.clone()))
  }

  fn fetch_site_settings<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Map<String, Value>>> {
    ready(self.with_storefront("fetch_site_settings", storefront_id, |s| s.site_settings.clone()))
  }
}
