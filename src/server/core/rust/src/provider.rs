/* src/server/core/rust/src/provider.rs */

//! Collaborator interfaces. The render path only sees these traits; storage
//! and catalog backends live behind them.

use serde_json::{Map, Value};
use storefront_engine::PageSetting;
use storefront_injector::{Category, FooterLink, PageTemplate, Product, TenantConfig};

use crate::errors::StorefrontError;

pub use futures_util::future::BoxFuture;

pub type StoreResult<T> = Result<T, StorefrontError>;

/// Narrowing applied by `Catalog::fetch_products`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
  /// Category slug (or id when the category has no slug).
  pub category: Option<String>,
  pub limit: Option<usize>,
}

impl ProductFilter {
  pub fn in_category(category: impl Into<String>) -> Self {
    Self { category: Some(category.into()), limit: None }
  }
}

/// Site configuration, templates and page settings.
pub trait SiteStore: Send + Sync {
  fn find_by_subdomain<'a>(
    &'a self,
    subdomain: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<TenantConfig>>>;

  fn find_by_user_id<'a>(
    &'a self,
    user_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<TenantConfig>>>;

  fn find_by_custom_domain<'a>(
    &'a self,
    domain: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<TenantConfig>>>;

  fn load_page_template<'a>(
    &'a self,
    storefront_id: &'a str,
    page_type: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<PageTemplate>>>;

  /// Page types the storefront has stored templates for.
  fn template_types<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Vec<String>>>;

  fn page_setting_by_route<'a>(
    &'a self,
    storefront_id: &'a str,
    route: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<PageSetting>>>;

  fn page_settings<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Vec<PageSetting>>>;

  /// Content of a dynamic page.
  fn page_content<'a>(
    &'a self,
    storefront_id: &'a str,
    setting: &'a PageSetting,
  ) -> BoxFuture<'a, StoreResult<Option<Value>>>;
}

/// Product, category and site-chrome data.
pub trait Catalog: Send + Sync {
  fn fetch_products<'a>(
    &'a self,
    storefront_id: &'a str,
    filter: &'a ProductFilter,
  ) -> BoxFuture<'a, StoreResult<Vec<Product>>>;

  fn fetch_product_by_slug<'a>(
    &'a self,
    storefront_id: &'a str,
    slug: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<Product>>>;

  fn fetch_categories<'a>(
    &'a self,
    storefront_id: &'a str,
    limit: Option<usize>,
  ) -> BoxFuture<'a, StoreResult<Vec<Category>>>;

  fn fetch_category_by_slug<'a>(
    &'a self,
    storefront_id: &'a str,
    slug: &'a str,
  ) -> BoxFuture<'a, StoreResult<Option<Category>>>;

  fn fetch_featured_products<'a>(
    &'a self,
    storefront_id: &'a str,
    limit: usize,
  ) -> BoxFuture<'a, StoreResult<Vec<Product>>>;

  fn fetch_related_products<'a>(
    &'a self,
    storefront_id: &'a str,
    product: &'a Product,
    limit: usize,
  ) -> BoxFuture<'a, StoreResult<Vec<Product>>>;

  fn fetch_footer_links<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Vec<FooterLink>>>;

  fn fetch_site_settings<'a>(
    &'a self,
    storefront_id: &'a str,
  ) -> BoxFuture<'a, StoreResult<Map<String, Value>>>;
}
