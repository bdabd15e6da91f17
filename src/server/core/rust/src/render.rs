/* src/server/core/rust/src/render.rs */

use std::sync::Arc;

use serde_json::Value;
use storefront_engine::{
  ContentType, PageSetting, PageType, fallback_template_type, generic_page_template,
  humanize_segment, normalize_path, resolve_page_type,
};
use storefront_injector::{PageTemplate, TenantConfig, render_template};
use tracing::{debug, warn};

use crate::aggregate::Aggregator;
use crate::errors::StorefrontError;
use crate::options::RenderOptions;
use crate::provider::{Catalog, SiteStore};
use crate::tenant::find_tenant;

/// What a request path resolved to before any data is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPage {
  pub route: String,
  pub page_type: PageType,
  /// The custom-page setting that overrode path-based resolution.
  pub setting: Option<PageSetting>,
}

/// Renders storefront pages from a site store and a catalog.
#[derive(Clone)]
pub struct StorefrontRenderer {
  site: Arc<dyn SiteStore>,
  catalog: Arc<dyn Catalog>,
  options: RenderOptions,
}

impl StorefrontRenderer {
  pub fn new(site: Arc<dyn SiteStore>, catalog: Arc<dyn Catalog>) -> Self {
    Self { site, catalog, options: RenderOptions::default() }
  }

  /// One backend serving both roles.
  pub fn from_store<S: SiteStore + Catalog + 'static>(store: Arc<S>) -> Self {
    Self::new(store.clone(), store)
  }

  pub fn options(mut self, options: RenderOptions) -> Self {
    self.options = options;
    self
  }

  pub fn render_options(&self) -> &RenderOptions {
    &self.options
  }

  pub async fn find_tenant(&self, identifier: &str) -> Result<TenantConfig, StorefrontError> {
    find_tenant(self.site.as_ref(), identifier)
      .await?
      .ok_or_else(|| StorefrontError::not_found(format!("Storefront '{identifier}' not found")))
  }

  /// Page setting for the exact route wins over the path table.
  pub async fn resolve_page(
    &self,
    tenant: &TenantConfig,
    path: &str,
  ) -> Result<ResolvedPage, StorefrontError> {
    let route = normalize_path(path);
    let setting = self.site.page_setting_by_route(&tenant.id, &route).await?;
    match setting {
      Some(setting) if !setting.settings.enabled => {
        Err(StorefrontError::not_found(format!("Page '{route}' is disabled")))
      }
      Some(setting) => {
        let page_type = PageType::parse(&setting.page_type);
        debug!(route = %route, %page_type, "page type from page setting");
        Ok(ResolvedPage { route, page_type, setting: Some(setting) })
      }
      None => Ok(ResolvedPage { page_type: resolve_page_type(&route), route, setting: None }),
    }
  }

  /// Full pipeline: tenant, page type, template, data, injection.
  pub async fn render_storefront_page(
    &self,
    identifier: &str,
    path: &str,
  ) -> Result<String, StorefrontError> {
    let tenant = self.find_tenant(identifier).await?;
    let page = self.resolve_page(&tenant, path).await?;
    let content = match &page.setting {
      Some(setting) => self.page_content(&tenant, setting).await,
      None => None,
    };

    let mut template = self.load_template(&tenant, &page).await?;
    if let Some(setting) = &page.setting {
      apply_setting_metadata(&mut template, setting);
    }

    let aggregator = Aggregator::new(self.site.as_ref(), self.catalog.as_ref(), &self.options);
    let bag = aggregator.collect(&tenant.id, &page.page_type, &page.route, content.as_ref()).await;
    Ok(render_template(&template, &bag, &tenant))
  }

  async fn page_content(&self, tenant: &TenantConfig, setting: &PageSetting) -> Option<Value> {
    match setting.content_type {
      ContentType::Static => setting.static_data().cloned(),
      ContentType::Dynamic => match self.site.page_content(&tenant.id, setting).await {
        Ok(content) => content,
        Err(err) => {
          warn!(setting = %setting.id, error = %err, "page content unavailable");
          None
        }
      },
    }
  }

  /// Stored template for the page type. Custom pages (routes with a page
  /// setting) without one borrow a generic template type, then fall back to
  /// a synthesized document.
  async fn load_template(
    &self,
    tenant: &TenantConfig,
    page: &ResolvedPage,
  ) -> Result<PageTemplate, StorefrontError> {
    let page_type = page.page_type.as_str();
    if let Some(template) = self.site.load_page_template(&tenant.id, page_type).await? {
      return Ok(template);
    }
    // Only routes with a page setting are custom pages; anything else
    // without a stored template is simply missing.
    if page.setting.is_none() || page.page_type.is_commerce() {
      return Err(StorefrontError::not_found(format!("No '{page_type}' page for this storefront")));
    }

    let known = self.site.template_types(&tenant.id).await?;
    if let Some(fallback) = fallback_template_type(page_type, &known) {
      if let Some(template) = self.site.load_page_template(&tenant.id, fallback).await? {
        debug!(page_type, fallback, "using fallback template type");
        return Ok(template);
      }
    }

    debug!(page_type, "synthesizing generic page");
    let title = page
      .setting
      .as_ref()
      .map(|s| s.settings.meta_title.trim())
      .filter(|t| !t.is_empty())
      .map_or_else(|| humanize_segment(page_type), str::to_string);
    Ok(generic_page_template(&title))
  }
}

/// Meta title and description from the page setting fill a template that
/// has none of its own.
fn apply_setting_metadata(template: &mut PageTemplate, setting: &PageSetting) {
  let flags = &setting.settings;
  if template.metadata.title.is_empty() && !flags.meta_title.is_empty() {
    template.metadata.title.clone_from(&flags.meta_title);
  }
  if template.metadata.description.is_empty() && !flags.meta_description.is_empty() {
    template.metadata.description.clone_from(&flags.meta_description);
  }
}
