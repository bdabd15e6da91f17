/* src/server/core/rust/src/aggregate.rs */

use futures_util::future::{join, join4};
use serde_json::{Map, Value};
use storefront_engine::{PageType, build_menu_tree, derive_breadcrumbs, slug_from_path};
use storefront_injector::{Breadcrumb, Category, DataBag, MenuNode, PageContent, Testimonial};
use tracing::warn;

use crate::options::{FailurePolicy, RenderOptions};
use crate::provider::{Catalog, ProductFilter, SiteStore, StoreResult};

/// Builds the per-request data bag for one page.
pub struct Aggregator<'a> {
  site: &'a dyn SiteStore,
  catalog: &'a dyn Catalog,
  options: &'a RenderOptions,
}

impl<'a> Aggregator<'a> {
  pub fn new(site: &'a dyn SiteStore, catalog: &'a dyn Catalog, options: &'a RenderOptions) -> Self {
    Self { site, catalog, options }
  }

  /// Never fails: fetch errors degrade the bag according to the configured
  /// failure policy. Breadcrumbs and custom page content are always kept.
  pub async fn collect(
    &self,
    storefront_id: &str,
    page_type: &PageType,
    path: &str,
    custom_content: Option<&Value>,
  ) -> DataBag {
    let mut bag = DataBag::new();
    bag.breadcrumbs = custom_content
      .and_then(breadcrumbs_from)
      .or_else(|| Some(derive_breadcrumbs(path)));
    if let Some(content) = custom_content {
      bag.content = Some(PageContent::from_value(content));
      if *page_type == PageType::Testimonial {
        bag.testimonials = testimonials_from(content);
      }
    }

    match self.fill(&mut bag, storefront_id, page_type, path).await {
      Ok(()) => bag,
      Err(err) => {
        warn!(
          storefront_id,
          page_type = %page_type,
          error = %err,
          "data aggregation failed; serving empty sections"
        );
        degraded(bag, page_type)
      }
    }
  }

  async fn fill(
    &self,
    bag: &mut DataBag,
    id: &str,
    page_type: &PageType,
    path: &str,
  ) -> StoreResult<()> {
    let (menu, footer_links, site_settings, featured) = join4(
      self.menu(id),
      self.catalog.fetch_footer_links(id),
      self.catalog.fetch_site_settings(id),
      self.catalog.fetch_featured_products(id, self.options.featured_limit),
    )
    .await;
    bag.menu = Some(self.settle("menu", menu)?);
    bag.footer_links = Some(self.settle("footerLinks", footer_links)?);
    bag.site_settings = Some(self.settle("siteSettings", site_settings)?);
    bag.featured_products = Some(self.settle("featuredProducts", featured)?);

    match page_type {
      PageType::Homepage => {
        let limit = Some(self.options.homepage_category_limit);
        let categories = self.catalog.fetch_categories(id, limit).await;
        bag.categories = Some(self.settle("categories", categories)?);
      }
      PageType::Products => {
        let filter = ProductFilter::default();
        let (products, categories) =
          join(self.catalog.fetch_products(id, &filter), self.catalog.fetch_categories(id, None))
            .await;
        bag.products = Some(self.settle("products", products)?);
        bag.categories = Some(self.settle("categories", categories)?);
      }
      PageType::ProductDetail => {
        let product = match slug_from_path(path) {
          Some(slug) => self.settle("product", self.catalog.fetch_product_by_slug(id, slug).await)?,
          None => None,
        };
        let related = match &product {
          Some(product) => {
            let limit = self.options.related_limit;
            self.settle(
              "relatedProducts",
              self.catalog.fetch_related_products(id, product, limit).await,
            )?
          }
          None => Vec::new(),
        };
        bag.related_products = Some(related);
        bag.product = product;
      }
      PageType::Categories => {
        let categories = self.catalog.fetch_categories(id, None).await;
        bag.categories = Some(self.settle("categories", categories)?);
      }
      PageType::CategoryDetail => {
        let Some(slug) = slug_from_path(path) else {
          return Ok(());
        };
        let category =
          self.settle("category", self.catalog.fetch_category_by_slug(id, slug).await)?;
        let filter = ProductFilter::in_category(category.as_ref().map_or(slug, Category::path_key));
        let products = self.catalog.fetch_products(id, &filter).await;
        bag.products = Some(self.settle("products", products)?);
        bag.category = category;
      }
      PageType::Testimonial => {
        bag.testimonials.get_or_insert_with(Vec::new);
      }
      // Cart, checkout, account and search are client-side pages.
      PageType::Cart
      | PageType::Checkout
      | PageType::Account
      | PageType::Search
      | PageType::Custom(_) => {}
    }
    Ok(())
  }

  async fn menu(&self, id: &str) -> StoreResult<Vec<MenuNode>> {
    let mut settings = self.site.page_settings(id).await?;
    settings.retain(|setting| setting.settings.enabled);
    Ok(build_menu_tree(&settings))
  }

  /// Under `PerKey` a failed fetch becomes the empty value for its key;
  /// under `Batch` it aborts the fill.
  fn settle<T: Default>(&self, key: &'static str, result: StoreResult<T>) -> StoreResult<T> {
    match result {
      Ok(value) => Ok(value),
      Err(err) if self.options.failure_policy == FailurePolicy::PerKey => {
        warn!(key, error = %err, "fetch failed; key left empty");
        Ok(T::default())
      }
      Err(err) => Err(err),
    }
  }
}

/// Batch-policy fallback: every fetched key empty, derived keys kept.
fn degraded(bag: DataBag, page_type: &PageType) -> DataBag {
  let mut out = DataBag {
    menu: Some(Vec::new()),
    footer_links: Some(Vec::new()),
    site_settings: Some(Map::new()),
    featured_products: Some(Vec::new()),
    breadcrumbs: bag.breadcrumbs,
    testimonials: bag.testimonials,
    content: bag.content,
    ..DataBag::default()
  };
  match page_type {
    PageType::Homepage | PageType::Categories => out.categories = Some(Vec::new()),
    PageType::Products => {
      out.products = Some(Vec::new());
      out.categories = Some(Vec::new());
    }
    PageType::ProductDetail => out.related_products = Some(Vec::new()),
    PageType::CategoryDetail => out.products = Some(Vec::new()),
    PageType::Testimonial => {
      out.testimonials.get_or_insert_with(Vec::new);
    }
    _ => {}
  }
  out
}

/// Trail supplied by custom page content under `breadcrumbs`. An empty or
/// malformed list counts as none.
fn breadcrumbs_from(content: &Value) -> Option<Vec<Breadcrumb>> {
  let items = content.get("breadcrumbs")?;
  serde_json::from_value::<Vec<Breadcrumb>>(items.clone()).ok().filter(|trail| !trail.is_empty())
}

/// Testimonial list out of custom page content: a bare array, or an object
/// carrying it under `testimonials` or `items`.
fn testimonials_from(content: &Value) -> Option<Vec<Testimonial>> {
  let items = match content {
    Value::Array(_) => content,
    Value::Object(map) => map.get("testimonials").or_else(|| map.get("items"))?,
    _ => return None,
  };
  serde_json::from_value(items.clone()).ok()
}
