/* src/server/injector/rust/src/model.rs */

//! Render inputs: tenant config, page templates and the per-request data bag.
//! Field names follow the camelCase JSON written by the storefront generator.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Key under which site settings are exposed to generic `{{siteSettings.x}}` tokens.
pub const SITE_SETTINGS_KEY: &str = "siteSettings";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
  #[serde(default)]
  pub primary_color: String,
  #[serde(default)]
  pub font_family: String,
  #[serde(default)]
  pub design_feel: String,
  #[serde(default)]
  pub secondary_color: Option<String>,
  #[serde(default)]
  pub accent_color: Option<String>,
}

/// One storefront's site config. Read-only for the duration of a render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantConfig {
  /// Storefront id used to key every collaborator lookup.
  #[serde(default)]
  pub id: String,
  pub company_name: String,
  #[serde(default)]
  pub subdomain: String,
  #[serde(default)]
  pub theme: Theme,
  #[serde(default)]
  pub logo_url: Option<String>,
  #[serde(default)]
  pub user_id: Option<String>,
  #[serde(default)]
  pub custom_domain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetadata {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
}

/// Stored HTML/CSS/JS for one page type of one storefront.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageTemplate {
  pub html: String,
  #[serde(default)]
  pub css: String,
  #[serde(default)]
  pub js: Option<String>,
  #[serde(default)]
  pub metadata: PageMetadata,
}

impl PageTemplate {
  pub fn from_html(html: impl Into<String>) -> Self {
    Self { html: html.into(), ..Self::default() }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
  #[serde(deserialize_with = "string_or_number")]
  pub id: String,
  pub name: String,
  /// Two-decimal formatted price without currency symbol.
  #[serde(default, deserialize_with = "price_string")]
  pub price: String,
  #[serde(default)]
  pub image: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub slug: Option<String>,
  #[serde(default)]
  pub sku: Option<String>,
  /// Slug of the category this product is listed under.
  #[serde(default)]
  pub category: Option<String>,
}

impl Product {
  /// Slug when present, id otherwise. Used for `/products/{..}` links.
  pub fn path_key(&self) -> &str {
    match self.slug.as_deref() {
      Some(slug) if !slug.is_empty() => slug,
      _ => &self.id,
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
  #[serde(deserialize_with = "string_or_number")]
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub slug: String,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

impl Category {
  pub fn path_key(&self) -> &str {
    if self.slug.is_empty() { &self.id } else { &self.slug }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub parent_id: Option<String>,
  #[serde(default)]
  pub order: f64,
  pub label: String,
  pub route: String,
  #[serde(default)]
  pub external: bool,
  #[serde(default)]
  pub children: Vec<MenuNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
  pub label: String,
  pub url: String,
  #[serde(default)]
  pub external: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
  #[serde(default)]
  pub avatar: Option<String>,
  #[serde(default)]
  pub text: Option<String>,
  #[serde(default)]
  pub content: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default, alias = "author")]
  pub name: Option<String>,
  #[serde(default)]
  pub role: Option<String>,
  #[serde(default)]
  pub rating: Option<f64>,
}

impl Testimonial {
  /// Quote text, checking `text`, `content`, then `message`.
  pub fn quote(&self) -> &str {
    [&self.text, &self.content, &self.message]
      .into_iter()
      .filter_map(|field| field.as_deref())
      .find(|s| !s.is_empty())
      .unwrap_or("")
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
  pub label: String,
  pub url: String,
}

impl Breadcrumb {
  pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
    Self { label: label.into(), url: url.into() }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredContent {
  #[serde(default)]
  pub title: Option<String>,
  /// `content` or `text` from the source object, whichever is set first.
  #[serde(default)]
  pub body: Option<String>,
  #[serde(default)]
  pub sections: Vec<ContentSection>,
}

/// Content of a custom page: plain markup or a titled, sectioned object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageContent {
  Text(String),
  Structured(StructuredContent),
}

impl PageContent {
  /// Lenient conversion from whatever the content provider stored.
  /// Arrays become sections, one per item.
  pub fn from_value(value: &Value) -> Self {
    match value {
      Value::String(s) => Self::Text(s.clone()),
      Value::Null => Self::Text(String::new()),
      Value::Object(map) => Self::Structured(StructuredContent {
        title: str_field(map, &["title"]),
        body: str_field(map, &["content", "text"]),
        sections: map.get("sections").map(sections_from).unwrap_or_default(),
      }),
      Value::Array(_) => Self::Structured(StructuredContent {
        title: None,
        body: None,
        sections: sections_from(value),
      }),
      other => Self::Text(other.to_string()),
    }
  }
}

fn sections_from(value: &Value) -> Vec<ContentSection> {
  let Value::Array(items) = value else {
    return Vec::new();
  };
  items
    .iter()
    .map(|item| match item {
      Value::Object(map) => ContentSection {
        title: str_field(map, &["title", "name"]),
        content: str_field(map, &["content", "text", "message"]),
      },
      Value::String(s) => ContentSection { title: None, content: Some(s.clone()) },
      other => ContentSection { title: None, content: Some(other.to_string()) },
    })
    .collect()
}

fn str_field(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
  keys.iter().find_map(|key| map.get(*key).and_then(Value::as_str)).map(str::to_string)
}

/// Per-request values used to fill placeholders. Built fresh for every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBag {
  pub menu: Option<Vec<MenuNode>>,
  pub footer_links: Option<Vec<FooterLink>>,
  pub site_settings: Option<Map<String, Value>>,
  pub products: Option<Vec<Product>>,
  pub product: Option<Product>,
  pub categories: Option<Vec<Category>>,
  pub category: Option<Category>,
  pub featured_products: Option<Vec<Product>>,
  pub related_products: Option<Vec<Product>>,
  pub breadcrumbs: Option<Vec<Breadcrumb>>,
  pub testimonials: Option<Vec<Testimonial>>,
  pub content: Option<PageContent>,
  /// Keys outside the reserved vocabulary, substituted generically.
  pub custom: Map<String, Value>,
}

impl DataBag {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_custom(mut self, key: impl Into<String>, value: Value) -> Self {
    self.custom.insert(key.into(), value);
    self
  }

  /// Build a bag from a JSON object keyed by the wire names (`menu`,
  /// `footerLinks`, `featuredProducts`, ...). Reserved keys whose payload
  /// does not deserialize are dropped; everything else lands in `custom`.
  pub fn from_value(value: Value) -> Self {
    let mut bag = Self::default();
    let Value::Object(map) = value else {
      return bag;
    };
    for (key, value) in map {
      match key.as_str() {
        "menu" | "menuItems" => bag.menu = typed(value),
        "footerLinks" => bag.footer_links = typed(value),
        "siteSettings" => match value {
          Value::Object(settings) => bag.site_settings = Some(settings),
          _ => bag.site_settings = None,
        },
        "products" => bag.products = typed(value),
        "product" => bag.product = typed(value),
        "categories" => bag.categories = typed(value),
        "category" => bag.category = typed(value),
        "featuredProducts" => bag.featured_products = typed(value),
        "relatedProducts" => bag.related_products = typed(value),
        "breadcrumbs" => bag.breadcrumbs = typed(value),
        "testimonials" => bag.testimonials = typed(value),
        "content" => bag.content = Some(PageContent::from_value(&value)),
        _ => {
          bag.custom.insert(key, value);
        }
      }
    }
    bag
  }
}

fn typed<T: serde::de::DeserializeOwned>(value: Value) -> Option<T> {
  serde_json::from_value(value).ok()
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(s),
    Value::Number(n) => Ok(n.to_string()),
    Value::Null => Ok(String::new()),
    other => Err(serde::de::Error::custom(format!("expected string or number, got {other}"))),
  }
}

fn price_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  match Value::deserialize(deserializer)? {
    Value::String(s) => Ok(s),
    Value::Number(n) => Ok(format!("{:.2}", n.as_f64().unwrap_or_default())),
    Value::Null => Ok(String::new()),
    other => Err(serde::de::Error::custom(format!("expected price, got {other}"))),
  }
}
