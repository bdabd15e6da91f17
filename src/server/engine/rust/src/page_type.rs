/* src/server/engine/rust/src/page_type.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical page type. Built-in storefront routes have fixed variants;
/// any other identifier is a custom page keyed by its own name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PageType {
  Homepage,
  Products,
  ProductDetail,
  Categories,
  CategoryDetail,
  Cart,
  Checkout,
  Account,
  Search,
  Testimonial,
  Custom(String),
}

impl PageType {
  pub fn parse(identifier: &str) -> Self {
    match identifier {
      "homepage" => Self::Homepage,
      "products" => Self::Products,
      "product-detail" => Self::ProductDetail,
      "categories" => Self::Categories,
      "category-detail" => Self::CategoryDetail,
      "cart" => Self::Cart,
      "checkout" => Self::Checkout,
      "account" => Self::Account,
      "search" => Self::Search,
      "testimonial" => Self::Testimonial,
      other => Self::Custom(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Self::Homepage => "homepage",
      Self::Products => "products",
      Self::ProductDetail => "product-detail",
      Self::Categories => "categories",
      Self::CategoryDetail => "category-detail",
      Self::Cart => "cart",
      Self::Checkout => "checkout",
      Self::Account => "account",
      Self::Search => "search",
      Self::Testimonial => "testimonial",
      Self::Custom(name) => name,
    }
  }

  /// Built-in commerce routes. Their templates are generated with the
  /// storefront, so a missing one is a real not-found rather than a case for
  /// template fallback.
  pub fn is_commerce(&self) -> bool {
    !matches!(self, Self::Testimonial | Self::Custom(_))
  }
}

impl fmt::Display for PageType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<String> for PageType {
  fn from(value: String) -> Self {
    Self::parse(&value)
  }
}

impl From<PageType> for String {
  fn from(value: PageType) -> Self {
    value.as_str().to_string()
  }
}

/// `/` for the root, otherwise the path without query, fragment and one
/// trailing slash.
pub fn normalize_path(path: &str) -> String {
  let path = path.split(['?', '#']).next().unwrap_or("").trim();
  let path = path.strip_suffix('/').unwrap_or(path);
  if path.is_empty() {
    return "/".to_string();
  }
  if path.starts_with('/') { path.to_string() } else { format!("/{path}") }
}

/// Map a request path to its page type.
pub fn resolve_page_type(path: &str) -> PageType {
  let path = normalize_path(path);
  match path.as_str() {
    "/" => return PageType::Homepage,
    "/categories" => return PageType::Categories,
    "/products" => return PageType::Products,
    "/cart" => return PageType::Cart,
    "/checkout" => return PageType::Checkout,
    "/account" => return PageType::Account,
    "/search" => return PageType::Search,
    _ => {}
  }

  if path.starts_with("/products/") {
    return PageType::ProductDetail;
  }
  if path.starts_with("/categories/") {
    return PageType::CategoryDetail;
  }

  let rest = &path[1..];
  if !rest.is_empty() && !rest.contains('/') {
    return PageType::parse(rest);
  }
  PageType::Homepage
}

/// Last non-empty path segment: the slug on detail pages.
pub fn slug_from_path(path: &str) -> Option<&str> {
  path.split(['?', '#']).next().unwrap_or("").split('/').rfind(|s| !s.is_empty())
}
