/* src/server/injector/rust/src/inject.rs */

use serde_json::Value;

use crate::fragments::{
  generate_breadcrumbs_html, generate_categories_html, generate_category_header_html,
  generate_content_html, generate_featured_products_html, generate_footer_links_html,
  generate_menu_html, generate_product_detail_html, generate_products_html,
  generate_related_products_html, generate_testimonials_html,
};
use crate::helpers::{body_open_end, resolve, stringify};
use crate::model::{Breadcrumb, Category, DataBag, Product, SITE_SETTINGS_KEY, TenantConfig};
use crate::token::{Token, tokenize};

/// Replace every recognised `{{placeholder}}` in `html` with tenant values
/// and generated fragments. Never fails: a token with no data and no
/// fallback rule is left in the output verbatim.
///
/// Reserved tokens match case-insensitively; custom keys match exactly.
/// Substituted text is not re-scanned for further tokens.
pub fn inject(html: &str, data: &DataBag, config: &TenantConfig) -> String {
  let tokens = tokenize(html);
  let has_menu_slot = tokens.iter().any(|t| matches!(t, Token::Placeholder { name, .. } if is_menu_token(name)));

  let mut out = String::with_capacity(html.len());
  for token in &tokens {
    match token {
      Token::Text(text) => out.push_str(text),
      Token::Placeholder { raw, name } => match resolve_placeholder(name, data, config) {
        Some(rendered) => out.push_str(&rendered),
        None => out.push_str(raw),
      },
    }
  }

  // Templates that forgot the menu slot still get navigation
  if !has_menu_slot {
    if let Some(ref menu) = data.menu {
      out = force_insert_menu(out, &generate_menu_html(menu));
    }
  }
  out
}

/// Replace only `{{breadcrumbs}}` tokens. Missing or empty breadcrumbs
/// render the fallback trail.
pub fn inject_breadcrumbs(html: &str, crumbs: Option<&[Breadcrumb]>) -> String {
  let mut out = String::with_capacity(html.len());
  let mut rendered: Option<String> = None;
  for token in tokenize(html) {
    match token {
      Token::Text(text) => out.push_str(text),
      Token::Placeholder { name, .. } if name.eq_ignore_ascii_case("breadcrumbs") => {
        out.push_str(rendered.get_or_insert_with(|| generate_breadcrumbs_html(crumbs)));
      }
      Token::Placeholder { raw, .. } => out.push_str(raw),
    }
  }
  out
}

/// Whether `html` contains a `{{name}}` placeholder (reserved-name rules:
/// case-insensitive, inner whitespace ignored).
pub fn has_placeholder(html: &str, name: &str) -> bool {
  tokenize(html)
    .iter()
    .any(|t| matches!(t, Token::Placeholder { name: n, .. } if n.eq_ignore_ascii_case(name)))
}

fn is_menu_token(name: &str) -> bool {
  name.eq_ignore_ascii_case("menu") || name.eq_ignore_ascii_case("menuItems")
}

fn force_insert_menu(mut html: String, menu: &str) -> String {
  match body_open_end(&html) {
    Some(pos) => {
      html.insert_str(pos, menu);
      html
    }
    None => format!("{menu}{html}"),
  }
}

fn resolve_placeholder(name: &str, data: &DataBag, config: &TenantConfig) -> Option<String> {
  let key = name.to_ascii_lowercase();
  if let Some(value) = tenant_token(&key, config) {
    return Some(value);
  }
  match key.as_str() {
    "menu" | "menuitems" => data.menu.as_deref().map(generate_menu_html),
    "footerlinks" => data.footer_links.as_deref().map(generate_footer_links_html),
    "products" => data.products.as_deref().map(generate_products_html),
    "categories" => data.categories.as_deref().map(generate_categories_html),
    "featuredproducts" => data.featured_products.as_deref().map(generate_featured_products_html),
    "relatedproducts" => data.related_products.as_deref().map(generate_related_products_html),
    "testimonials" => data.testimonials.as_deref().map(generate_testimonials_html),
    "breadcrumbs" => data.breadcrumbs.as_deref().map(|c| generate_breadcrumbs_html(Some(c))),
    "content" => data.content.as_ref().map(generate_content_html),
    "product" => data.product.as_ref().map(generate_product_detail_html),
    "category" => data.category.as_ref().map(generate_category_header_html),
    _ => entity_or_custom(name, &key, data),
  }
}

fn tenant_token(key: &str, config: &TenantConfig) -> Option<String> {
  match key {
    "companyname" => Some(config.company_name.clone()),
    "primarycolor" => Some(config.theme.primary_color.clone()),
    "fontfamily" => Some(config.theme.font_family.clone()),
    "logourl" => config.logo_url.clone(),
    "secondarycolor" => config.theme.secondary_color.clone(),
    "accentcolor" => config.theme.accent_color.clone(),
    "subdomain" => Some(config.subdomain.clone()).filter(|s| !s.is_empty()),
    _ => None,
  }
}

fn entity_or_custom(name: &str, key: &str, data: &DataBag) -> Option<String> {
  match key.split_once('.') {
    // Known fields read empty when the entity is absent.
    Some(("product", field)) => match &data.product {
      Some(product) => product_field(product, field),
      None => product_field(&Product::default(), field),
    },
    Some(("category", field)) => match &data.category {
      Some(category) => category_field(category, field),
      None => category_field(&Category::default(), field),
    },
    _ => custom_value(name, data),
  }
}

fn product_field(product: &Product, field: &str) -> Option<String> {
  let value = match field {
    "name" => product.name.clone(),
    "price" => product.price.clone(),
    "description" => product.description.clone(),
    "image" => product.image.clone(),
    "id" => product.id.clone(),
    "slug" => product.slug.clone().unwrap_or_default(),
    "sku" => product.sku.clone().unwrap_or_default(),
    _ => return None,
  };
  Some(value)
}

fn category_field(category: &Category, field: &str) -> Option<String> {
  let value = match field {
    "name" => category.name.clone(),
    "description" => category.description.clone().unwrap_or_default(),
    "slug" => category.slug.clone(),
    "image" => category.image.clone().unwrap_or_default(),
    "id" => category.id.clone(),
    _ => return None,
  };
  Some(value)
}

/// Generic fallback for keys outside the reserved vocabulary. Scalars and
/// arrays (as JSON text) fill `{{key}}`; objects only fill `{{key.sub}}`.
fn custom_value(name: &str, data: &DataBag) -> Option<String> {
  let (head, rest) = match name.split_once('.') {
    Some((head, rest)) => (head, Some(rest)),
    None => (name, None),
  };

  let settings;
  let root = if head == SITE_SETTINGS_KEY {
    settings = Value::Object(data.site_settings.clone()?);
    &settings
  } else {
    data.custom.get(head)?
  };

  match (rest, root) {
    (None, Value::Object(_)) => None,
    (None, value) => Some(stringify(value)),
    (Some(path), Value::Object(_)) => resolve(path, root).map(stringify),
    (Some(_), _) => None,
  }
}
