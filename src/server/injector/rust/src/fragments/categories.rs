/* src/server/injector/rust/src/fragments/categories.rs */

use crate::block::{BlockKind, locked};
use crate::helpers::escape_html;
use crate::model::Category;

/// Category cards linking to `/categories/{slug-or-id}`. Empty input renders nothing.
pub fn generate_categories_html(categories: &[Category]) -> String {
  if categories.is_empty() {
    return String::new();
  }
  let mut out = format!(r#"<div class="sf-category-grid" {}>"#, locked(BlockKind::Categories));
  for category in categories {
    out.push_str(&format!(
      r#"<a href="/categories/{}" class="sf-category-card" data-category-id="{}">"#,
      escape_html(category.path_key()),
      escape_html(&category.id)
    ));
    if let Some(image) = category.image.as_deref().filter(|s| !s.is_empty()) {
      out.push_str(&format!(
        r#"<img src="{}" alt="{}" class="sf-category-image" loading="lazy">"#,
        escape_html(image),
        escape_html(&category.name)
      ));
    }
    out.push_str(&format!(r#"<h3 class="sf-category-name">{}</h3></a>"#, category.name));
  }
  out.push_str("</div>");
  out
}

/// Header block for `{{category}}` on category-detail pages.
pub fn generate_category_header_html(category: &Category) -> String {
  let mut out = format!(
    r#"<header class="sf-category-header" data-category-id="{}" {}>"#,
    escape_html(&category.id),
    locked(BlockKind::CategoryHeader)
  );
  if let Some(image) = category.image.as_deref().filter(|s| !s.is_empty()) {
    out.push_str(&format!(
      r#"<img src="{}" alt="{}" class="sf-category-image">"#,
      escape_html(image),
      escape_html(&category.name)
    ));
  }
  out.push_str(&format!(r#"<h1 class="sf-category-title">{}</h1>"#, category.name));
  if let Some(description) = category.description.as_deref().filter(|s| !s.is_empty()) {
    out.push_str(&format!(r#"<p class="sf-category-description">{description}</p>"#));
  }
  out.push_str("</header>");
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn category(id: &str, name: &str, slug: &str) -> Category {
    Category { id: id.into(), name: name.into(), slug: slug.into(), ..Category::default() }
  }

  #[test]
  fn empty_categories_render_nothing() {
    assert_eq!(generate_categories_html(&[]), "");
  }

  #[test]
  fn categories_link_by_slug_then_id() {
    let html = generate_categories_html(&[category("1", "Shoes", "shoes"), category("2", "Hats", "")]);
    assert!(html.contains(r#"href="/categories/shoes""#));
    assert!(html.contains(r#"href="/categories/2""#));
    assert!(html.contains(">Shoes</h3>"));
    assert!(html.contains(r#"data-block-type="categories""#));
  }

  #[test]
  fn category_image_only_when_present() {
    let mut shoes = category("1", "Shoes", "shoes");
    assert!(!generate_categories_html(std::slice::from_ref(&shoes)).contains("<img"));
    shoes.image = Some("/shoes.jpg".into());
    assert!(generate_categories_html(&[shoes]).contains(r#"<img src="/shoes.jpg""#));
  }

  #[test]
  fn category_header_includes_description() {
    let mut shoes = category("1", "Shoes", "shoes");
    shoes.description = Some("All our shoes".into());
    let html = generate_category_header_html(&shoes);
    assert!(html.contains(r#"<h1 class="sf-category-title">Shoes</h1>"#));
    assert!(html.contains("All our shoes"));
  }
}
