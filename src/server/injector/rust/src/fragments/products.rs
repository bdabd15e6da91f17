/* src/server/injector/rust/src/fragments/products.rs */

use crate::block::{BlockKind, locked};
use crate::helpers::{escape_html, excerpt};
use crate::model::Product;

/// Product cards show at most this many characters of the description.
pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;

const PRODUCTS_EMPTY: &str = concat!(
  r#"<div class="sf-empty-state" data-empty="products">"#,
  "<p>No products available at the moment. Please check back soon.</p></div>",
);

const RELATED_EMPTY: &str = concat!(
  r#"<div class="sf-empty-state" data-empty="related-products">"#,
  "<p>No related products found.</p></div>",
);

const FEATURED_EMPTY: &str = concat!(
  r#"<div class="sf-featured-empty" data-empty="featured-products">"#,
  "<p>Featured products are on their way. Check back soon!</p></div>",
);

/// Product grid. No products renders an explanatory empty state, never an
/// empty grid.
pub fn generate_products_html(products: &[Product]) -> String {
  if products.is_empty() {
    return PRODUCTS_EMPTY.to_string();
  }
  format!(r#"<div class="sf-product-grid" {}>{}</div>"#, locked(BlockKind::Products), cards(products))
}

/// "You may also like" grid on product-detail pages.
pub fn generate_related_products_html(products: &[Product]) -> String {
  if products.is_empty() {
    return RELATED_EMPTY.to_string();
  }
  format!(
    concat!(
      r#"<section class="sf-related-products" {}>"#,
      r#"<h2 class="sf-section-title">You may also like</h2>"#,
      r#"<div class="sf-product-grid">{}</div></section>"#,
    ),
    locked(BlockKind::RelatedProducts),
    cards(products),
  )
}

/// Horizontally scrolling slider. Each call gets its own DOM id so several
/// sliders can share a page.
pub fn generate_featured_products_html(products: &[Product]) -> String {
  if products.is_empty() {
    return FEATURED_EMPTY.to_string();
  }
  let slider_id = format!("featured-slider-{:08x}", rand::random::<u32>());
  let mut items = String::new();
  for product in products {
    items.push_str(&format!(
      r#"<div class="sf-slider-item" style="flex:0 0 auto;scroll-snap-align:start">{}</div>"#,
      product_card(product)
    ));
  }
  format!(
    concat!(
      r#"<section class="sf-featured-slider" id="{id}" {lock}>"#,
      r#"<button type="button" class="sf-slider-prev" data-slider-prev="{id}" aria-label="Previous">&#8249;</button>"#,
      r#"<div class="sf-slider-track" data-slider-track="{id}" "#,
      r#"style="display:flex;gap:1rem;overflow-x:auto;scroll-snap-type:x mandatory">{items}</div>"#,
      r#"<button type="button" class="sf-slider-next" data-slider-next="{id}" aria-label="Next">&#8250;</button>"#,
      "</section>",
    ),
    id = slider_id,
    lock = locked(BlockKind::FeaturedProducts),
    items = items,
  )
}

/// Full product view for `{{product}}` on detail pages.
pub fn generate_product_detail_html(product: &Product) -> String {
  let mut out = format!(
    r#"<section class="sf-product-detail" data-product-id="{}" {}>"#,
    escape_html(&product.id),
    locked(BlockKind::ProductDetail)
  );
  if !product.image.is_empty() {
    out.push_str(&format!(
      r#"<div class="sf-product-detail-media"><img src="{}" alt="{}" class="sf-product-image"></div>"#,
      escape_html(&product.image),
      escape_html(&product.name)
    ));
  }
  out.push_str(r#"<div class="sf-product-detail-info">"#);
  out.push_str(&format!(r#"<h1 class="sf-product-title">{}</h1>"#, product.name));
  out.push_str(&format!(r#"<p class="sf-product-price">${}</p>"#, product.price));
  if !product.description.is_empty() {
    out.push_str(&format!(r#"<div class="sf-product-description">{}</div>"#, product.description));
  }
  if let Some(sku) = product.sku.as_deref().filter(|s| !s.is_empty()) {
    out.push_str(&format!(r#"<p class="sf-product-sku">SKU: {sku}</p>"#));
  }
  out.push_str(&add_to_cart_button(product));
  out.push_str("</div></section>");
  out
}

fn cards(products: &[Product]) -> String {
  products.iter().map(product_card).collect()
}

fn product_card(product: &Product) -> String {
  let mut card = format!(
    r#"<div class="sf-product-card" data-product-id="{}"><a href="/products/{}" class="sf-product-link">"#,
    escape_html(&product.id),
    escape_html(product.path_key())
  );
  if !product.image.is_empty() {
    card.push_str(&format!(
      r#"<img src="{}" alt="{}" class="sf-product-image" loading="lazy">"#,
      escape_html(&product.image),
      escape_html(&product.name)
    ));
  }
  card.push_str(&format!(r#"<h3 class="sf-product-name">{}</h3></a>"#, product.name));
  if !product.description.is_empty() {
    card.push_str(&format!(
      r#"<p class="sf-product-description">{}</p>"#,
      excerpt(&product.description, DESCRIPTION_EXCERPT_CHARS)
    ));
  }
  card.push_str(&format!(
    r#"<div class="sf-product-footer"><span class="sf-product-price">${}</span>{}</div></div>"#,
    product.price,
    add_to_cart_button(product)
  ));
  card
}

/// Cart hook: everything the client-side cart needs travels as data attributes.
fn add_to_cart_button(product: &Product) -> String {
  format!(
    concat!(
      r#"<button type="button" class="sf-add-to-cart" data-add-to-cart "#,
      r#"data-product-id="{}" data-product-name="{}" data-product-price="{}" "#,
      r#"data-product-image="{}" data-product-sku="{}">Add to Cart</button>"#,
    ),
    escape_html(&product.id),
    escape_html(&product.name),
    escape_html(&product.price),
    escape_html(&product.image),
    escape_html(product.sku.as_deref().unwrap_or("")),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(id: &str, name: &str, price: &str) -> Product {
    Product {
      id: id.into(),
      name: name.into(),
      price: price.into(),
      description: "d".into(),
      ..Product::default()
    }
  }

  #[test]
  fn empty_products_render_message_and_no_cards() {
    let html = generate_products_html(&[]);
    assert!(html.contains("No products available"));
    assert!(!html.contains("sf-product-card"));
  }

  #[test]
  fn single_product_renders_one_card() {
    let html = generate_products_html(&[product("1", "X", "9.99")]);
    assert_eq!(html.matches(r#"class="sf-product-card""#).count(), 1);
    assert!(html.contains("$9.99"));
    assert!(html.contains(">X<"));
  }

  #[test]
  fn card_without_image_omits_img() {
    let html = generate_products_html(&[product("1", "X", "9.99")]);
    assert!(!html.contains("<img"));
  }

  #[test]
  fn card_with_image_renders_img() {
    let mut p = product("1", "X", "9.99");
    p.image = "https://cdn.example.com/x.png".into();
    let html = generate_products_html(&[p]);
    assert!(html.contains(r#"<img src="https://cdn.example.com/x.png" alt="X""#));
  }

  #[test]
  fn card_links_by_slug_then_id() {
    let mut with_slug = product("1", "Blue Shoes", "10.00");
    with_slug.slug = Some("blue-shoes".into());
    let html = generate_products_html(&[with_slug, product("2", "Hat", "5.00")]);
    assert!(html.contains(r#"href="/products/blue-shoes""#));
    assert!(html.contains(r#"href="/products/2""#));
  }

  #[test]
  fn add_to_cart_carries_product_data() {
    let mut p = product("42", "Mug", "12.50");
    p.sku = Some("MUG-1".into());
    p.image = "/mug.png".into();
    let html = generate_products_html(&[p]);
    assert!(html.contains("data-add-to-cart"));
    assert!(html.contains(r#"data-product-id="42""#));
    assert!(html.contains(r#"data-product-name="Mug""#));
    assert!(html.contains(r#"data-product-price="12.50""#));
    assert!(html.contains(r#"data-product-image="/mug.png""#));
    assert!(html.contains(r#"data-product-sku="MUG-1""#));
  }

  #[test]
  fn long_description_is_truncated() {
    let mut p = product("1", "X", "1.00");
    p.description = "a".repeat(150);
    let html = generate_products_html(&[p]);
    assert!(html.contains(&format!("{}...", "a".repeat(DESCRIPTION_EXCERPT_CHARS))));
    assert!(!html.contains(&"a".repeat(DESCRIPTION_EXCERPT_CHARS + 1)));
  }

  #[test]
  fn grid_is_locked_block() {
    let html = generate_products_html(&[product("1", "X", "1.00")]);
    assert!(html.contains(r#"data-block-type="products""#));
    assert!(html.contains(r#"data-gjs-editable="false""#));
  }

  #[test]
  fn featured_empty_has_distinct_message() {
    let html = generate_featured_products_html(&[]);
    assert!(html.contains("Featured products are on their way"));
    assert_ne!(html, generate_products_html(&[]));
  }

  #[test]
  fn featured_sliders_get_distinct_ids() {
    let products = [product("1", "X", "1.00")];
    let a = generate_featured_products_html(&products);
    let b = generate_featured_products_html(&products);
    let id = |html: &str| {
      let start = html.find(r#"id="featured-slider-"#).unwrap() + 4;
      html[start..start + "featured-slider-".len() + 8].to_string()
    };
    assert!(id(&a).starts_with("featured-slider-"));
    // Independent 32-bit ids.
    assert_ne!(id(&a), id(&b));
  }

  #[test]
  fn related_products_empty_state() {
    assert!(generate_related_products_html(&[]).contains("No related products"));
  }

  #[test]
  fn related_products_render_cards() {
    let html = generate_related_products_html(&[product("1", "A", "1.00"), product("2", "B", "2.00")]);
    assert_eq!(html.matches(r#"class="sf-product-card""#).count(), 2);
    assert!(html.contains(r#"data-block-type="related-products""#));
  }

  #[test]
  fn product_detail_shows_full_description() {
    let mut p = product("1", "X", "9.99");
    p.description = "b".repeat(150);
    let html = generate_product_detail_html(&p);
    assert!(html.contains(&"b".repeat(150)));
    assert!(html.contains(r#"<h1 class="sf-product-title">X</h1>"#));
    assert!(html.contains("data-add-to-cart"));
  }
}
