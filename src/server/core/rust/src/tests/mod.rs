/* src/server/core/rust/src/tests/mod.rs */


use std::sync::Arc;

use serde_json::{Value, json};

use crate::{FailurePolicy, MemoryStore, RenderOptions, StorefrontRenderer};

fn fixture() -> Value {
  json!({
    "storefronts": [{
      "id": "sf-acme",
      "companyName": "Acme",
      "subdomain": "acme",
      "userId": "user-7",
      "customDomain": "www.acme-goods.test",
      "theme": {"primaryColor": "#112233", "fontFamily": "Inter"},
      "templates": {
        "homepage": {
          "html": "<html><head></head><body><h1>{{companyName}}</h1>{{featuredProducts}}{{categories}}<footer>{{footerLinks}}</footer></body></html>",
          "css": "h1{color:{{primaryColor}}}",
          "metadata": {"title": "Acme Home"}
        },
        "products": {"html": "<body>{{menu}}{{breadcrumbs}}{{products}}{{categories}}</body>"},
        "product-detail": {"html": "<body><h1>{{product.name}}</h1><p>${{product.price}}</p>{{relatedProducts}}</body>"},
        "category-detail": {"html": "<body><h1>{{category.name}}</h1>{{products}}</body>"},
        "about": {"html": "<html><head></head><body>{{content}}<p>{{siteSettings.email}}</p></body></html>"},
        "testimonial": {"html": "<body>{{testimonials}}</body>"}
      },
      "pageSettings": [
        {"id": "p-home", "pageType": "homepage", "route": "/", "order": 0, "settings": {"showInMenu": false}},
        {"id": "p-shop", "pageType": "products", "route": "/products", "order": 1, "settings": {"showInMenu": true, "metaTitle": "Shop"}},
        {"id": "p-about", "pageType": "about-us", "route": "/about", "order": 2,
         "settings": {"showInMenu": true, "metaTitle": "About"},
         "contentType": "static",
         "dataSource": {"staticData": {"title": "About Acme", "content": "<p>Family owned.</p>"}}},
        {"id": "p-reviews", "pageType": "testimonial", "route": "/reviews", "order": 3,
         "settings": {"showInMenu": true, "metaTitle": "Reviews"},
         "contentType": "dynamic", "dataSource": {"collection": "reviews"}},
        {"id": "p-old", "pageType": "sale", "route": "/sale", "order": 4,
         "settings": {"showInMenu": true, "metaTitle": "Sale", "enabled": false}},
        {"id": "p-faq", "pageType": "faq", "route": "/faq", "order": 5,
         "settings": {"showInMenu": false}}
      ],
      "pageContent": {
        "p-reviews": [
          {"text": "Lovely mugs", "name": "Ann", "rating": 5},
          {"message": "Fast shipping", "author": "Ben"}
        ]
      },
      "products": [
        {"id": "1", "name": "Mug", "price": 9, "slug": "mug", "category": "kitchen"},
        {"id": "2", "name": "Bowl", "price": "12.50", "slug": "bowl", "category": "kitchen"},
        {"id": "3", "name": "Lamp", "price": 30, "slug": "lamp", "category": "living"}
      ],
      "categories": [
        {"id": "c1", "name": "Kitchen", "slug": "kitchen"},
        {"id": "c2", "name": "Living", "slug": "living"}
      ],
      "footerLinks": [{"label": "Contact", "url": "/contact"}],
      "siteSettings": {"email": "hello@acme.test"}
    }]
  })
}

fn store() -> MemoryStore {
  MemoryStore::from_value(fixture()).unwrap()
}

fn renderer(store: MemoryStore) -> StorefrontRenderer {
  StorefrontRenderer::from_store(Arc::new(store))
}

async fn render(path: &str) -> String {
  renderer(store()).render_storefront_page("acme", path).await.unwrap()
}

#[tokio::test]
async fn homepage_end_to_end() {
  let html = render("/").await;
  assert!(html.contains("<h1>Acme</h1>"));
  assert!(html.contains("<title>Acme Home</title>"));
  assert!(html.contains("h1{color:#112233}"));
  assert!(html.contains(r#"data-block-type="featured-products""#));
  assert!(html.contains(r#"href="/categories/kitchen""#));
  assert!(html.contains(r#"<a href="/contact">Contact</a>"#));
  assert!(!html.contains("{{"));
}

#[tokio::test]
async fn menu_forced_into_body_from_page_settings() {
  let html = render("/").await;
  let after_body = html.split_once("<body>").unwrap().1;
  assert!(after_body.starts_with("<nav><ul>"));
  let home = after_body.find(">Home</a>").unwrap();
  let shop = after_body.find(">Shop</a>").unwrap();
  let about = after_body.find(">About</a>").unwrap();
  assert!(home < shop && shop < about);
  assert!(!after_body.contains(">Sale</a>"), "disabled pages stay out of the menu");
}

#[tokio::test]
async fn tenant_found_by_user_id_and_custom_domain() {
  let renderer = renderer(store());
  for identifier in ["user-7", "www.acme-goods.test"] {
    let html = renderer.render_storefront_page(identifier, "/").await.unwrap();
    assert!(html.contains("<h1>Acme</h1>"), "{identifier}");
  }
}

#[tokio::test]
async fn unknown_tenant_is_not_found() {
  let err = renderer(store()).render_storefront_page("globex", "/").await.unwrap_err();
  assert_eq!(err.status(), 404);
}

#[tokio::test]
async fn homepage_category_limit_applies() {
  let options = RenderOptions { homepage_category_limit: 1, ..RenderOptions::default() };
  let html = renderer(store()).options(options).render_storefront_page("acme", "/").await.unwrap();
  assert!(html.contains(r#"href="/categories/kitchen""#));
  assert!(!html.contains(r#"href="/categories/living""#));
}

#[tokio::test]
async fn batch_policy_empties_every_fetched_key() {
  let renderer = renderer(store().failing("fetch_footer_links"));
  let html = renderer.render_storefront_page("acme", "/products").await.unwrap();
  assert!(html.contains("No products available"));
  assert!(html.contains("<nav><ul></ul></nav>"));
  // Breadcrumbs are derived locally and survive.
  assert!(html.contains("<strong>Products</strong>"));
}

#[tokio::test]
async fn per_key_policy_isolates_the_failure() {
  let options = RenderOptions { failure_policy: FailurePolicy::PerKey, ..RenderOptions::default() };
  let renderer = renderer(store().failing("fetch_footer_links")).options(options);
  let html = renderer.render_storefront_page("acme", "/products").await.unwrap();
  assert_eq!(html.matches(r#"class="sf-product-card""#).count(), 3);
  assert!(html.contains(">Shop</a>"));
}
