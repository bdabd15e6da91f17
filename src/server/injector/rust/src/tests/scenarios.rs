/* src/server/injector/rust/src/tests/scenarios.rs */

use super::*;
use serde_json::json;

// -- Empty-data asymmetry --

#[test]
fn featured_products_only_render_when_present() {
  let html = "<section>{{featuredProducts}}</section>";
  assert_eq!(inject(html, &DataBag::new(), &acme()), html);

  let data = DataBag::from_value(json!({"featuredProducts": []}));
  assert!(inject(html, &data, &acme()).contains("Featured products are on their way"));
}

#[test]
fn breadcrumbs_in_bag_render_even_when_empty() {
  let data = DataBag::from_value(json!({"breadcrumbs": []}));
  let out = inject("{{breadcrumbs}}", &data, &acme());
  assert!(out.contains("<strong>Category</strong>"));
}

#[test]
fn categories_and_related_products_empty_policies() {
  let data = DataBag::from_value(json!({"categories": [], "relatedProducts": []}));
  let out = inject("<a>{{categories}}</a><b>{{relatedProducts}}</b>", &data, &acme());
  assert!(out.starts_with("<a></a><b>"));
  assert!(out.contains("No related products"));
}

// -- Full pages --

#[test]
fn product_detail_page() {
  let data = DataBag::from_value(json!({
    "product": {
      "id": "p-1",
      "name": "Blue Shoes",
      "price": 59.5,
      "image": "/img/blue.jpg",
      "description": "Comfortable",
      "slug": "blue-shoes",
      "sku": "BS-1"
    },
    "relatedProducts": [
      {"id": "p-2", "name": "Red Shoes", "price": "49.00", "slug": "red-shoes"}
    ],
    "breadcrumbs": [
      {"label": "Home", "url": "/"},
      {"label": "Products", "url": "/products"},
      {"label": "Blue shoes", "url": "/products/blue-shoes"}
    ]
  }));
  let template = concat!(
    "<title>{{product.name}} | {{companyName}}</title>",
    "{{breadcrumbs}}<h1>{{product.name}}</h1><span>${{product.price}}</span>",
    "{{product}}{{relatedProducts}}"
  );
  let out = inject(template, &data, &acme());
  assert!(out.starts_with("<title>Blue Shoes | Acme</title>"));
  assert!(out.contains("<span>$59.50</span>"));
  assert!(out.contains(r#"data-product-sku="BS-1""#));
  assert!(out.contains(r#"href="/products/red-shoes""#));
  assert!(out.contains("<strong>Blue shoes</strong>"));
  assert!(!out.contains("{{"));
}

#[test]
fn custom_about_page_with_structured_content() {
  let data = DataBag::from_value(json!({
    "menu": [{"label": "Home", "route": "/"}, {"label": "About", "route": "/about"}],
    "footerLinks": [{"label": "Contact", "url": "/contact"}],
    "content": {
      "title": "About Acme",
      "content": "<p>Family owned.</p>",
      "sections": [{"title": "Mission", "content": "Great goods"}]
    },
    "siteSettings": {"email": "hi@acme.test"}
  }));
  let template = concat!(
    "<html><body><header>{{menu}}</header><main>{{content}}</main>",
    "<footer>{{footerLinks}} {{siteSettings.email}}</footer></body></html>"
  );
  let out = inject(template, &data, &acme());
  assert_eq!(out.matches("<nav>").count(), 1, "menu must not be force-inserted twice");
  assert!(out.contains(r#"<h1 class="sf-content-title">About Acme</h1>"#));
  assert!(out.contains("<p>Family owned.</p>"));
  assert!(out.contains(r#"<a href="/contact">Contact</a>"#));
  assert!(out.contains("hi@acme.test</footer>"));
}

#[test]
fn testimonial_page() {
  let data = DataBag::from_value(json!({
    "testimonials": [
      {"text": "Love it", "name": "Ann", "rating": 5},
      {"message": "Quick shipping"}
    ]
  }));
  let out = inject("{{testimonials}}", &data, &acme());
  assert_eq!(out.matches(r#"class="sf-testimonial""#).count(), 2);
  assert!(out.contains("★★★★★"));
  assert!(out.contains(">Anonymous</p>"));
}

#[test]
fn rendered_document_has_locked_blocks() {
  let template = PageTemplate {
    html: "<html><head></head><body>{{featuredProducts}}{{categories}}</body></html>".into(),
    css: ":root{--brand:{{primaryColor}}}".into(),
    js: None,
    metadata: PageMetadata { title: "Home".into(), description: String::new() },
  };
  let data = DataBag::from_value(json!({
    "featuredProducts": [{"id": 1, "name": "A", "price": "1.00"}],
    "categories": [{"id": 1, "name": "Shoes", "slug": "shoes"}]
  }));
  let out = render_template(&template, &data, &acme());
  assert!(out.contains("<title>Home</title>"));
  assert!(out.contains(":root{--brand:#112233}"));
  assert!(out.contains(r#"data-block-type="featured-products""#));
  assert!(out.contains(r#"data-block-type="categories""#));
  assert_eq!(out.matches(r#"data-gjs-droppable="false""#).count(), 2);
}
