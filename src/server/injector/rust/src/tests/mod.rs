/* src/server/injector/rust/src/tests/mod.rs */

mod scenarios;

use super::*;
use serde_json::json;

fn acme() -> TenantConfig {
  serde_json::from_value(json!({
    "companyName": "Acme",
    "subdomain": "acme",
    "theme": {"primaryColor": "#112233", "fontFamily": "Inter"}
  }))
  .unwrap()
}

#[test]
fn unmatched_tokens_are_idempotent_except_tenant_tokens() {
  let html = concat!(
    "<style>body{color:{{primaryColor}};font-family:{{fontFamily}}}</style>",
    "<h1>{{companyName}}</h1>{{products}}{{testimonials}}{{content}}{{custom.key}}"
  );
  let out = inject(html, &DataBag::new(), &acme());
  assert_eq!(
    out,
    concat!(
      "<style>body{color:#112233;font-family:Inter}</style>",
      "<h1>Acme</h1>{{products}}{{testimonials}}{{content}}{{custom.key}}"
    )
  );
  assert_eq!(inject(&out, &DataBag::new(), &acme()), out);
}

#[test]
fn menu_forced_after_body_and_kept_with_items() {
  let data = DataBag::from_value(json!({
    "menu": [
      {"label": "Home", "route": "/", "order": -1},
      {"label": "About", "route": "/about", "order": 0}
    ]
  }));
  let out = inject("<html><body data-theme=\"light\"><main></main></body></html>", &data, &acme());
  let after_body = out.split_once("<body data-theme=\"light\">").unwrap().1;
  assert!(after_body.starts_with("<nav><ul>"));
  assert!(after_body.contains(r#"<a href="/about">About</a>"#));
}

#[test]
fn products_empty_state_and_single_card() {
  let empty = generate_products_html(&[]);
  assert!(empty.contains("No products"));
  assert_eq!(empty.matches("sf-product-card").count(), 0);

  let products: Vec<Product> = serde_json::from_value(json!([
    {"id": 1, "name": "X", "price": "9.99", "image": "", "description": "d"}
  ]))
  .unwrap();
  let one = generate_products_html(&products);
  assert_eq!(one.matches(r#"class="sf-product-card""#).count(), 1);
  assert!(one.contains("$9.99"));
  assert!(one.contains("X"));
}

#[test]
fn breadcrumb_fallback_for_missing_and_empty() {
  let html = "<div>{{breadcrumbs}}</div>";
  let from_none = inject_breadcrumbs(html, None);
  let from_empty = inject_breadcrumbs(html, Some(&[]));
  assert_eq!(from_none, from_empty);
  for label in ["Home", "Shop", "Category"] {
    assert!(from_none.contains(label), "missing {label}");
  }
}

#[test]
fn generic_custom_data_substitution() {
  let data = DataBag::new().with_custom("user", json!({"name": "Bob"}));
  assert_eq!(inject("{{user.name}}", &data, &acme()), "Bob");

  let data = DataBag::new().with_custom("tags", json!([1, 2, 3]));
  assert_eq!(inject("{{tags}}", &data, &acme()), "[1,2,3]");
}

#[test]
fn end_to_end_acme_products() {
  let template = "<html><body><h1>{{companyName}}</h1>{{products}}</body></html>";
  let data = DataBag::from_value(json!({"products": []}));
  let out = inject(template, &data, &acme());
  assert!(out.contains("<h1>Acme</h1>"));
  assert!(out.contains("No products available"));
  assert!(!out.contains("{{"));
}
