/* src/server/injector/rust/src/document.rs */

//! Final document assembly around an injected template body.

use crate::helpers::{escape_html, find_ignore_case, rfind_ignore_case};
use crate::inject::inject;
use crate::model::{DataBag, PageTemplate, TenantConfig};

/// Inject `data` into the template's HTML and CSS, then attach CSS, JS and
/// metadata to the document.
pub fn render_template(template: &PageTemplate, data: &DataBag, config: &TenantConfig) -> String {
  let html = inject(&template.html, data, config);
  let css = if template.css.trim().is_empty() {
    String::new()
  } else {
    inject(&template.css, &DataBag::new(), config)
  };
  let assembled = PageTemplate { html, css, ..template.clone() };
  assemble_document(&assembled)
}

/// Place the template's CSS in `<head>`, its JS at the end of `<body>`, and
/// add `<title>` / description meta when the document has none.
pub fn assemble_document(template: &PageTemplate) -> String {
  let mut html = template.html.clone();

  let title = template.metadata.title.trim();
  if !title.is_empty() && find_ignore_case(&html, "<title").is_none() {
    html = insert_into_head(html, &format!("<title>{title}</title>"));
  }

  let description = template.metadata.description.trim();
  if !description.is_empty() && find_ignore_case(&html, r#"name="description""#).is_none() {
    html = insert_into_head(
      html,
      &format!(r#"<meta name="description" content="{}">"#, escape_html(description)),
    );
  }

  if !template.css.trim().is_empty() {
    let style = format!("<style data-storefront-css>{}</style>", template.css);
    html = match find_ignore_case(&html, "</head>") {
      Some(pos) => splice(&html, pos, &style),
      None => format!("{style}{html}"),
    };
  }

  if let Some(js) = template.js.as_deref().filter(|js| !js.trim().is_empty()) {
    let script = format!("<script data-storefront-js>{js}</script>");
    html = match rfind_ignore_case(&html, "</body>") {
      Some(pos) => splice(&html, pos, &script),
      None => format!("{html}{script}"),
    };
  }

  html
}

/// Insert before `</head>`; documents without a head are left unchanged.
fn insert_into_head(html: String, fragment: &str) -> String {
  match find_ignore_case(&html, "</head>") {
    Some(pos) => splice(&html, pos, fragment),
    None => html,
  }
}

fn splice(html: &str, pos: usize, fragment: &str) -> String {
  let mut result = String::with_capacity(html.len() + fragment.len());
  result.push_str(&html[..pos]);
  result.push_str(fragment);
  result.push_str(&html[pos..]);
  result
}
