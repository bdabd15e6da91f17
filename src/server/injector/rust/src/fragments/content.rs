/* src/server/injector/rust/src/fragments/content.rs */

use crate::block::{BlockKind, locked};
use crate::model::PageContent;

/// Custom page content (about, contact, ...). Strings are wrapped as-is;
/// structured content renders title, body and sections in order.
pub fn generate_content_html(content: &PageContent) -> String {
  let mut out = format!(r#"<div class="sf-page-content" {}>"#, locked(BlockKind::Content));
  match content {
    PageContent::Text(text) => out.push_str(text),
    PageContent::Structured(structured) => {
      if let Some(title) = non_empty(&structured.title) {
        out.push_str(&format!(r#"<h1 class="sf-content-title">{title}</h1>"#));
      }
      if let Some(body) = non_empty(&structured.body) {
        out.push_str(&format!(r#"<div class="sf-content-body">{body}</div>"#));
      }
      for section in &structured.sections {
        out.push_str(r#"<section class="sf-content-section">"#);
        if let Some(title) = non_empty(&section.title) {
          out.push_str(&format!("<h2>{title}</h2>"));
        }
        if let Some(body) = non_empty(&section.content) {
          out.push_str(&format!(r#"<div class="sf-section-body">{body}</div>"#));
        }
        out.push_str("</section>");
      }
    }
  }
  out.push_str("</div>");
  out
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|s| !s.is_empty())
}
