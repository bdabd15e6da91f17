/* src/server/injector/rust/src/fragments/breadcrumbs.rs */

use crate::helpers::escape_html;
use crate::model::Breadcrumb;

const SEPARATOR: &str = concat!(
  r#"<li class="sf-breadcrumb-separator" aria-hidden="true">"#,
  r#"<svg width="12" height="12" viewBox="0 0 20 20" fill="currentColor">"#,
  r#"<path fill-rule="evenodd" d="M7.3 14.7a1 1 0 010-1.4L10.6 10 7.3 6.7a1 1 0 011.4-1.4l4 4a1 1 0 010 1.4l-4 4a1 1 0 01-1.4 0z" clip-rule="evenodd"/>"#,
  "</svg></li>",
);

/// Trail shown when a page supplies no breadcrumbs at all.
pub fn fallback_breadcrumbs() -> Vec<Breadcrumb> {
  vec![
    Breadcrumb::new("Home", "/"),
    Breadcrumb::new("Shop", "/products"),
    Breadcrumb::new("Category", "/categories"),
  ]
}

/// Breadcrumb trail; the last entry is the current page and is not a link.
/// `None` and an empty slice both render the fixed fallback trail.
pub fn generate_breadcrumbs_html(crumbs: Option<&[Breadcrumb]>) -> String {
  let fallback;
  let crumbs = match crumbs {
    Some(crumbs) if !crumbs.is_empty() => crumbs,
    _ => {
      fallback = fallback_breadcrumbs();
      fallback.as_slice()
    }
  };

  let mut out = String::from(r#"<nav class="sf-breadcrumbs" aria-label="Breadcrumb"><ol>"#);
  let last = crumbs.len() - 1;
  for (i, crumb) in crumbs.iter().enumerate() {
    if i > 0 {
      out.push_str(SEPARATOR);
    }
    if i == last {
      out.push_str(&format!(
        r#"<li class="sf-breadcrumb-current" aria-current="page"><strong>{}</strong></li>"#,
        crumb.label
      ));
    } else {
      out.push_str(&format!(
        r#"<li><a href="{}" class="sf-breadcrumb-link">{}</a></li>"#,
        escape_html(&crumb.url),
        crumb.label
      ));
    }
  }
  out.push_str("</ol></nav>");
  out
}
