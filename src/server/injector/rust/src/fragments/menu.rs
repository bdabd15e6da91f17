/* src/server/injector/rust/src/fragments/menu.rs */

use crate::helpers::escape_html;
use crate::model::{FooterLink, MenuNode};

const EXTERNAL_LINK_ATTRS: &str = r#" target="_blank" rel="noopener""#;

/// Site navigation. An empty menu still renders `<nav><ul></ul></nav>`.
pub fn generate_menu_html(items: &[MenuNode]) -> String {
  format!("<nav>{}</nav>", menu_list(items))
}

fn menu_list(items: &[MenuNode]) -> String {
  let mut out = String::from("<ul>");
  for item in items {
    out.push_str(&menu_item(item));
  }
  out.push_str("</ul>");
  out
}

fn menu_item(item: &MenuNode) -> String {
  let target = if item.external { EXTERNAL_LINK_ATTRS } else { "" };
  let children = if item.children.is_empty() { String::new() } else { menu_list(&item.children) };
  format!(r#"<li><a href="{}"{target}>{}</a>{children}</li>"#, escape_html(&item.route), item.label)
}

/// Footer link list. Unlike the menu, no links renders nothing at all.
pub fn generate_footer_links_html(links: &[FooterLink]) -> String {
  if links.is_empty() {
    return String::new();
  }
  let mut out = String::from(r#"<ul class="sf-footer-links">"#);
  for link in links {
    let target = if link.external { EXTERNAL_LINK_ATTRS } else { "" };
    out.push_str(&format!(
      r#"<li><a href="{}"{target}>{}</a></li>"#,
      escape_html(&link.url),
      link.label
    ));
  }
  out.push_str("</ul>");
  out
}
