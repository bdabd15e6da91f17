/* src/server/engine/rust/src/fallback.rs */

use storefront_injector::{PageMetadata, PageTemplate};

/// Template types a custom page may borrow when it has none of its own.
pub const GENERIC_FALLBACK_TYPES: [&str; 3] = ["testimonial", "about", "contact"];

/// First generic type that the page type mentions and the storefront has a
/// template for. `reviews-testimonial` borrows `testimonial`.
pub fn fallback_template_type<'a, S: AsRef<str>>(
  page_type: &str,
  known_types: &'a [S],
) -> Option<&'a str> {
  let wanted = page_type.to_ascii_lowercase();
  GENERIC_FALLBACK_TYPES.into_iter().filter(|generic| wanted.contains(generic)).find_map(|generic| {
    known_types.iter().map(AsRef::as_ref).find(|known| known.eq_ignore_ascii_case(generic))
  })
}

/// Minimal page used when no stored template fits: title, nav, content and
/// footer slots.
pub fn generic_page_template(title: &str) -> PageTemplate {
  let html = format!(
    concat!(
      "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
      "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
      "<title>{title}</title>\n</head>\n<body>\n",
      "<header>{{{{menu}}}}</header>\n",
      "<main>{{{{content}}}}</main>\n",
      "<footer>{{{{footerLinks}}}}</footer>\n",
      "</body>\n</html>\n"
    ),
    title = title
  );
  PageTemplate {
    html,
    css: String::new(),
    js: None,
    metadata: PageMetadata { title: title.to_string(), description: String::new() },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn substring_match_against_known_types() {
    let known = ["homepage", "testimonial", "about"];
    assert_eq!(fallback_template_type("customer-testimonials", &known), Some("testimonial"));
    assert_eq!(fallback_template_type("About-Us", &known), Some("about"));
    assert_eq!(fallback_template_type("contact-us", &known), None);
    assert_eq!(fallback_template_type("faq", &known), None);
  }

  #[test]
  fn generic_template_has_slots() {
    let template = generic_page_template("FAQ");
    assert!(template.html.contains("<title>FAQ</title>"));
    for slot in ["{{menu}}", "{{content}}", "{{footerLinks}}"] {
      assert!(template.html.contains(slot), "missing {slot}");
    }
    assert_eq!(template.metadata.title, "FAQ");
  }
}
