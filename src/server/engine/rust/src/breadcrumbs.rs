/* src/server/engine/rust/src/breadcrumbs.rs */

use storefront_injector::Breadcrumb;

/// `blue-shoes` -> `Blue shoes`.
pub fn humanize_segment(segment: &str) -> String {
  let spaced = segment.replace('-', " ");
  let mut chars = spaced.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// Trail for a request path: Home, then one crumb per segment linking to the
/// accumulated prefix.
pub fn derive_breadcrumbs(path: &str) -> Vec<Breadcrumb> {
  let path = path.split(['?', '#']).next().unwrap_or("");
  let mut crumbs = vec![Breadcrumb::new("Home", "/")];
  let mut prefix = String::new();
  for segment in path.split('/').filter(|s| !s.is_empty()) {
    prefix.push('/');
    prefix.push_str(segment);
    crumbs.push(Breadcrumb::new(humanize_segment(segment), prefix.clone()));
  }
  crumbs
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn root_is_home_only() {
    assert_eq!(derive_breadcrumbs("/"), vec![Breadcrumb::new("Home", "/")]);
    assert_eq!(derive_breadcrumbs(""), vec![Breadcrumb::new("Home", "/")]);
  }

  #[test]
  fn segments_accumulate_prefix() {
    let crumbs = derive_breadcrumbs("/products/blue-shoes/");
    assert_eq!(
      crumbs,
      vec![
        Breadcrumb::new("Home", "/"),
        Breadcrumb::new("Products", "/products"),
        Breadcrumb::new("Blue shoes", "/products/blue-shoes"),
      ]
    );
  }

  #[test]
  fn empty_segments_skipped() {
    let crumbs = derive_breadcrumbs("//about//team?tab=1");
    assert_eq!(crumbs.len(), 3);
    assert_eq!(crumbs[2], Breadcrumb::new("Team", "/about/team"));
  }

  #[test]
  fn humanize_non_ascii() {
    assert_eq!(humanize_segment("über-uns"), "Über uns");
    assert_eq!(humanize_segment(""), "");
  }
}
