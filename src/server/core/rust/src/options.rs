/* src/server/core/rust/src/options.rs */

use serde::Deserialize;

/// What the aggregator does when one of its fetches fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
  /// Any failure empties the whole bag (breadcrumbs and page content survive).
  #[default]
  Batch,
  /// Only the failing key is emptied.
  PerKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
  pub homepage_category_limit: usize,
  pub featured_limit: usize,
  pub related_limit: usize,
  pub failure_policy: FailurePolicy,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      homepage_category_limit: 6,
      featured_limit: 8,
      related_limit: 4,
      failure_policy: FailurePolicy::Batch,
    }
  }
}
