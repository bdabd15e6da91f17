/* src/server/engine/rust/src/setting.rs */

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a page's content comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
  /// Fetched per request from the content provider.
  Dynamic,
  /// Embedded in `data_source.static_data`.
  #[default]
  Static,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
  #[serde(default)]
  pub static_data: Option<Value>,
  /// Collection the dynamic content provider reads from.
  #[serde(default)]
  pub collection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFlags {
  #[serde(default)]
  pub show_in_menu: bool,
  #[serde(default)]
  pub meta_title: String,
  #[serde(default)]
  pub meta_description: String,
  #[serde(default = "default_enabled")]
  pub enabled: bool,
}

impl Default for PageFlags {
  fn default() -> Self {
    Self {
      show_in_menu: false,
      meta_title: String::new(),
      meta_description: String::new(),
      enabled: true,
    }
  }
}

fn default_enabled() -> bool {
  true
}

/// Navigation and content configuration for one route. Settings form a tree
/// through `parent_id`; `order` is fractional so a page can be placed
/// between two siblings without renumbering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetting {
  pub id: String,
  pub page_type: String,
  pub route: String,
  #[serde(default)]
  pub parent_id: Option<String>,
  #[serde(default)]
  pub order: f64,
  #[serde(default)]
  pub settings: PageFlags,
  #[serde(default)]
  pub content_type: ContentType,
  #[serde(default)]
  pub data_source: Option<DataSource>,
}

impl PageSetting {
  /// Menu label: the meta title when set, the page type otherwise.
  pub fn label(&self) -> &str {
    let title = self.settings.meta_title.trim();
    if title.is_empty() { &self.page_type } else { title }
  }

  pub fn static_data(&self) -> Option<&Value> {
    self.data_source.as_ref().and_then(|source| source.static_data.as_ref())
  }
}
