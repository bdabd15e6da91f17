/* src/server/injector/rust/src/block.rs */

//! Editor lock contract. A data-bound block may be selected, hovered and
//! removed as a whole in the visual editor, but never edited or dropped into,
//! so its bindings survive a save.

use crate::helpers::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
  Products,
  FeaturedProducts,
  RelatedProducts,
  ProductDetail,
  Categories,
  CategoryHeader,
  Testimonials,
  Content,
}

impl BlockKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Products => "products",
      Self::FeaturedProducts => "featured-products",
      Self::RelatedProducts => "related-products",
      Self::ProductDetail => "product-detail",
      Self::Categories => "categories",
      Self::CategoryHeader => "category-header",
      Self::Testimonials => "testimonials",
      Self::Content => "content",
    }
  }

  /// Stable id for the block; identical across renders of the same page.
  pub fn block_id(self) -> String {
    format!("{}-block", self.as_str())
  }
}

/// Attribute string marking an element as a locked dynamic block.
pub fn lock_attributes(block_id: &str, block_type: &str) -> String {
  format!(
    concat!(
      r#"data-block-id="{}" data-block-type="{}" "#,
      r#"data-gjs-selectable="true" data-gjs-removable="true" data-gjs-hoverable="true" "#,
      r#"data-gjs-editable="false" data-gjs-droppable="false""#,
    ),
    escape_html(block_id),
    escape_html(block_type),
  )
}

pub(crate) fn locked(kind: BlockKind) -> String {
  lock_attributes(&kind.block_id(), kind.as_str())
}
