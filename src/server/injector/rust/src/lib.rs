/* src/server/injector/rust/src/lib.rs */

mod block;
mod document;
pub mod fragments;
mod helpers;
mod inject;
pub mod model;
mod token;

pub use block::{BlockKind, lock_attributes};
pub use document::{assemble_document, render_template};
pub use fragments::{
  fallback_breadcrumbs, generate_breadcrumbs_html, generate_categories_html,
  generate_category_header_html, generate_content_html, generate_featured_products_html,
  generate_footer_links_html, generate_menu_html, generate_product_detail_html,
  generate_products_html, generate_related_products_html, generate_testimonials_html,
};
pub use helpers::escape_html;
pub use inject::{has_placeholder, inject, inject_breadcrumbs};
pub use model::{
  Breadcrumb, Category, ContentSection, DataBag, FooterLink, MenuNode, PageContent, PageMetadata,
  PageTemplate, Product, StructuredContent, TenantConfig, Testimonial, Theme,
};

#[cfg(test)]
mod tests;
