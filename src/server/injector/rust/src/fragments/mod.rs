/* src/server/injector/rust/src/fragments/mod.rs */

//! One generator per content kind. Every generator is infallible and renders
//! a defined empty state instead of failing on missing data.

mod breadcrumbs;
mod categories;
mod content;
mod menu;
mod products;
mod testimonials;

pub use breadcrumbs::{fallback_breadcrumbs, generate_breadcrumbs_html};
pub use categories::{generate_categories_html, generate_category_header_html};
pub use content::generate_content_html;
pub use menu::{generate_footer_links_html, generate_menu_html};
pub use products::{
  DESCRIPTION_EXCERPT_CHARS, generate_featured_products_html, generate_product_detail_html,
  generate_products_html, generate_related_products_html,
};
pub use testimonials::generate_testimonials_html;
