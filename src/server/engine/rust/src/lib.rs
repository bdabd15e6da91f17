/* src/server/engine/rust/src/lib.rs */

pub mod breadcrumbs;
pub mod fallback;
pub mod menu;
pub mod page_type;
pub mod setting;

// Public API re-exports
pub use breadcrumbs::{derive_breadcrumbs, humanize_segment};
pub use fallback::{GENERIC_FALLBACK_TYPES, fallback_template_type, generic_page_template};
pub use menu::{PLACEMENT_STEP, Placement, build_menu_tree, placement_order};
pub use page_type::{PageType, normalize_path, resolve_page_type, slug_from_path};
pub use setting::{ContentType, DataSource, PageFlags, PageSetting};
