/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use storefront_server::StorefrontParts;

pub(crate) type AppState = Arc<StorefrontParts>;

/// Every GET path is a storefront page; the tenant comes from the `Host`
/// header, so there is nothing route-specific to register.
pub(crate) fn build_router(parts: StorefrontParts) -> Router {
  let state: AppState = Arc::new(parts);
  Router::new()
    .route("/", get(page::handle_page))
    .route("/{*path}", get(page::handle_page))
    .with_state(state)
}
