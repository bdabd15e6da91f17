/* src/server/adapter/axum/src/handler/page.rs */

use axum::extract::State;
use axum::http::{HeaderMap, Uri, header};
use axum::response::Html;
use storefront_server::StorefrontError;
use tracing::debug;

use super::AppState;
use crate::error::AxumError;

/// `Host` header, or the URI authority for HTTP/2 requests.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
  headers.get(header::HOST).and_then(|v| v.to_str().ok()).or_else(|| uri.host()).unwrap_or("")
}

pub(super) async fn handle_page(
  State(parts): State<AppState>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Html<String>, AxumError> {
  let host = request_host(&headers, &uri);
  let identifier = parts
    .identifier_for_host(host)
    .ok_or_else(|| StorefrontError::not_found(format!("No storefront is served at '{host}'")))?;

  debug!(identifier = %identifier, path = uri.path(), "rendering storefront page");
  let html = parts.renderer.render_storefront_page(&identifier, uri.path()).await?;
  Ok(Html(html))
}
