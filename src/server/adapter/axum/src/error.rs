/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use storefront_server::StorefrontError;
use storefront_server::injector::escape_html;
use tracing::{debug, error};

/// Lets handlers return `StorefrontError` with `?`.
pub struct AxumError(pub StorefrontError);

impl From<StorefrontError> for AxumError {
  fn from(err: StorefrontError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let reason = status.canonical_reason().unwrap_or("Error");

    // Server-side details stay in the log.
    let detail = if status.is_server_error() {
      error!(code = err.code(), message = err.message(), "page render failed");
      "Something went wrong while loading this page.".to_string()
    } else {
      debug!(code = err.code(), message = err.message(), "page not served");
      escape_html(err.message())
    };

    let body = format!(
      concat!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">",
        "<title>{status} {reason}</title></head>",
        "<body><h1>{reason}</h1><p>{detail}</p></body></html>"
      ),
      status = status.as_u16(),
      reason = reason,
      detail = detail,
    );
    (status, Html(body)).into_response()
  }
}
