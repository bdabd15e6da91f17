/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Error surfaced by collaborators and the render entrypoint.
/// `status` is the HTTP status an adapter should answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontError {
  code: &'static str,
  message: String,
  status: u16,
}

impl StorefrontError {
  pub fn new(code: &'static str, message: impl Into<String>, status: u16) -> Self {
    Self { code, message: message.into(), status }
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new("NOT_FOUND", message, 404)
  }

  pub fn invalid(message: impl Into<String>) -> Self {
    Self::new("INVALID", message, 400)
  }

  pub fn internal(message: impl Into<String>) -> Self {
    Self::new("INTERNAL_ERROR", message, 500)
  }

  /// A backing store or catalog service failed.
  pub fn upstream(message: impl Into<String>) -> Self {
    Self::new("UPSTREAM_ERROR", message, 502)
  }

  pub fn code(&self) -> &'static str {
    self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_not_found(&self) -> bool {
    self.status == 404
  }
}

impl fmt::Display for StorefrontError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for StorefrontError {}
