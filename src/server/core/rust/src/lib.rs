/* src/server/core/rust/src/lib.rs */

pub mod aggregate;
pub mod errors;
pub mod memory;
pub mod options;
pub mod provider;
pub mod render;
pub mod server;
pub mod tenant;

// Re-exports for ergonomic use
pub use aggregate::Aggregator;
pub use errors::StorefrontError;
pub use memory::{MemoryStore, StorefrontFixture};
pub use options::{FailurePolicy, RenderOptions};
pub use provider::{BoxFuture, Catalog, ProductFilter, SiteStore, StoreResult};
pub use render::{ResolvedPage, StorefrontRenderer};
pub use server::{StorefrontParts, StorefrontServer};
pub use tenant::find_tenant;

pub use storefront_engine as engine;
pub use storefront_injector as injector;

#[cfg(test)]
mod tests;
