/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use storefront_server::StorefrontServer;
use tracing::info;

/// Re-export storefront-server core for convenience
pub use storefront_server;

/// Extension trait that converts a `StorefrontServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for StorefrontServer {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.into_parts())
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "storefront server listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
