pub mod handlers;
pub mod types;

use crate::Result;
use axum::{Router, routing::get};
use std::{future::Future, net::SocketAddr};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Routes served next to the Telegram webhook.
pub fn router() -> Router {
    Router::new().route("/health", get(handlers::health))
}

/// Serves `webhook` merged with [`router`] until `shutdown` resolves.
pub async fn serve<F>(addr: SocketAddr, webhook: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router().merge(webhook).layer(TraceLayer::new_for_http());

    info!("Starting webhook server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Webhook server stopped");
    Ok(())
}
