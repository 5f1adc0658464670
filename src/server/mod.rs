// ABOUTME: Server assembly and run loop for the Salesforce connect service
// ABOUTME: Builds the router from route groups and serves it for the process lifetime
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Server Module
//!
//! Router assembly and the process-lifetime listener.

/// Dependency injection container
pub mod resources;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::{auth::AuthRoutes, health::HealthRoutes};
use self::resources::ServerResources;

/// Assemble the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(AuthRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until shutdown
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails while
/// serving.
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let port = resources.config.http_port;
    let app = router(resources);

    let listener = TcpListener::bind(("127.0.0.1", port)).await?;

    info!("Server is running on http://localhost:{}", port);
    info!("To begin authentication, navigate to /oauth2/auth on this server.");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
