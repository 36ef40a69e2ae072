//! HTTP server implementation using Axum.

use crate::handlers;
use academy_core::{ModuleRegistry, PageResolver, ProjectShell, SiteConfig};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers.
pub struct AppState {
    /// Page resolver owning the immutable registry and the shared shell.
    pub resolver: PageResolver,
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    registry: ModuleRegistry,
    site: SiteConfig,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState {
        resolver: PageResolver::new(Arc::new(registry), ProjectShell::new(site)),
    });

    // Build the router
    let app = Router::new()
        .route("/health", get(handlers::handle_health))
        .route("/", get(handlers::pages::catalog))
        .route("/projects/:slug", get(handlers::pages::project_page_default))
        .route("/:locale/projects/:slug", get(handlers::pages::project_page))
        .fallback(handlers::pages::fallback_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    Ok(actual_addr)
}
