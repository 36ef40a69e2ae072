//! Page handlers: catalog, module pages, and the not-found fallback.

use crate::server::AppState;
use academy_core::Resolution;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use std::sync::Arc;
use tracing::debug;

/// `GET /` - the module catalog under the default locale.
pub async fn catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let shell = state.resolver.shell();
    let locale = shell.site().default_locale.clone();
    let html = shell.catalog_page(
        &locale,
        state.resolver.registry().manifests_by_priority().into_iter(),
    );
    Html(html)
}

/// `GET /projects/{slug}` - module page under the default locale.
///
/// Locale-less paths serve the default locale directly; no redirect is
/// issued.
pub async fn project_page_default(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let locale = state.resolver.shell().site().default_locale.clone();
    resolve_to_response(&state, &slug, &locale).await
}

/// `GET /{locale}/projects/{slug}` - module page with an explicit locale,
/// passed through to the shell unmodified.
pub async fn project_page(
    State(state): State<Arc<AppState>>,
    Path((locale, slug)): Path<(String, String)>,
) -> impl IntoResponse {
    resolve_to_response(&state, &slug, &locale).await
}

/// Fallback for every unmatched route.
pub async fn fallback_not_found(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let shell = state.resolver.shell();
    let locale = shell.site().default_locale.clone();
    (StatusCode::NOT_FOUND, Html(shell.not_found_page(&locale)))
}

async fn resolve_to_response(state: &AppState, slug: &str, locale: &str) -> (StatusCode, Html<String>) {
    debug!("Resolving '{slug}' under locale '{locale}'");

    let outcome = state.resolver.resolve(slug, locale).await;
    let status = StatusCode::from_u16(outcome.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let shell = state.resolver.shell();

    let html = match outcome {
        Resolution::Rendered(page) => page.html,
        Resolution::NotFound => shell.not_found_page(locale),
        Resolution::LoadFailed { slug, .. } => shell.load_failed_page(locale, &slug),
    };

    (status, Html(html))
}
