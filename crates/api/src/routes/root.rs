//! Welcome route and the fallback for unmatched paths.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// GET / -- plain-text welcome message.
async fn welcome() -> &'static str {
    "Welcome to Marketplace :)"
}

/// Fallback for any method+path with no matching handler.
pub async fn route_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Route not found")
}

/// Mount the root-level welcome route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(welcome))
}
