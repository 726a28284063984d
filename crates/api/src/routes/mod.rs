pub mod health;
pub mod products;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                 list (GET), create (POST)
/// /products/                delete all (DELETE)
/// /products/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(products::router())
}
