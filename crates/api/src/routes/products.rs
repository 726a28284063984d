//! Route definitions for the product catalogue.
//!
//! ```text
//! GET    /products          list_products
//! POST   /products          create_product
//! DELETE /products/         delete_all_products
//! GET    /products/{id}     get_product
//! PUT    /products/{id}     update_product
//! DELETE /products/{id}     delete_product
//! ```
//!
//! `/products/` (trailing slash) and `/products/{id}` are distinct routes;
//! the router never redirects between them, so the delete-all path cannot
//! shadow a delete-by-id.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Product routes -- mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/products/", delete(products::delete_all_products))
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
