//! Handlers for product CRUD.
//!
//! Each handler parses the request, issues exactly one repository call, and
//! serializes the result. Requests share nothing beyond the pool in
//! [`AppState`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use marketplace_core::error::CoreError;
use marketplace_core::product as product_rules;
use marketplace_core::types::DbId;
use marketplace_db::models::product::{CreateProduct, UpdateProduct};
use marketplace_db::repositories::ProductRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a path segment into a product id.
///
/// A segment that does not parse cannot match any stored record, so it is a
/// plain miss rather than a storage error.
fn parse_product_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse()
        .map_err(|_| CoreError::NotFound { entity: "Product" })
}

// ---------------------------------------------------------------------------
// GET /products
// ---------------------------------------------------------------------------

/// List every product. An empty catalogue yields an empty JSON array.
pub async fn list_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ProductRepo::list_all(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed products");
    Ok(Json(items))
}

// ---------------------------------------------------------------------------
// POST /products
// ---------------------------------------------------------------------------

/// Create a new product. The storage layer assigns the id.
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    product_rules::validate_new_product(input.name.as_deref(), input.price)?;

    let created = ProductRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %created.id, name = %created.name, "Product created");
    Ok((StatusCode::CREATED, Json(created)))
}

// ---------------------------------------------------------------------------
// GET /products/{id}
// ---------------------------------------------------------------------------

/// Get a single product by ID.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_product_id(&id)?;
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Product" })?;
    Ok(Json(product))
}

// ---------------------------------------------------------------------------
// PUT /products/{id}
// ---------------------------------------------------------------------------

/// Update a product in place. Only the supplied fields change; the id never
/// does. Returns the updated record.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let id = parse_product_id(&id)?;
    product_rules::validate_product_update(input.name.as_deref())?;

    let updated = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Product" })?;
    tracing::info!(id = %updated.id, "Product updated");
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// DELETE /products/{id}
// ---------------------------------------------------------------------------

/// Delete a product by ID.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_product_id(&id)?;
    let deleted = ProductRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Product" }.into());
    }
    tracing::info!(id = %id, "Product deleted");
    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}

// ---------------------------------------------------------------------------
// DELETE /products/
// ---------------------------------------------------------------------------

/// Delete every product. Succeeds even when the catalogue is already empty.
pub async fn delete_all_products(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let removed = ProductRepo::delete_all(&state.pool).await?;
    tracing::info!(removed, "All products deleted");
    Ok(Json(MessageResponse {
        message: "All products deleted",
    }))
}
