//! Product models and DTOs.

use marketplace_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
///
/// Optional columns are omitted from the JSON representation when absent so
/// responses contain exactly the fields the client supplied plus the
/// storage-assigned `id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// DTO for creating a new product.
///
/// `name` and `price` are required by the domain but optional at the type
/// level; required-field presence is checked by
/// `marketplace_core::product::validate_new_product` before the insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
}

/// DTO for updating an existing product. All fields are optional; only
/// supplied fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
}
