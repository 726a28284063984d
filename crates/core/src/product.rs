//! Validation rules for the product entity.
//!
//! A product must carry a non-empty `name` and a `price` to be persisted.
//! Everything else (`description`, `quantity`, `category`) is optional.
//! Validation runs in the handler layer before any storage call so that a
//! bad payload never reaches the database.

use crate::error::CoreError;

/// Validate the payload of a create request.
///
/// `name` and `price` are required; `name` must be non-empty after trimming.
pub fn validate_new_product(name: Option<&str>, price: Option<f64>) -> Result<(), CoreError> {
    match name {
        None => return Err(CoreError::Validation("name is required".to_string())),
        Some(n) if n.trim().is_empty() => {
            return Err(CoreError::Validation("name must be non-empty".to_string()))
        }
        Some(_) => {}
    }
    if price.is_none() {
        return Err(CoreError::Validation("price is required".to_string()));
    }
    Ok(())
}

/// Validate the payload of an update request.
///
/// All fields are optional in an update, but a supplied `name` must still
/// be non-empty.
pub fn validate_product_update(name: Option<&str>) -> Result<(), CoreError> {
    if let Some(n) = name {
        if n.trim().is_empty() {
            return Err(CoreError::Validation("name must be non-empty".to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_payload() {
        assert!(validate_new_product(Some("Widget"), Some(9.99)).is_ok());
    }

    #[test]
    fn rejects_missing_name() {
        let err = validate_new_product(None, Some(9.99)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let err = validate_new_product(Some("   "), Some(9.99)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn rejects_missing_price() {
        let err = validate_new_product(Some("Widget"), None).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn update_allows_absent_fields() {
        assert!(validate_product_update(None).is_ok());
    }

    #[test]
    fn update_rejects_empty_name() {
        assert!(validate_product_update(Some("")).is_err());
    }
}
