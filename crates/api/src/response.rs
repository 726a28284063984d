//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` confirmation payload, used by the delete
/// endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
