//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The host crate deserializes exactly these types, so the contact form and
//! the `/api/contact` handler cannot drift apart.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Successful `POST /api/contact` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: String,
}

/// Error body returned by API endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    /// Stable machine-readable code, e.g. `E_FIELD_REQUIRED`.
    pub code: String,
    /// Offending form field, when the error is tied to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
