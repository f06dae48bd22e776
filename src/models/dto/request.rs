use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Identity presented at login. Only `email` is required; everything else is
/// carried into the session token as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IdentityClaim {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl IdentityClaim {
    pub fn with_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            attributes: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBorrowingRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Book metadata, stored without checking it against the catalog.
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBorrowingStatusRequest {
    #[validate(length(min = 1, message = "status cannot be empty"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BorrowingListQuery {
    pub email: Option<String>,
}
