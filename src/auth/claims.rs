use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::dto::request::IdentityClaim;

/// Payload keys owned by the token itself; never copied from caller input.
const RESERVED_CLAIMS: [&str; 3] = ["email", "iat", "exp"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    /// Any other identity attributes the caller supplied at login.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(identity: &IdentityClaim, expires_in: Duration) -> Self {
        let now = Utc::now();
        let exp = now + expires_in;

        let mut attributes = identity.attributes.clone();
        for key in RESERVED_CLAIMS {
            attributes.remove(key);
        }

        Self {
            email: identity.email.clone(),
            attributes,
            iat: now.timestamp().max(0) as usize,
            exp: exp.timestamp().max(0) as usize,
        }
    }
}
