#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Map};

    use crate::models::dto::request::{CreateBorrowingRequest, IdentityClaim};

    /// Identity claim carrying a display name next to the email.
    pub fn identity(email: &str) -> IdentityClaim {
        let mut claim = IdentityClaim::with_email(email);
        claim.attributes.insert("name".to_string(), json!("Test User"));
        claim
    }

    pub fn create_borrowing_request(
        email: &str,
        book_id: &str,
        status: Option<&str>,
    ) -> CreateBorrowingRequest {
        let mut details = Map::new();
        details.insert("bookId".to_string(), json!(book_id));

        CreateBorrowingRequest {
            email: email.to_string(),
            status: status.map(str::to_string),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_identity() {
        let claim = identity("a@x.com");
        assert_eq!(claim.email, "a@x.com");
        assert!(claim.attributes.contains_key("name"));
    }

    #[test]
    fn test_fixtures_create_borrowing_request() {
        let request = create_borrowing_request("a@x.com", "1", Some("borrowed"));
        assert_eq!(request.status.as_deref(), Some("borrowed"));
        assert_eq!(request.details["bookId"], "1");
    }
}
