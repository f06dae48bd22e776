use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    db::document_to_json,
    errors::{AppError, AppResult},
    models::dto::request::CreateBorrowingRequest,
};

/// Status given to a borrowing created without one.
pub const DEFAULT_STATUS: &str = "borrowed";

/// One user's borrow of one catalog item. Book metadata supplied by the
/// caller is kept in `details` untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Borrowing {
    pub id: Option<ObjectId>,
    pub email: String,
    pub status: Option<String>,
    pub details: Document,
}

impl Borrowing {
    pub fn from_request(request: CreateBorrowingRequest) -> AppResult<Self> {
        let mut details = mongodb::bson::to_document(&request.details)?;
        for key in ["_id", "email", "status"] {
            details.remove(key);
        }

        Ok(Borrowing {
            id: None,
            email: request.email,
            status: Some(request.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
            details,
        })
    }

    pub fn from_document(mut document: Document) -> AppResult<Self> {
        let id = match document.remove("_id") {
            Some(Bson::ObjectId(oid)) => Some(oid),
            _ => None,
        };
        let email = match document.remove("email") {
            Some(Bson::String(email)) => email,
            _ => {
                return Err(AppError::InternalError(format!(
                    "Borrowing {:?} has no email",
                    id.map(|oid| oid.to_hex())
                )))
            }
        };
        // Only a string status is lifted out; anything else stays in details.
        let status = match document.remove("status") {
            Some(Bson::String(status)) => Some(status),
            Some(other) => {
                document.insert("status", other);
                None
            }
            None => None,
        };

        Ok(Borrowing {
            id,
            email,
            status,
            details: document,
        })
    }

    pub fn into_document(self) -> Document {
        let mut document = Document::new();
        if let Some(id) = self.id {
            document.insert("_id", id);
        }
        document.insert("email", self.email);
        if let Some(status) = self.status {
            document.insert("status", status);
        }
        for (key, value) in self.details {
            document.insert(key, value);
        }
        document
    }
}

impl Serialize for Borrowing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("_id", &id.to_hex())?;
        }
        map.serialize_entry("email", &self.email)?;
        if let Some(status) = &self.status {
            map.serialize_entry("status", status)?;
        }
        for (key, value) in document_to_json(&self.details) {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}

/// Which borrowings a list request covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BorrowingScope {
    Owner(String),
    All,
}

impl BorrowingScope {
    pub fn filter(&self) -> Document {
        match self {
            BorrowingScope::Owner(email) => doc! { "email": email.as_str() },
            BorrowingScope::All => doc! {},
        }
    }
}
