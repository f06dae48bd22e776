use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::db::document_to_json;

/// Fields returned by the single-book read.
pub const BOOK_DETAIL_FIELDS: [&str; 6] =
    ["name", "author", "category", "content", "image", "quantity"];

/// A catalog item, passed through as stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: Option<ObjectId>,
    pub fields: Document,
}

impl Book {
    pub fn detail_projection() -> Document {
        BOOK_DETAIL_FIELDS
            .iter()
            .map(|field| (field.to_string(), Bson::Int32(1)))
            .collect()
    }
}

impl From<Document> for Book {
    fn from(mut document: Document) -> Self {
        let id = match document.remove("_id") {
            Some(Bson::ObjectId(oid)) => Some(oid),
            _ => None,
        };
        Book {
            id,
            fields: document,
        }
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(id) = &self.id {
            map.serialize_entry("_id", &id.to_hex())?;
        }
        for (key, value) in document_to_json(&self.fields) {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}
