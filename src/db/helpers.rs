use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde_json::{Map, Value};

use crate::errors::{AppError, AppResult};

/// Parses a path identifier into an ObjectId, rejecting anything malformed.
pub fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::InvalidIdentifier(format!("'{}' is not a valid ObjectId", id)))
}

/// Filter matching a single document by its `_id`.
pub fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Renders stored fields as plain JSON, with ObjectIds as hex strings.
pub fn document_to_json(document: &Document) -> Map<String, Value> {
    document
        .iter()
        .map(|(key, value)| (key.clone(), bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: &Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::Document(document) => Value::Object(document_to_json(document)),
        Bson::Array(items) => Value::Array(items.iter().map(bson_to_json).collect()),
        other => other.clone().into_relaxed_extjson(),
    }
}
