use mongodb::{
    bson::Bson,
    results::{DeleteResult, InsertOneResult, UpdateResult},
};
use serde::Serialize;

fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenIssuedResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertOneResponse {
    fn from(result: InsertOneResult) -> Self {
        InsertOneResponse {
            acknowledged: true,
            inserted_id: bson_id_to_string(&result.inserted_id),
        }
    }
}

/// A zero `matched_count` means no document had the id; that is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
}

impl UpdateResponse {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        UpdateResponse {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_id: None,
            upserted_count: 0,
        }
    }
}

impl From<UpdateResult> for UpdateResponse {
    fn from(result: UpdateResult) -> Self {
        let upserted_id = result.upserted_id.as_ref().map(bson_id_to_string);
        UpdateResponse {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(upserted_id.is_some()),
            upserted_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResponse {
    pub fn new(deleted_count: u64) -> Self {
        DeleteResponse {
            acknowledged: true,
            deleted_count,
        }
    }
}

impl From<DeleteResult> for DeleteResponse {
    fn from(result: DeleteResult) -> Self {
        DeleteResponse::new(result.deleted_count)
    }
}
