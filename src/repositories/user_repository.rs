use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};

use crate::{
    db::{id_filter, Database},
    errors::AppResult,
    models::{domain::UserRole, dto::response::UpdateResponse},
};

pub(crate) fn role_update(role: UserRole) -> Document {
    doc! { "$set": { "role": role.as_str() } }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn set_role(&self, id: ObjectId, role: UserRole) -> AppResult<UpdateResponse>;
}

pub struct MongoUserRepository {
    collection: Collection<Document>,
}

impl MongoUserRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn set_role(&self, id: ObjectId, role: UserRole) -> AppResult<UpdateResponse> {
        let result = self
            .collection
            .update_one(id_filter(id), role_update(role))
            .await?;

        Ok(result.into())
    }
}
