use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::{id_filter, Database},
    errors::AppResult,
    models::{
        domain::{Borrowing, BorrowingScope},
        dto::response::{DeleteResponse, InsertOneResponse, UpdateResponse},
    },
};

/// Partial update touching only `status`; other fields stay as stored.
pub(crate) fn status_update(status: &str) -> Document {
    doc! { "$set": { "status": status } }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowingRepository: Send + Sync {
    async fn insert(&self, borrowing: Borrowing) -> AppResult<InsertOneResponse>;
    async fn find(&self, scope: &BorrowingScope) -> AppResult<Vec<Borrowing>>;
    async fn update_status(&self, id: ObjectId, status: &str) -> AppResult<UpdateResponse>;
    async fn delete(&self, id: ObjectId) -> AppResult<DeleteResponse>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoBorrowingRepository {
    collection: Collection<Document>,
}

impl MongoBorrowingRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl BorrowingRepository for MongoBorrowingRepository {
    async fn insert(&self, borrowing: Borrowing) -> AppResult<InsertOneResponse> {
        let result = self.collection.insert_one(borrowing.into_document()).await?;
        Ok(result.into())
    }

    async fn find(&self, scope: &BorrowingScope) -> AppResult<Vec<Borrowing>> {
        let documents: Vec<Document> = self
            .collection
            .find(scope.filter())
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Borrowing::from_document).collect()
    }

    async fn update_status(&self, id: ObjectId, status: &str) -> AppResult<UpdateResponse> {
        let result = self
            .collection
            .update_one(id_filter(id), status_update(status))
            .await?;

        Ok(result.into())
    }

    async fn delete(&self, id: ObjectId) -> AppResult<DeleteResponse> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.into())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().name("email".to_string()).build())
            .build();

        self.collection.create_index(model).await?;
        log::info!("Created index on borrowings.email");

        Ok(())
    }
}
