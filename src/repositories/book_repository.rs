use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};

use crate::{
    db::{id_filter, Database},
    errors::AppResult,
    models::domain::Book,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Book>>;
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>>;
}

pub struct MongoBookRepository {
    collection: Collection<Document>,
}

impl MongoBookRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let documents: Vec<Document> = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(documents.into_iter().map(Book::from).collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>> {
        let document = self
            .collection
            .find_one(id_filter(id))
            .projection(Book::detail_projection())
            .await?;
        Ok(document.map(Book::from))
    }
}
