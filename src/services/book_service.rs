use std::sync::Arc;

use crate::{
    db::parse_object_id,
    errors::{AppError, AppResult},
    models::domain::Book,
    repositories::BookRepository,
};

pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.find_all().await
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        let oid = parse_object_id(id)?;

        self.repository
            .find_by_id(oid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id '{}' not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockBookRepository;

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let mut repository = MockBookRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = BookService::new(Arc::new(repository));
        let result = service
            .get_book(&mongodb::bson::oid::ObjectId::new().to_hex())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
