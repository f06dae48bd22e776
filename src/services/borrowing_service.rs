use std::sync::Arc;

use validator::Validate;

use crate::{
    db::parse_object_id,
    errors::AppResult,
    models::{
        domain::{Borrowing, BorrowingScope},
        dto::{
            request::{CreateBorrowingRequest, UpdateBorrowingStatusRequest},
            response::{DeleteResponse, InsertOneResponse, UpdateResponse},
        },
    },
    repositories::BorrowingRepository,
};

/// Create, list, status change and removal of borrowing records.
///
/// Only listing is scoped to a caller; the other operations run for anyone.
pub struct BorrowingService {
    repository: Arc<dyn BorrowingRepository>,
}

impl BorrowingService {
    pub fn new(repository: Arc<dyn BorrowingRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_borrowing(
        &self,
        request: CreateBorrowingRequest,
    ) -> AppResult<InsertOneResponse> {
        request.validate()?;

        let borrowing = Borrowing::from_request(request)?;
        log::debug!("Creating borrowing: {:?}", borrowing);

        let result = self.repository.insert(borrowing).await?;
        log::info!("Created borrowing {}", result.inserted_id);
        Ok(result)
    }

    pub async fn list_borrowings(&self, scope: &BorrowingScope) -> AppResult<Vec<Borrowing>> {
        self.repository.find(scope).await
    }

    /// Sets only `status`. An unknown id yields a zero-matched result.
    pub async fn update_status(
        &self,
        id: &str,
        request: UpdateBorrowingStatusRequest,
    ) -> AppResult<UpdateResponse> {
        let id = parse_object_id(id)?;
        request.validate()?;

        let result = self.repository.update_status(id, &request.status).await?;
        log::info!(
            "Borrowing {} status -> '{}' (matched {}, modified {})",
            id,
            request.status,
            result.matched_count,
            result.modified_count
        );
        Ok(result)
    }

    pub async fn delete_borrowing(&self, id: &str) -> AppResult<DeleteResponse> {
        let id = parse_object_id(id)?;

        let result = self.repository.delete(id).await?;
        log::info!("Deleted borrowing {} (deleted {})", id, result.deleted_count);
        Ok(result)
    }
}
