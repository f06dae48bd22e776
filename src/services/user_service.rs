use std::sync::Arc;

use crate::{
    db::parse_object_id,
    errors::AppResult,
    models::{domain::UserRole, dto::response::UpdateResponse},
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Grants the admin role. No caller check happens here or at the route.
    pub async fn promote_to_admin(&self, id: &str) -> AppResult<UpdateResponse> {
        let id = parse_object_id(id)?;

        let result = self.repository.set_role(id, UserRole::Admin).await?;
        log::info!("Promoted user {} to admin (matched {})", id, result.matched_count);
        Ok(result)
    }
}
