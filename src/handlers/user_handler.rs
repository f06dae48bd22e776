use actix_web::{patch, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

// Unauthenticated, like the borrowing write routes.
#[patch("/users/admin/{id}")]
pub async fn promote_to_admin(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state.user_service.promote_to_admin(&id).await?;
    Ok(HttpResponse::Ok().json(result))
}
