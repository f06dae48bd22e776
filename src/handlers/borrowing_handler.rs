use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_listing_scope, AuthMiddleware, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{
        BorrowingListQuery, CreateBorrowingRequest, UpdateBorrowingStatusRequest,
    },
};

#[get("/borrowings", wrap = "AuthMiddleware")]
pub async fn list_borrowings(
    state: web::Data<AppState>,
    query: web::Query<BorrowingListQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let scope = require_listing_scope(&auth.0, query.email.as_deref())?;

    let borrowings = state.borrowing_service.list_borrowings(&scope).await?;
    Ok(HttpResponse::Ok().json(borrowings))
}

// Write routes below carry no authentication.

#[post("/borrowings")]
pub async fn create_borrowing(
    state: web::Data<AppState>,
    request: web::Json<CreateBorrowingRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .borrowing_service
        .create_borrowing(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[patch("/borrowings/{id}")]
pub async fn update_borrowing_status(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateBorrowingStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .borrowing_service
        .update_status(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[delete("/borrowings/{id}")]
pub async fn delete_borrowing(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let result = state.borrowing_service.delete_borrowing(&id).await?;
    Ok(HttpResponse::Ok().json(result))
}
