use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/books")]
pub async fn list_books(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(HttpResponse::Ok().json(books))
}

#[get("/books/{id}")]
pub async fn get_book(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = state.book_service.get_book(&id).await?;
    Ok(HttpResponse::Ok().json(book))
}
