pub mod auth_handler;
pub mod book_handler;
pub mod borrowing_handler;
pub mod health_handler;
pub mod user_handler;

use actix_web::web;

pub use auth_handler::issue_token;
pub use book_handler::{get_book, list_books};
pub use borrowing_handler::{
    create_borrowing, delete_borrowing, list_borrowings, update_borrowing_status,
};
pub use health_handler::{health_check, index};
pub use user_handler::promote_to_admin;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(health_check)
        .service(issue_token)
        .service(list_books)
        .service(get_book)
        .service(list_borrowings)
        .service(create_borrowing)
        .service(update_borrowing_status)
        .service(delete_borrowing)
        .service(promote_to_admin);
}
