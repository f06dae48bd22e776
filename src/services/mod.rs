pub mod book_service;
pub mod borrowing_service;
pub mod user_service;

pub use book_service::BookService;
pub use borrowing_service::BorrowingService;
pub use user_service::UserService;
