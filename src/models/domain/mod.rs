pub mod book;
pub mod borrowing;
pub mod user;
pub use book::Book;
pub use borrowing::{Borrowing, BorrowingScope};
pub use user::UserRole;
