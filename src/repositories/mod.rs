pub mod book_repository;
pub mod borrowing_repository;
pub mod user_repository;

pub use book_repository::{BookRepository, MongoBookRepository};
pub use borrowing_repository::{BorrowingRepository, MongoBorrowingRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use borrowing_repository::MockBorrowingRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
