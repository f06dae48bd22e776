use std::sync::Arc;

use crate::{
    auth::TokenService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        BookRepository, BorrowingRepository, MongoBookRepository, MongoBorrowingRepository,
        MongoUserRepository, UserRepository,
    },
    services::{BookService, BorrowingService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService>,
    pub borrowing_service: Arc<BorrowingService>,
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let borrowing_repository = Arc::new(MongoBorrowingRepository::new(
            &db,
            &config.borrowings_collection,
        ));
        borrowing_repository.ensure_indexes().await?;

        let book_repository = Arc::new(MongoBookRepository::new(&db, &config.books_collection));
        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));

        Ok(Self::with_repositories(
            config,
            book_repository,
            borrowing_repository,
            user_repository,
        ))
    }

    /// Wires services over the given repositories without touching a database.
    pub fn with_repositories(
        config: Config,
        book_repository: Arc<dyn BookRepository>,
        borrowing_repository: Arc<dyn BorrowingRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(
            &config.token_secret,
            chrono::Duration::hours(config.token_expiration_hours),
        ));

        Self {
            book_service: Arc::new(BookService::new(book_repository)),
            borrowing_service: Arc::new(BorrowingService::new(borrowing_repository)),
            user_service: Arc::new(UserService::new(user_repository)),
            token_service,
            config: Arc::new(config),
        }
    }
}
