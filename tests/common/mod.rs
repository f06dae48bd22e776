#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};
use secrecy::SecretString;
use tokio::sync::RwLock;

use booklend_server::{
    app_state::AppState,
    config::Config,
    errors::AppResult,
    models::{
        domain::{Book, Borrowing, BorrowingScope, UserRole},
        dto::response::{DeleteResponse, InsertOneResponse, UpdateResponse},
    },
    repositories::{BookRepository, BorrowingRepository, UserRepository},
};

fn in_scope(scope: &BorrowingScope, borrowing: &Borrowing) -> bool {
    match scope {
        BorrowingScope::Owner(email) => &borrowing.email == email,
        BorrowingScope::All => true,
    }
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "booklend-test".to_string(),
        books_collection: "books".to_string(),
        borrowings_collection: "borrowings".to_string(),
        users_collection: "users".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5000,
        token_secret: SecretString::from("integration_token_secret".to_string()),
        token_expiration_hours: 1,
        allowed_origin: "http://localhost:5173".to_string(),
        production: false,
    }
}

#[derive(Default)]
pub struct InMemoryBorrowingRepository {
    borrowings: RwLock<Vec<Borrowing>>,
    find_calls: AtomicUsize,
}

impl InMemoryBorrowingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BorrowingRepository for InMemoryBorrowingRepository {
    async fn insert(&self, mut borrowing: Borrowing) -> AppResult<InsertOneResponse> {
        let id = ObjectId::new();
        borrowing.id = Some(id);
        self.borrowings.write().await.push(borrowing);

        Ok(InsertOneResponse {
            acknowledged: true,
            inserted_id: id.to_hex(),
        })
    }

    async fn find(&self, scope: &BorrowingScope) -> AppResult<Vec<Borrowing>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        let borrowings = self.borrowings.read().await;
        Ok(borrowings
            .iter()
            .filter(|b| in_scope(scope, b))
            .cloned()
            .collect())
    }

    async fn update_status(&self, id: ObjectId, status: &str) -> AppResult<UpdateResponse> {
        let mut borrowings = self.borrowings.write().await;
        let Some(borrowing) = borrowings.iter_mut().find(|b| b.id == Some(id)) else {
            return Ok(UpdateResponse::new(0, 0));
        };

        let modified = borrowing.status.as_deref() != Some(status);
        borrowing.status = Some(status.to_string());
        Ok(UpdateResponse::new(1, u64::from(modified)))
    }

    async fn delete(&self, id: ObjectId) -> AppResult<DeleteResponse> {
        let mut borrowings = self.borrowings.write().await;
        let before = borrowings.len();
        borrowings.retain(|b| b.id != Some(id));
        Ok(DeleteResponse::new((before - borrowings.len()) as u64))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: RwLock<Vec<Book>>,
}

impl InMemoryBookRepository {
    pub fn with_books(documents: Vec<Document>) -> Self {
        Self {
            books: RwLock::new(documents.into_iter().map(Book::from).collect()),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.iter().find(|b| b.id == Some(id)).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    roles: RwLock<Vec<(ObjectId, UserRole)>>,
}

impl InMemoryUserRepository {
    pub fn with_users(ids: &[ObjectId]) -> Self {
        Self {
            roles: RwLock::new(ids.iter().map(|id| (*id, UserRole::User)).collect()),
        }
    }

    pub async fn role_of(&self, id: ObjectId) -> Option<UserRole> {
        let roles = self.roles.read().await;
        roles.iter().find(|(oid, _)| *oid == id).map(|(_, role)| *role)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn set_role(&self, id: ObjectId, role: UserRole) -> AppResult<UpdateResponse> {
        let mut roles = self.roles.write().await;
        let Some(entry) = roles.iter_mut().find(|(oid, _)| *oid == id) else {
            return Ok(UpdateResponse::new(0, 0));
        };

        let modified = entry.1 != role;
        entry.1 = role;
        Ok(UpdateResponse::new(1, u64::from(modified)))
    }
}

pub struct TestContext {
    pub state: AppState,
    pub borrowings: Arc<InMemoryBorrowingRepository>,
    pub books: Arc<InMemoryBookRepository>,
    pub users: Arc<InMemoryUserRepository>,
}

impl TestContext {
    pub fn new(books: InMemoryBookRepository, users: InMemoryUserRepository) -> Self {
        let borrowings = Arc::new(InMemoryBorrowingRepository::new());
        let books = Arc::new(books);
        let users = Arc::new(users);

        let state = AppState::with_repositories(
            test_config(),
            books.clone(),
            borrowings.clone(),
            users.clone(),
        );

        Self {
            state,
            borrowings,
            books,
            users,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new(InMemoryBookRepository::default(), InMemoryUserRepository::default())
    }
}
