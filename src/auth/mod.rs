pub mod claims;
pub mod cookie;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::Claims;
pub use cookie::{create_token_cookie, TOKEN_COOKIE_NAME};
pub use jwt::TokenService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
pub use utils::require_listing_scope;
