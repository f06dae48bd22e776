use actix_web::cookie::{time, Cookie};
use chrono::Duration;

/// Cookie carrying the session token.
pub const TOKEN_COOKIE_NAME: &str = "token";

/// HttpOnly session cookie. Not marked secure so it also travels over plain HTTP.
pub fn create_token_cookie<'a>(token: String, expires_in: Duration) -> Cookie<'a> {
    Cookie::build(TOKEN_COOKIE_NAME, token)
        .path("/")
        .http_only(true)
        .secure(false)
        .max_age(time::Duration::seconds(expires_in.num_seconds()))
        .finish()
}
