use secrecy::SecretString;
use std::env;

use crate::errors::{AppError, AppResult};

const DEV_TOKEN_SECRET: &str = "dev_secret_key_change_in_production";
const DEFAULT_TOKEN_EXPIRATION_HOURS: i64 = 1;
/// One year.
pub const MAX_TOKEN_EXPIRATION_HOURS: i64 = 24 * 365;

/// Token lifetime in hours. Values that are missing, unparseable or not
/// positive fall back to the default; larger ones are capped.
fn parse_token_expiration_hours(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return DEFAULT_TOKEN_EXPIRATION_HOURS;
    };

    match raw.trim().parse::<i64>() {
        Ok(hours) if hours > MAX_TOKEN_EXPIRATION_HOURS => {
            log::warn!(
                "TOKEN_EXPIRATION_HOURS={} exceeds {}, capping",
                hours,
                MAX_TOKEN_EXPIRATION_HOURS
            );
            MAX_TOKEN_EXPIRATION_HOURS
        }
        Ok(hours) if hours > 0 => hours,
        _ => {
            log::warn!(
                "Ignoring TOKEN_EXPIRATION_HOURS={:?}, using {}",
                raw,
                DEFAULT_TOKEN_EXPIRATION_HOURS
            );
            DEFAULT_TOKEN_EXPIRATION_HOURS
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub books_collection: String,
    pub borrowings_collection: String,
    pub users_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub token_secret: SecretString,
    pub token_expiration_hours: i64,
    pub allowed_origin: String,
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "booklend".to_string()),
            books_collection: env::var("BOOKS_COLLECTION").unwrap_or_else(|_| "books".to_string()),
            borrowings_collection: env::var("BORROWINGS_COLLECTION")
                .unwrap_or_else(|_| "borrowings".to_string()),
            users_collection: env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            token_secret: SecretString::from(
                env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| DEV_TOKEN_SECRET.to_string()),
            ),
            token_expiration_hours: parse_token_expiration_hours(
                env::var("TOKEN_EXPIRATION_HOURS").ok().as_deref(),
            ),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            production: env::var("APP_ENV")
                .map(|v| v.eq_ignore_ascii_case("production"))
                .unwrap_or(false),
        }
    }

    /// Rejects the development secret, one too short to sign tokens with, or a
    /// token lifetime outside `1..=MAX_TOKEN_EXPIRATION_HOURS`.
    pub fn validate_for_production(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        let secret = self.token_secret.expose_secret();

        if secret == DEV_TOKEN_SECRET {
            return Err(AppError::ValidationError(
                "ACCESS_TOKEN_SECRET is using the default value".to_string(),
            ));
        }

        if !(1..=MAX_TOKEN_EXPIRATION_HOURS).contains(&self.token_expiration_hours) {
            return Err(AppError::ValidationError(format!(
                "TOKEN_EXPIRATION_HOURS must be between 1 and {}, got {}",
                MAX_TOKEN_EXPIRATION_HOURS, self.token_expiration_hours
            )));
        }

        if secret.len() < 32 {
            return Err(AppError::ValidationError(format!(
                "ACCESS_TOKEN_SECRET is too short ({}), must be at least 32 characters",
                secret.len()
            )));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "booklend-test".to_string(),
            books_collection: "books".to_string(),
            borrowings_collection: "borrowings".to_string(),
            users_collection: "users".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            token_secret: SecretString::from("test_token_secret_key".to_string()),
            token_expiration_hours: 1,
            allowed_origin: "http://localhost:5173".to_string(),
            production: false,
        }
    }
}
