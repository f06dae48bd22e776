use chrono::Duration;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::dto::request::IdentityClaim,
};

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: Duration,
}

impl TokenService {
    pub fn new(secret: &SecretString, expires_in: Duration) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            expires_in,
        }
    }

    /// How long an issued token stays valid.
    pub fn expires_in(&self) -> Duration {
        self.expires_in
    }

    pub fn issue(&self, identity: &IdentityClaim) -> AppResult<String> {
        let claims = Claims::new(identity, self.expires_in);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create token: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Token has expired".to_string())
                }
                ErrorKind::InvalidSignature => {
                    AppError::Unauthorized("Token signature is invalid".to_string())
                }
                ErrorKind::InvalidToken => {
                    AppError::Unauthorized("Invalid token format".to_string())
                }
                _ => AppError::Unauthorized(format!("Token validation failed: {}", e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn token_service(expires_in: Duration) -> TokenService {
        let config = Config::test_config();
        TokenService::new(&config.token_secret, expires_in)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = token_service(Duration::hours(1));

        let mut identity = IdentityClaim::with_email("a@x.com");
        identity.attributes.insert("name".to_string(), json!("Alice"));

        let token = service.issue(&identity).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.attributes.get("name"), Some(&json!("Alice")));
    }

    #[test]
    fn test_verify_invalid_token() {
        let service = token_service(Duration::hours(1));

        let result = service.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let service = token_service(Duration::seconds(-10));
        let token = service.issue(&IdentityClaim::with_email("a@x.com")).unwrap();

        match service.verify(&token) {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("expired")),
            other => panic!("Expected Unauthorized error, got {:?}", other.map(|c| c.email)),
        }
    }

    #[test]
    fn test_verify_rejects_foreign_signature() {
        let issuer = TokenService::new(
            &SecretString::from("some-other-secret".to_string()),
            Duration::hours(1),
        );
        let token = issuer.issue(&IdentityClaim::with_email("a@x.com")).unwrap();

        let result = token_service(Duration::hours(1)).verify(&token);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
