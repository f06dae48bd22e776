use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::BorrowingScope,
};

/// Decides which borrowings the caller may list.
///
/// A requested email must match the caller's own. No email at all lists every
/// record, whoever the caller is.
pub fn require_listing_scope(
    claims: &Claims,
    requested_email: Option<&str>,
) -> AppResult<BorrowingScope> {
    match requested_email {
        None => Ok(BorrowingScope::All),
        Some(email) if email == claims.email => Ok(BorrowingScope::Owner(email.to_string())),
        Some(_) => Err(AppError::Forbidden("forbidden access".to_string())),
    }
}
