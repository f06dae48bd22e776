use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::create_token_cookie,
    errors::AppError,
    models::dto::{request::IdentityClaim, response::TokenIssuedResponse},
};

/// Issues a session token for the posted identity and sets it as the `token` cookie.
///
/// The identity is trusted as sent; credentials are checked upstream of this service.
#[post("/jwt")]
pub async fn issue_token(
    state: web::Data<AppState>,
    request: web::Json<IdentityClaim>,
) -> Result<HttpResponse, AppError> {
    let identity = request.into_inner();
    identity.validate()?;

    let token = state.token_service.issue(&identity)?;
    log::info!("Issued session token for {}", identity.email);

    Ok(HttpResponse::Ok()
        .cookie(create_token_cookie(token, state.token_service.expires_in()))
        .json(TokenIssuedResponse { success: true }))
}
