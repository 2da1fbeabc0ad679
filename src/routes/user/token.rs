use crate::services::auth::AuthTokenService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{RTokenCreate, TokenCreateRes};
use crate::utils::validation::validate_login;
use actix_web::{post, web};

#[post("")]
async fn token(
    _req: actix_web::HttpRequest,
    auth: web::Data<AuthTokenService>,
    body: web::Json<RTokenCreate>,
) -> ApiResult<TokenCreateRes> {
    let (email, password) = validate_login(&body)?;
    let token = auth.authenticate(&email, &password).await?;

    Ok(ApiResponse::Ok(TokenCreateRes { token }))
}
