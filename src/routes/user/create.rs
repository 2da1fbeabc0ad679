use crate::services::accounts::AccountManager;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserRes};
use crate::utils::validation::{validate_registration, PasswordPolicy};
use actix_web::{post, web};

/// Public sign-up. All-or-nothing: any field error means nothing is written.
#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    accounts: web::Data<AccountManager>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    let account = validate_registration(&body, &PasswordPolicy::default())?;
    let user = accounts.create_user(account).await?;

    Ok(ApiResponse::Created(user.into()))
}
