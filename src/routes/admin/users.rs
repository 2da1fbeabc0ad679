use actix_web::{get, patch, post, web};
use uuid::Uuid;

use crate::services::accounts::AccountManager;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AdminUserRes, RUserCreate, RUserUpdate};
use crate::utils::validation::{validate_registration, validate_update, PasswordPolicy};

#[get("")]
async fn list(
    accounts: web::Data<AccountManager>,
) -> ApiResult<Vec<AdminUserRes>> {
    let users = accounts.list_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(AdminUserRes::from).collect()))
}

#[post("")]
async fn add(
    accounts: web::Data<AccountManager>,
    body: web::Json<RUserCreate>,
) -> ApiResult<AdminUserRes> {
    let account = validate_registration(&body, &PasswordPolicy::default())?;
    let user = accounts.create_user(account).await?;
    Ok(ApiResponse::Created(user.into()))
}

#[get("/{id}")]
async fn detail(
    accounts: web::Data<AccountManager>,
    id: web::Path<Uuid>,
) -> ApiResult<AdminUserRes> {
    let user = accounts.get_user(id.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}

#[patch("/{id}")]
async fn change(
    accounts: web::Data<AccountManager>,
    id: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<AdminUserRes> {
    let patch = validate_update(&body)?;
    let user = accounts.update_user(id.into_inner(), patch).await?;
    Ok(ApiResponse::Ok(user.into()))
}
