use actix_web::{get, web};
use entity::user::Model as UserModel;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

/// Profile of the token holder; the bearer middleware already resolved the user.
#[get("")]
async fn me(
    _req: actix_web::HttpRequest,
    user: web::ReqData<UserModel>,
) -> ApiResult<UserRes> {
    Ok(ApiResponse::Ok(user.into_inner().into()))
}
