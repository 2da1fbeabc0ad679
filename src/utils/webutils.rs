use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::Model as UserModel;

use crate::services::auth::AuthTokenService;
use crate::types::error::AppError;

async fn resolve_bearer(req: &ServiceRequest, credentials: &BearerAuth) -> Result<UserModel, AppError> {
    let auth = req
        .app_data::<web::Data<AuthTokenService>>()
        .ok_or_else(|| AppError::Internal("auth service not configured".into()))?;
    auth.resolve(credentials.token()).await
}

/// Any active user holding a valid token. The user lands in the request extensions.
pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match resolve_bearer(&req, &credentials).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// Like [`validate_token`], but the user must be staff.
pub async fn validate_staff_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match resolve_bearer(&req, &credentials).await {
        Ok(user) if user.is_staff => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Ok(_) => Err((AppError::Forbidden.into(), req)),
        Err(e) => Err((e.into(), req)),
    }
}
