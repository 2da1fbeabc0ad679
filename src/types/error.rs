use std::collections::BTreeMap;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

pub const AUTHENTICATION_FAILED: &str = "Unable to authenticate with provided credentials.";

/// Field name -> messages, rendered as-is in 400 responses.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
pub enum AppError {
    // client errors with a field-level body
    #[error("validation error: {0:?}")]
    Validation(FieldErrors),
    #[error("user with this {field} already exists")]
    Uniqueness { field: &'static str },
    #[error("password policy violated: {0:?}")]
    PasswordPolicy(Vec<String>),
    #[error("unable to authenticate with provided credentials")]
    Authentication,

    // standard web stuffs
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("forbidden")]
    Forbidden,

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    error: &'a str,
    message: &'b str
}

impl AppError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        AppError::Validation(errors)
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Uniqueness { .. } => "UNIQUENESS_ERROR",
            Self::PasswordPolicy(_) => "PASSWORD_POLICY_ERROR",
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
            if let Some(field) = unique_field(&detail) {
                return AppError::Uniqueness { field };
            }
        }
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }

    /// Body for the errors that are reported per field.
    fn field_errors(&self) -> Option<FieldErrors> {
        let single = |field: &str, messages: Vec<String>| {
            let mut errors = FieldErrors::new();
            errors.insert(field.to_string(), messages);
            errors
        };
        match self {
            Self::Validation(errors) => Some(errors.clone()),
            Self::Uniqueness { field } => Some(single(
                field,
                vec![format!("user with this {} already exists.", field.replace('_', " "))],
            )),
            Self::PasswordPolicy(failures) => Some(single("password", failures.clone())),
            Self::Authentication => Some(single(
                "non_field_errors",
                vec![AUTHENTICATION_FAILED.to_string()],
            )),
            _ => None,
        }
    }
}

/// Postgres reports the index name, SQLite the `table.column` or index name;
/// both carry the column name. Other constraints are not a user-facing field.
fn unique_field(detail: &str) -> Option<&'static str> {
    if detail.contains("phone_number") {
        Some("phone_number")
    } else if detail.contains("email") {
        Some("email")
    } else {
        None
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Uniqueness { .. }
            | Self::PasswordPolicy(_)
            | Self::Authentication => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Db(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Some(errors) = self.field_errors() {
            return HttpResponse::build(self.status_code()).json(errors);
        }
        if self.status_code().is_server_error() {
            tracing::error!("request failed: {self}");
        }
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: self.kind() })
    }
}
