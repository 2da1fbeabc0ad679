use async_trait::async_trait;
use entity::user::Model as UserModel;
use uuid::Uuid;

use crate::types::{error::AppError, user::{DBUserCreate, UserPatch}};

/// Storage for user accounts.
///
/// Implementations must enforce email and phone number uniqueness at write
/// time (emails compared case-insensitively) and report a violation as
/// [`AppError::Uniqueness`]; callers never pre-check, so concurrent writers
/// are arbitrated here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: DBUserCreate) -> Result<UserModel, AppError>;

    /// Exact match on the stored (normalized) email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, AppError>;

    /// All users ordered by email.
    async fn list(&self) -> Result<Vec<UserModel>, AppError>;

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<UserModel, AppError>;
}

/// One token hash per user.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Drops whatever token the user had and stores the new hash.
    async fn replace_token(&self, user_id: Uuid, key_hash: String) -> Result<(), AppError>;

    async fn find_token_hash(&self, user_id: Uuid) -> Result<Option<String>, AppError>;
}
