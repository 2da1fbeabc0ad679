//! Account creation and the admin-side user operations.

use std::sync::Arc;

use entity::user::Model as UserModel;
use tracing::info;
use uuid::Uuid;

use crate::db::repository::UserRepository;
use crate::types::error::AppError;
use crate::types::user::{DBUserCreate, NewAccount, UserPatch};
use crate::utils::token::SecretHasher;

/// Lower-cases the domain part (after the last `@`), keeps the local part as given.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[derive(Clone)]
pub struct AccountManager {
    users: Arc<dyn UserRepository>,
    hasher: Arc<SecretHasher>,
}

impl AccountManager {
    pub fn new(users: Arc<dyn UserRepository>, hasher: Arc<SecretHasher>) -> Self {
        Self { users, hasher }
    }

    /// Regular account, no admin access.
    pub async fn create_user(&self, account: NewAccount) -> Result<UserModel, AppError> {
        self.create(account, false).await
    }

    /// Account with both staff and superuser flags set.
    pub async fn create_superuser(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        let account = NewAccount {
            email: email.to_string(),
            password: password.to_string(),
            phone_number: None,
            name: None,
        };
        self.create(account, true).await
    }

    async fn create(&self, account: NewAccount, elevated: bool) -> Result<UserModel, AppError> {
        if account.email.trim().is_empty() {
            return Err(AppError::field("email", "Users must have an email address."));
        }
        let email = normalize_email(&account.email);
        let password_hash = self.hasher.hash(&account.password)?;

        let user = self
            .users
            .create(DBUserCreate {
                email,
                password_hash,
                phone_number: account.phone_number,
                name: account.name.unwrap_or_default(),
                is_staff: elevated,
                is_superuser: elevated,
            })
            .await?;

        info!(user_id = %user.id, superuser = elevated, "created user");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        self.users.list().await
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserModel, AppError> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<UserModel, AppError> {
        let user = self.users.update(id, patch).await?;
        info!(user_id = %user.id, "updated user");
        Ok(user)
    }
}
