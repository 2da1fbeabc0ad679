//! Credential checks and bearer token issuance.

use std::sync::Arc;

use entity::user::Model as UserModel;
use tracing::{debug, info};

use crate::db::repository::{TokenRepository, UserRepository};
use crate::services::accounts::normalize_email;
use crate::types::error::AppError;
use crate::utils::token::{construct_token, extract_token_parts, new_token, SecretHasher};

#[derive(Clone)]
pub struct AuthTokenService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<dyn TokenRepository>,
    hasher: Arc<SecretHasher>,
}

impl AuthTokenService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: Arc<dyn TokenRepository>,
        hasher: Arc<SecretHasher>,
    ) -> Self {
        Self { users, tokens, hasher }
    }

    /// Checks email + password and issues a fresh token, replacing any previous one.
    ///
    /// Unknown email, wrong password and inactive account all fail with the same
    /// [`AppError::Authentication`].
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = normalize_email(email);
        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.hasher.verify_against_dummy(password);
                debug!("login for unknown email");
                return Err(AppError::Authentication);
            }
        };

        let password_ok = self.hasher.verify(password, &user.password_hash);
        if !password_ok || !user.is_active {
            debug!(user_id = %user.id, "login rejected");
            return Err(AppError::Authentication);
        }

        let secret = new_token();
        let key_hash = self.hasher.hash(&secret)?;
        self.tokens.replace_token(user.id, key_hash).await?;

        info!(user_id = %user.id, "issued auth token");
        Ok(construct_token(&user.id, &secret))
    }

    /// User behind a bearer token.
    pub async fn resolve(&self, bearer: &str) -> Result<UserModel, AppError> {
        let (user_id, secret) = extract_token_parts(bearer).ok_or(AppError::Unauthorized)?;

        let key_hash = self
            .tokens
            .find_token_hash(user_id)
            .await?
            .ok_or(AppError::Unauthorized)?;
        if !self.hasher.verify(&secret, &key_hash) {
            return Err(AppError::Unauthorized);
        }

        match self.users.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(AppError::Unauthorized),
        }
    }
}
