use std::sync::Arc;

use crate::db::repository::{TokenRepository, UserRepository};
use crate::utils::token::SecretHasher;

pub mod accounts;
pub mod auth;

/// Both services over one store.
pub fn from_store<S>(store: Arc<S>, hasher: Arc<SecretHasher>) -> (accounts::AccountManager, auth::AuthTokenService)
where
    S: UserRepository + TokenRepository + 'static,
{
    (
        accounts::AccountManager::new(store.clone(), hasher.clone()),
        auth::AuthTokenService::new(store.clone(), store, hasher),
    )
}
