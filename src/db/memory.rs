use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use entity::user::Model as UserModel;
use uuid::Uuid;

use crate::db::repository::{TokenRepository, UserRepository};
use crate::types::{error::AppError, user::{DBUserCreate, UserPatch}};
use crate::utils::token;

#[derive(Default, Debug)]
struct Tables {
    users: HashMap<Uuid, UserModel>,
    tokens: HashMap<Uuid, String>,
}

impl Tables {
    /// Same rules as the SQL unique indexes; `skip` excludes the row being updated.
    fn check_unique(&self, email: &str, phone: Option<&str>, skip: Option<Uuid>) -> Result<(), AppError> {
        let email = email.to_lowercase();
        for user in self.users.values().filter(|u| Some(u.id) != skip) {
            if user.email.to_lowercase() == email {
                return Err(AppError::Uniqueness { field: "email" });
            }
            if phone.is_some() && user.phone_number.as_deref() == phone {
                return Err(AppError::Uniqueness { field: "phone_number" });
            }
        }
        Ok(())
    }
}

/// Process-local store. Check and write happen under one lock.
#[derive(Default, Debug)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Tables>, AppError> {
        self.tables
            .lock()
            .map_err(|_| AppError::Internal("in-memory store poisoned".into()))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let mut tables = self.lock()?;
        tables.check_unique(&payload.email, payload.phone_number.as_deref(), None)?;

        let now = Utc::now();
        let user = UserModel {
            id: token::new_id(),
            email: payload.email,
            phone_number: payload.phone_number,
            name: payload.name,
            password_hash: payload.password_hash,
            is_active: true,
            is_staff: payload.is_staff,
            is_superuser: payload.is_superuser,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(self.lock()?.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<UserModel>, AppError> {
        let mut users: Vec<UserModel> = self.lock()?.users.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<UserModel, AppError> {
        let mut tables = self.lock()?;
        let mut user = tables.users.get(&id).cloned().ok_or(AppError::NotFound)?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(phone_number) = patch.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(is_staff) = patch.is_staff {
            user.is_staff = is_staff;
        }
        if let Some(is_active) = patch.is_active {
            user.is_active = is_active;
        }
        tables.check_unique(&user.email, user.phone_number.as_deref(), Some(id))?;

        user.updated_at = Utc::now();
        tables.users.insert(id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TokenRepository for InMemoryStore {
    async fn replace_token(&self, user_id: Uuid, key_hash: String) -> Result<(), AppError> {
        let mut tables = self.lock()?;
        if !tables.users.contains_key(&user_id) {
            return Err(AppError::NotFound);
        }
        tables.tokens.insert(user_id, key_hash);
        Ok(())
    }

    async fn find_token_hash(&self, user_id: Uuid) -> Result<Option<String>, AppError> {
        Ok(self.lock()?.tokens.get(&user_id).cloned())
    }
}
