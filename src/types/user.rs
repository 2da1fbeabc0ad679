use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration / admin-add body. Every field is optional on the wire so that
/// missing values come back as field errors instead of a deserialization failure.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RUserCreate {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Admin change body.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RUserUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_staff: Option<bool>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Input to the account manager once the boundary checks passed.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub name: Option<String>,
}

/// Row handed to a repository; the password is already hashed.
#[derive(Debug, Clone)]
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub name: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Partial update; `phone_number: Some(None)` clears the number.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub is_staff: Option<bool>,
    pub is_active: Option<bool>,
}

/// Public representation, never carries the password.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct UserRes {
    pub email: String,
    pub phone_number: Option<String>,
    pub name: String,
}

impl From<entity::user::Model> for UserRes {
    fn from(user: entity::user::Model) -> Self {
        Self { email: user.email, phone_number: user.phone_number, name: user.name }
    }
}

/// Admin list/detail representation.
#[derive(Serialize, Deserialize, Debug)]
pub struct AdminUserRes {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl From<entity::user::Model> for AdminUserRes {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone_number: user.phone_number,
            is_active: user.is_active,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
        }
    }
}
