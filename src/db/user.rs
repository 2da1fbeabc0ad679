use crate::db::database_service::DatabaseService;
use crate::db::repository::UserRepository;
use crate::{
    types::{error::AppError, user::{DBUserCreate, UserPatch}},
    utils::token,
};
use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl DatabaseService {
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }
}

#[async_trait]
impl UserRepository for DatabaseService {
    /// Single insert; the unique indexes decide duplicates.
    async fn create(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let now = Utc::now();

        let user = UserActive {
            id: Set(token::new_id()),
            email: Set(payload.email),
            phone_number: Set(payload.phone_number),
            name: Set(payload.name),
            password_hash: Set(payload.password_hash),
            is_active: Set(true),
            is_staff: Set(payload.is_staff),
            is_superuser: Set(payload.is_superuser),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.database_connection).await?)
    }

    async fn list(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::Email)
            .all(&self.database_connection)
            .await?)
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(&id).await?.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(phone_number) = patch.phone_number {
            am.phone_number = Set(phone_number);
        }
        if let Some(is_staff) = patch.is_staff {
            am.is_staff = Set(is_staff);
        }
        if let Some(is_active) = patch.is_active {
            am.is_active = Set(is_active);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }
}
