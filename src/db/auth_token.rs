use crate::db::database_service::DatabaseService;
use crate::db::repository::TokenRepository;
use crate::types::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use entity::auth_token::{ActiveModel as TokenActive, Column, Entity as AuthToken};
use sea_orm::{sea_query::OnConflict, EntityTrait, Set};
use uuid::Uuid;

#[async_trait]
impl TokenRepository for DatabaseService {
    /// Single upsert keyed on `user_id`, so concurrent logins both land on one row.
    async fn replace_token(&self, user_id: Uuid, key_hash: String) -> Result<(), AppError> {
        AuthToken::insert(TokenActive {
            user_id: Set(user_id),
            key_hash: Set(key_hash),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([Column::KeyHash, Column::CreatedAt])
                .to_owned(),
        )
        .exec_without_returning(&self.database_connection)
        .await?;

        Ok(())
    }

    async fn find_token_hash(&self, user_id: Uuid) -> Result<Option<String>, AppError> {
        Ok(AuthToken::find_by_id(user_id)
            .one(&self.database_connection)
            .await?
            .map(|t| t.key_hash))
    }
}
