use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    Email,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("uk_user_email").table(User::Table).to_owned()).await?;

        // expression index, same statement on postgres and sqlite
        m.get_connection()
            .execute_unprepared(r#"CREATE UNIQUE INDEX "uk_user_email_lower" ON "user" (LOWER("email"))"#)
            .await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("uk_user_email_lower").table(User::Table).to_owned()).await?;
        m.create_index(
            Index::create()
                .name("uk_user_email")
                .table(User::Table)
                .col(User::Email)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }
}
