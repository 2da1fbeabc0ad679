use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum User {
    Table,
    PhoneNumber,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // NULLs never collide, so accounts without a phone number can coexist
        m.create_index(
            Index::create()
                .name("uk_user_phone_number")
                .table(User::Table)
                .col(User::PhoneNumber)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("uk_user_phone_number").table(User::Table).to_owned()).await?;
        Ok(())
    }
}
