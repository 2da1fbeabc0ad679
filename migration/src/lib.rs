pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_user_table;
mod m20220719_000002_unique_user_phone_number;
mod m20220720_000003_create_auth_token_table;
mod m20220722_000004_case_insensitive_user_email;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_user_table::Migration),
            Box::new(m20220719_000002_unique_user_phone_number::Migration),
            Box::new(m20220720_000003_create_auth_token_table::Migration),
            Box::new(m20220722_000004_case_insensitive_user_email::Migration),
        ]
    }
}
