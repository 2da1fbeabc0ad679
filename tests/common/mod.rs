use std::sync::Arc;

use account_auth::db::database_service::DatabaseService;
use account_auth::services::{self, accounts::AccountManager, auth::AuthTokenService};
use account_auth::utils::token::SecretHasher;
use sea_orm::ConnectOptions;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
    pub accounts: AccountManager,
    pub auth: AuthTokenService,
}

impl TestContext {
    /// Fresh migrated in-memory SQLite database per test.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Arc::new(
            DatabaseService::connect(options)
                .await
                .expect("Failed to initialize DatabaseService")
        );
        let hasher = Arc::new(SecretHasher::with_params(1024, 1, 1).expect("argon2 params"));
        let (accounts, auth) = services::from_store(db.clone(), hasher);

        TestContext { db, accounts, auth }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use account_auth::types::user::RUserCreate;

    pub const PASSWORD: &str = "testPassword123";

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            email: Some("test@example.com".to_string()),
            password: Some(PASSWORD.to_string()),
            phone_number: Some("+1-202-555-0111".to_string()),
            name: None,
        }
    }

    pub fn sample_user_with(email: &str, phone_number: Option<&str>) -> RUserCreate {
        RUserCreate {
            email: Some(email.to_string()),
            password: Some(PASSWORD.to_string()),
            phone_number: phone_number.map(str::to_string),
            name: Some("Test User".to_string()),
        }
    }
}
