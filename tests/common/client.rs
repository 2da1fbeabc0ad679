use account_auth::{
    services::{accounts::AccountManager, auth::AuthTokenService},
    types::user::NewAccount,
};
use actix_web::{middleware, web, App};
use uuid::Uuid;

use super::{test_data::PASSWORD, TestContext};

pub struct TestClient {
    pub accounts: AccountManager,
    pub auth: AuthTokenService,
}

impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient { accounts: ctx.accounts.clone(), auth: ctx.auth.clone() }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .app_data(web::Data::new(self.accounts.clone()))
            .app_data(web::Data::new(self.auth.clone()))
            .configure(account_auth::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (Uuid, String) {
        let email = format!("admin-{}@test.com", Uuid::new_v4());
        let admin = self.accounts
            .create_superuser(&email, PASSWORD)
            .await
            .expect("Failed to create admin");
        let token = self.auth.authenticate(&email, PASSWORD).await.expect("Failed to log in admin");
        (admin.id, token)
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: Option<String>) -> (Uuid, String) {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));
        let user = self.accounts
            .create_user(NewAccount {
                email: email.clone(),
                password: PASSWORD.to_string(),
                phone_number: None,
                name: Some("Test User".to_string()),
            })
            .await
            .expect("Failed to create user");
        let token = self.auth.authenticate(&email, PASSWORD).await.expect("Failed to log in user");
        (user.id, token)
    }
}
