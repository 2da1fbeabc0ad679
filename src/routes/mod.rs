use crate::types::error::AppError;
use crate::utils::webutils::{validate_staff_token, validate_token};
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::bearer(validate_token);
    let staff_auth = HttpAuthentication::bearer(validate_staff_token);

    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::field("non_field_errors", err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/user")
            .service(
                web::scope("/create")
                    .service(user::create::create)
            )
            .service(
                web::scope("/token")
                    .service(user::token::token)
            )
            .service(
                web::scope("/me")
                    .service(user::me::me)
                    .wrap(user_auth)
            )
    );
    cfg.service(
        web::scope("/admin/users")
            .service(admin::users::list)
            .service(admin::users::add)
            .service(admin::users::detail)
            .service(admin::users::change)
            .wrap(staff_auth)
    );
}
