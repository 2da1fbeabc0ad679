use actix_web::{middleware, web, App, HttpServer};
use account_auth::config;
use account_auth::db::database_service::DatabaseService;
use account_auth::routes::configure_routes;
use account_auth::services;
use account_auth::utils::token::SecretHasher;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = config::init().map_err(std::io::Error::other)?;
    let addr = config.addr();

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url, config.db_max_connections)
            .await
            .map_err(std::io::Error::other)?
    );
    let (accounts, auth) = services::from_store(database_service, Arc::new(SecretHasher::default()));
    let accounts = web::Data::new(accounts);
    let auth = web::Data::new(auth);

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(accounts.clone())
            .app_data(auth.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
