use std::sync::Arc;

use account_auth::config;
use account_auth::db::database_service::DatabaseService;
use account_auth::services;
use account_auth::utils::token::SecretHasher;
use account_auth::utils::validation::PasswordPolicy;
use clap::Parser;
use tracing::info;

/// Create a staff + superuser account, e.g. to bootstrap admin access.
#[derive(Parser)]
#[command(name = "create_superuser")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Login email of the new superuser
    #[arg(long)]
    email: String,

    /// Password, falls back to SUPERUSER_PASSWORD
    #[arg(long, env = "SUPERUSER_PASSWORD", hide_env_values = true)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = config::init()?;

    PasswordPolicy::default().enforce(&cli.password)?;

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url, config.db_max_connections).await?
    );
    let (accounts, _) = services::from_store(database_service, Arc::new(SecretHasher::default()));

    let user = accounts.create_superuser(&cli.email, &cli.password).await?;
    info!("Superuser {} created ({})", user.email, user.id);

    Ok(())
}
