use std::env;
use std::sync::OnceLock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {key} is invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub bind_address: String,
    pub port: u16,
    pub db_url: String,
    pub db_max_connections: u32,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn parse_env<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: Self::parse_env("PORT", 8080)?,
            db_url: Self::get_env("DATABASE_URL")?,
            db_max_connections: Self::parse_env("DB_MAX_CONNECTIONS", 10)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Loads the config once; later calls return the same instance.
pub fn init() -> Result<&'static EnvConfig, ConfigError> {
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let config = EnvConfig::from_env()?;
    Ok(CONFIG.get_or_init(|| config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_joins_host_and_port() {
        let config = EnvConfig {
            bind_address: "127.0.0.1".into(),
            port: 9000,
            db_url: "sqlite::memory:".into(),
            db_max_connections: 1,
        };
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn unset_optional_values_fall_back() {
        let port: u16 = EnvConfig::parse_env("ACCOUNT_AUTH_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }
}
