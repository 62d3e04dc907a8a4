use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "./conf.json";
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_connection: String,
    pub bind_address: String,
    pub jwt_secret: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_retry_interval_secs")]
    pub db_retry_interval_secs: u64,
    #[serde(default = "default_db_retry_timeout_secs")]
    pub db_retry_timeout_secs: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_token_ttl_hours() -> i64 {
    24
}

fn default_max_connections() -> u32 {
    10
}

fn default_db_retry_interval_secs() -> u64 {
    1
}

fn default_db_retry_timeout_secs() -> u64 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads the JSON file named by `CONFIG_FILE` (default `./conf.json`),
    /// then applies `CLOUDY_*` environment overrides.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_file(&path)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::new(path, ::config::FileFormat::Json))
            .add_source(::config::Environment::with_prefix("CLOUDY"))
            .build()
            .with_context(|| format!("unable to read config file {path}"))?
            .try_deserialize::<Config>()
            .with_context(|| format!("invalid config file {path}"))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            anyhow::bail!("jwt_secret must not be empty");
        }
        if self.token_ttl_hours <= 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            anyhow::bail!("token_ttl_hours must be between 1 and {}", MAX_TOKEN_TTL_HOURS);
        }
        if self.max_connections == 0 {
            anyhow::bail!("max_connections must be positive");
        }
        Ok(())
    }
}
