//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::constants::DEFAULT_MAX_UPLOAD_BYTES;
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    /// Schema holding the campaign, lookup and log tables.
    pub schema: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl AppConfig {
    /// Reads the process environment as-is; `.env` is loaded by the binary.
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        tracing::debug!("Loading configuration for environment {}", env);
        let builder = Self::defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true));

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, AppError> {
        Ok(builder
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "fca-console")?
            .set_default("app.max_upload_bytes", DEFAULT_MAX_UPLOAD_BYTES as u64)?
            .set_default("database.schema", "public")?
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_seconds", 3)?)
    }

    /// The schema name is spliced into SQL text, so only plain identifiers are accepted.
    pub fn validate(&self) -> Result<(), AppError> {
        let schema = &self.database.schema;
        let plain = !schema.is_empty()
            && schema
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !plain {
            return Err(AppError::InvalidConfig(format!(
                "database.schema must be a plain identifier, got {:?}",
                schema
            )));
        }
        if self.app.max_upload_bytes == 0 {
            return Err(AppError::InvalidConfig(
                "app.max_upload_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
