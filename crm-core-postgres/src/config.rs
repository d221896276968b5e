use anyhow::Result;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CrmSettings {
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl CrmSettings {
    /// Loads `.env`, then the optional `config/crm.*` file, then `CRM__*` variables
    /// (`CRM__DATABASE__URL`, ...). `DATABASE_URL` is the fallback database url.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder()
            .set_default("database.max_connections", 5)?
            .set_default("database.acquire_timeout_seconds", 30)?;
        if let Ok(url) = std::env::var("DATABASE_URL") {
            builder = builder.set_default("database.url", url)?;
        }

        let config = builder
            .add_source(File::with_name("config/crm").required(false))
            .add_source(
                Environment::with_prefix("CRM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: CrmSettings = config.try_deserialize()?;
        Ok(settings)
    }
}

impl DatabaseConfig {
    pub async fn connect(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_seconds))
            .connect(&self.url)
            .await
    }
}
