//! Startup configuration, read once from the environment.

use anyhow::{Context, Result};
use std::env;

/// Application configuration.
///
/// All values come from environment variables (a `.env` file is honored when
/// present, see `main`): `MONGO_URI` is required, everything else has a
/// default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// MongoDB connection string.
    pub mongo_uri: String,
    /// Database name, `gestao_roupas` by default.
    pub database: String,
    /// Address the HTTP server binds to, `0.0.0.0:8000` by default.
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let mongo_uri = env::var("MONGO_URI").context("MONGO_URI must be set")?;
        let database = env::var("MONGO_DB").unwrap_or_else(|_| "gestao_roupas".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());

        Ok(Self {
            mongo_uri,
            database,
            bind_addr: format!("{host}:{port}"),
        })
    }
}
