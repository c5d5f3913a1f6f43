use crate::error::{Result, SliceError};
use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;

/// Key/value configuration store
///
/// Seeded from the process environment (after loading `.env` if present).
/// Tests build one from explicit pairs instead.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let service = Self::new();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let service = Self::new();
        for (key, value) in pairs {
            service.set(key, value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse `key` into `T`, falling back to `default` when the key is unset.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| SliceError::config(format!("Invalid {}='{}': {}", key, raw, e))),
            None => Ok(default),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub log_level: String,
    pub seed_db: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_service(&ConfigService::from_env())
    }

    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let host = config.get_or("HOST", "0.0.0.0");
        let port = config.parse_or("PORT", 3000u16)?;
        let url = config.get_or("DATABASE_URL", "sqlite::memory:");
        let max_connections = config.parse_or("DB_MAX_CONNECTIONS", 5u32)?;
        if max_connections == 0 {
            return Err(SliceError::config("DB_MAX_CONNECTIONS must be at least 1"));
        }
        let log_level = config.get_or("LOG_LEVEL", "info");
        let seed_db = config.parse_or("SEED_DB", false)?;

        tracing::debug!(%host, port, max_connections, seed_db, "Configuration loaded");

        Ok(Self {
            host,
            port,
            database: DatabaseConfig {
                url,
                max_connections,
            },
            log_level,
            seed_db,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
