//! Process configuration read from the environment (after `.env` is loaded).

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_STATIC_DIR: &str = "styles";

/// Connection parameters for the pet-store database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Schema whose tables `/getTables` lists.
    pub name: String,
    pub max_connections: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// Directory served for stylesheets and other static assets.
    pub static_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = DatabaseSettings {
            host: get("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or("DB_PORT", get("DB_PORT"), DEFAULT_DB_PORT)?,
            user: get("DB_USER").unwrap_or_else(|| "root".into()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: get("DB_DATABASE").ok_or(ConfigError::Missing("DB_DATABASE"))?,
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                DEFAULT_MAX_CONNECTIONS,
            )?,
        };

        Ok(Settings {
            database,
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
