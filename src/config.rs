// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! `config.env` and `.env` are read first when present, so local setups can
//! keep their settings in a file.

use std::env;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Where activity documents are stored, parsed from `DATABASE_URL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// `firestore://<project-id>`
    Firestore { project_id: String },
    /// `memory://` (process-local, lost on restart)
    Memory,
}

impl StoreConfig {
    /// Parse a store connection string.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        let (scheme, rest) = url
            .split_once("://")
            .ok_or_else(|| ConfigError::Invalid("DATABASE_URL", url.to_string()))?;

        match scheme.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreConfig::Memory),
            "firestore" => {
                let project_id = rest.trim_end_matches('/');
                if project_id.is_empty() || project_id.contains('/') {
                    return Err(ConfigError::Invalid("DATABASE_URL", url.to_string()));
                }
                Ok(StoreConfig::Firestore {
                    project_id: project_id.to_string(),
                })
            }
            _ => Err(ConfigError::Invalid("DATABASE_URL", url.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Document store to connect to
    pub store: StoreConfig,
    /// Restricts CORS to this origin (plus localhost). Any origin when unset.
    pub frontend_url: Option<String>,
}

impl Config {
    /// Config for tests: in-memory store, default port.
    pub fn test_default() -> Self {
        Self {
            port: DEFAULT_PORT,
            store: StoreConfig::Memory,
            frontend_url: None,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename("config.env").ok();
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
            store: StoreConfig::parse(&database_url)?,
            frontend_url: env::var("FRONTEND_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
