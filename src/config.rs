use std::env;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3200;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub allowed_origins: Vec<String>,
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(p) => p
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {p:?}"))?,
            None => DEFAULT_PORT,
        };

        let shutdown_timeout_secs = match lookup("SHUTDOWN_TIMEOUT_SECS") {
            Some(s) => s
                .trim()
                .parse()
                .with_context(|| format!("SHUTDOWN_TIMEOUT_SECS is not a number: {s:?}"))?,
            None => DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty() && *s != "*")
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            allowed_origins,
            shutdown_timeout_secs,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
