use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::routes::DEFAULT_HOST;
use crate::token;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and authority of the store, e.g. `https://www.jsonstore.io`
    pub host: String,
    /// Namespace token; `None` asks the remote for a fresh one on connect
    pub token: Option<String>,
    /// Prefix applied to every call path
    pub path: String,
    /// Per-request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            token: None,
            path: String::new(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from `JSONSTORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("JSONSTORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let token = lookup("JSONSTORE_TOKEN").filter(|t| !t.is_empty());

        let path = lookup("JSONSTORE_PATH").unwrap_or_default();

        let timeout = match lookup("JSONSTORE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .parse::<u64>()
                    .context("JSONSTORE_TIMEOUT_SECS must be a whole number of seconds")?;
                anyhow::ensure!(secs > 0, "JSONSTORE_TIMEOUT_SECS must be greater than zero");
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            host,
            token,
            path,
            timeout,
        })
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store host: {}", self.host);
        tracing::info!(
            "  Token: {}",
            self.token
                .as_deref()
                .map(token::redact)
                .unwrap_or_else(|| "none (will request one)".to_string())
        );
        tracing::info!(
            "  Base path: {}",
            if self.path.is_empty() { "/" } else { self.path.as_str() }
        );
        match self.timeout {
            Some(timeout) => tracing::info!("  Request timeout: {:?}", timeout),
            None => tracing::info!("  Request timeout: transport default"),
        }
    }
}
