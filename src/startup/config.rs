//! Startup configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Only the API key is required for answers; the server starts without
//! it and every query then reports an authentication failure.

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{TutorError, TutorResult};
use crate::tutor::DEFAULT_BASE_URL;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the upstream base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the listen address.
pub const BIND_ENV: &str = "TUTOR_BIND";
/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Configuration for the tutor server.
///
/// ```ignore
/// let config = TutorConfig::default()
///     .with_api_key("sk-...")
///     .with_bind_addr("0.0.0.0:8080".parse()?);
/// ```
#[derive(Clone)]
pub struct TutorConfig {
    /// Upstream API key (None when unset or blank)
    pub api_key: Option<String>,
    /// Base URL of the chat-completion API
    pub base_url: String,
    /// Address the web server binds to
    pub bind_addr: SocketAddr,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8501)),
        }
    }
}

impl fmt::Debug for TutorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TutorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl TutorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the upstream base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Build from the process environment.
    pub fn from_env() -> TutorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> TutorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty());

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(bind) = lookup(BIND_ENV).filter(|b| !b.trim().is_empty()) {
            config.bind_addr = parse_bind_addr(&bind)?;
        }

        Ok(config)
    }
}

/// Parse a listen address, reporting which setting was wrong.
pub fn parse_bind_addr(value: &str) -> TutorResult<SocketAddr> {
    value.trim().parse().map_err(|e: std::net::AddrParseError| TutorError::Config {
        key: BIND_ENV.to_string(),
        message: format!("{} ({:?})", e, value),
    })
}

/// Load `.env` from the working directory or its parents, if present.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Load a specific env file.
pub fn load_dotenv_from(path: &Path) -> TutorResult<()> {
    dotenvy::from_path(path).map_err(|e| TutorError::Config {
        key: path.display().to_string(),
        message: e.to_string(),
    })
}
