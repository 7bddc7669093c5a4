#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const BACKEND_URL_ENV: &str = "BACKEND_URL";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const CONTACT_PATH: &str = "/api/contact";

/// Where contact form submissions are sent. Resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `BACKEND_URL`, falling back to the local development server.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BACKEND_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        }
    }

    pub fn contact_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CONTACT_PATH)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.base_url", &self.base_url)
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command, LocalStorage};
