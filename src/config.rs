//! Configuration store for hovercli.
//!
//! Settings live in a YAML file (`~/.hovercli.yaml` by default, or an
//! explicit path from `--config`). Environment variables prefixed with
//! `HOVERCLI_` override file values. The store is an explicit handle passed
//! to callers rather than process-global state, so authentication logic can
//! be tested against in-memory configs.

// Allow dead code: setters mirror the getters for completeness
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::CachedToken;

/// Config file name in the user's home directory
const CONFIG_FILE: &str = ".hovercli.yaml";

/// Default Hover API root
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/";

/// Environment variable prefix for config overrides
const ENV_PREFIX: &str = "HOVERCLI_";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token_expiry: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigData,
}

impl Config {
    /// Load configuration from the given path, or from the default
    /// per-user location. A missing or unreadable config source is an
    /// error: subcommands other than `login` cannot run without one.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut data: ConfigData = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        apply_overrides(&mut data, |key| std::env::var(key).ok());

        Ok(Self { path, data })
    }

    /// Load configuration, starting from an empty config if the file does
    /// not exist yet. Used by `login` to bootstrap a fresh setup.
    pub fn load_or_init(path: Option<&Path>) -> Result<Self> {
        let resolved = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if resolved.exists() {
            Self::load(path)
        } else {
            let mut data = ConfigData::default();
            apply_overrides(&mut data, |key| std::env::var(key).ok());
            Ok(Self {
                path: resolved,
                data,
            })
        }
    }

    /// Persist the in-memory state back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory {}", parent.display())
                })?;
            }
        }
        let contents = serde_yaml::to_string(&self.data)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write config file {}", self.path.display()))
    }

    fn default_path() -> Result<PathBuf> {
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored email, empty string if absent.
    pub fn email(&self) -> &str {
        self.data.email.as_deref().unwrap_or("")
    }

    /// Stored password, empty string if absent.
    pub fn password(&self) -> &str {
        self.data.password.as_deref().unwrap_or("")
    }

    pub fn set_credentials(&mut self, email: String, password: String) {
        self.data.email = Some(email);
        self.data.password = Some(password);
    }

    /// Raw cached token string, empty if absent.
    pub fn auth_token(&self) -> &str {
        self.data.auth_token.as_deref().unwrap_or("")
    }

    /// Cached token with its expiry, if both are present.
    pub fn cached_token(&self) -> Option<CachedToken> {
        match (&self.data.auth_token, self.data.auth_token_expiry) {
            (Some(value), Some(expiry)) => Some(CachedToken {
                value: value.clone(),
                expiry,
            }),
            _ => None,
        }
    }

    pub fn set_token(&mut self, token: CachedToken) {
        self.data.auth_token = Some(token.value);
        self.data.auth_token_expiry = Some(token.expiry);
    }

    /// Drop the cached token so the next authenticate call hits the server.
    pub fn clear_token(&mut self) {
        self.data.auth_token = None;
        self.data.auth_token_expiry = None;
    }

    /// API root, with a trailing slash so endpoints append directly.
    pub fn base_url(&self) -> &str {
        self.data.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn set_base_url(&mut self, base_url: String) {
        self.data.base_url = Some(base_url);
    }
}

/// Apply `HOVERCLI_*` overrides on top of file values. The lookup is
/// injected so the merge logic is testable without touching process env.
fn apply_overrides<F>(data: &mut ConfigData, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(email) = var(&format!("{ENV_PREFIX}EMAIL")) {
        data.email = Some(email);
    }
    if let Some(password) = var(&format!("{ENV_PREFIX}PASSWORD")) {
        data.password = Some(password);
    }
    if let Some(token) = var(&format!("{ENV_PREFIX}AUTH_TOKEN")) {
        data.auth_token = Some(token);
    }
    if let Some(expiry) = var(&format!("{ENV_PREFIX}AUTH_TOKEN_EXPIRY")) {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(&expiry) {
            data.auth_token_expiry = Some(parsed.with_timezone(&Utc));
        }
    }
    if let Some(base_url) = var(&format!("{ENV_PREFIX}BASE_URL")) {
        data.base_url = Some(base_url);
    }
}

// ============================================================================
// Tests
// ============================================================================
