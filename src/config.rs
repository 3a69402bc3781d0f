use crate::error::ClientError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

// Build-time default injected via build.rs
const DEFAULT_API_URL: &str = env!("API_URL");

/// Default per-request timeout. The service itself defines none.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime override for the API base URL.
pub const API_URL_ENV: &str = "PETFRIENDS_API_URL";

/// Body text the server sends with 403 on unknown email or wrong password.
pub const USER_NOT_FOUND_TEXT: &str = "This user wasn&#x27;t found in database";

/// Body text the server sends with 403 on a missing or unknown auth key.
pub const MISSING_AUTH_KEY_TEXT: &str = "Please provide &#x27;auth_key&#x27; Header";

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Load the config file and apply the PETFRIENDS_API_URL override.
    pub fn load() -> Result<Self, ClientError> {
        let path = Self::path()?;
        Ok(Self::load_from_path(&path)?.with_env_overrides())
    }

    /// Load config from a specific path, falling back to defaults when absent
    pub fn load_from_path(path: &Path) -> Result<Self, ClientError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(ClientError::ConfigRead)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn path() -> Result<PathBuf, ClientError> {
        let dirs = ProjectDirs::from("ru", "skillfactory", "petfriends")
            .ok_or_else(|| ClientError::Other("Could not determine config directory".to_string()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            self.api_url = url;
        }
        self
    }
}

/// Credentials the end-to-end suite runs with.
///
/// Read from `PETFRIENDS_VALID_EMAIL`, `PETFRIENDS_VALID_PASSWORD`,
/// `PETFRIENDS_INVALID_EMAIL` and `PETFRIENDS_INVALID_PASSWORD`, with a
/// `.env` file honoured if present. The valid pair is required; the invalid
/// pair falls back to values no account should have.
#[derive(Clone)]
pub struct Settings {
    pub valid_email: String,
    pub valid_password: String,
    pub invalid_email: String,
    pub invalid_password: String,
}

const VALID_EMAIL_ENV: &str = "PETFRIENDS_VALID_EMAIL";
const VALID_PASSWORD_ENV: &str = "PETFRIENDS_VALID_PASSWORD";
const INVALID_EMAIL_ENV: &str = "PETFRIENDS_INVALID_EMAIL";
const INVALID_PASSWORD_ENV: &str = "PETFRIENDS_INVALID_PASSWORD";

const FALLBACK_INVALID_EMAIL: &str = "nobody@petfriends.invalid";
const FALLBACK_INVALID_PASSWORD: &str = "not-the-password";

impl Settings {
    pub fn from_env() -> Result<Self, ClientError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Ok(Self {
            valid_email: non_empty(VALID_EMAIL_ENV)
                .ok_or(ClientError::MissingSetting(VALID_EMAIL_ENV))?,
            valid_password: non_empty(VALID_PASSWORD_ENV)
                .ok_or(ClientError::MissingSetting(VALID_PASSWORD_ENV))?,
            invalid_email: non_empty(INVALID_EMAIL_ENV)
                .unwrap_or_else(|| FALLBACK_INVALID_EMAIL.to_string()),
            invalid_password: non_empty(INVALID_PASSWORD_ENV)
                .unwrap_or_else(|| FALLBACK_INVALID_PASSWORD.to_string()),
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("valid_email", &self.valid_email)
            .field("valid_password", &"***")
            .field("invalid_email", &self.invalid_email)
            .field("invalid_password", &"***")
            .finish()
    }
}
