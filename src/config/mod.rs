//! Client configuration.
//!
//! Credentials are always passed explicitly through [`BandwidthConfig`]. The
//! only places that look at the process environment or the filesystem are
//! [`BandwidthConfig::from_env`], [`BandwidthConfig::from_file`] and
//! [`BandwidthConfig::load`], which callers invoke deliberately.

pub mod file;

pub use file::{default_credentials_path, CredentialsFile, Profile};

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::error::{BandwidthError, Result};

pub const DEFAULT_VOICE_BASE_URL: &str = "https://voice.bandwidth.com/api/v2/accounts";
pub const DEFAULT_WEBRTC_BASE_URL: &str = "https://api.webrtc.bandwidth.com/v1/accounts";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_ACCOUNT_ID: &str = "BANDWIDTH_ACCOUNT_ID";
const ENV_USERNAME: &str = "BANDWIDTH_USERNAME";
const ENV_PASSWORD: &str = "BANDWIDTH_PASSWORD";
const ENV_VOICE_BASE_URL: &str = "BANDWIDTH_VOICE_BASE_URL";
const ENV_WEBRTC_BASE_URL: &str = "BANDWIDTH_WEBRTC_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "BANDWIDTH_TIMEOUT_SECS";

/// Account credentials and endpoints for the Voice and WebRTC APIs.
#[derive(Clone, PartialEq, Eq)]
pub struct BandwidthConfig {
    pub account_id: String,
    pub username: String,
    pub password: String,
    pub voice_base_url: String,
    pub webrtc_base_url: String,
    pub timeout: Duration,
}

impl fmt::Debug for BandwidthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BandwidthConfig")
            .field("account_id", &self.account_id)
            .field("username", &self.username)
            .field("password", &"..")
            .field("voice_base_url", &self.voice_base_url)
            .field("webrtc_base_url", &self.webrtc_base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BandwidthConfig {
    pub fn new(
        account_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            username: username.into(),
            password: password.into(),
            voice_base_url: DEFAULT_VOICE_BASE_URL.to_string(),
            webrtc_base_url: DEFAULT_WEBRTC_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_voice_base_url(mut self, url: impl Into<String>) -> Self {
        self.voice_base_url = url.into();
        self
    }

    pub fn with_webrtc_base_url(mut self, url: impl Into<String>) -> Self {
        self.webrtc_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from environment variables (`BANDWIDTH_ACCOUNT_ID`, `BANDWIDTH_USERNAME`,
    /// `BANDWIDTH_PASSWORD`, plus optional base URL and timeout overrides).
    ///
    /// A `.env` file in the working directory is honoured if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Self::new(
            required_env(ENV_ACCOUNT_ID)?,
            required_env(ENV_USERNAME)?,
            required_env(ENV_PASSWORD)?,
        );

        if let Some(url) = optional_env(ENV_VOICE_BASE_URL) {
            config.voice_base_url = url;
        }
        if let Some(url) = optional_env(ENV_WEBRTC_BASE_URL) {
            config.webrtc_base_url = url;
        }
        if let Some(raw) = optional_env(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.parse().map_err(|_| {
                BandwidthError::Configuration(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Load one profile from a TOML credentials file.
    pub fn from_file(path: &Path, profile: &str) -> Result<Self> {
        CredentialsFile::read(path)?.profile(profile)
    }

    /// Layered initialisation: environment first, then the default credentials
    /// file (`~/.bandwidth/credentials.toml`).
    pub fn load(profile: &str) -> Result<Self> {
        match Self::from_env() {
            Ok(config) => Ok(config),
            Err(env_err) => {
                let path = default_credentials_path();
                if !path.exists() {
                    return Err(env_err);
                }
                tracing::debug!(path = %path.display(), profile, "Loading Bandwidth credentials file");
                Self::from_file(&path, profile)
            }
        }
    }

    /// Reject configs that cannot possibly authenticate.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("account_id", &self.account_id),
            ("username", &self.username),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(BandwidthError::Configuration(format!("{name} is empty")));
            }
        }
        Ok(())
    }
}

fn required_env(key: &str) -> Result<String> {
    optional_env(key)
        .ok_or_else(|| BandwidthError::Configuration(format!("{key} is not set")))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
