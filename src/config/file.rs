use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::BandwidthConfig;
use crate::error::{BandwidthError, Result};

/// One named set of credentials in a credentials file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub account_id: String,
    pub username: String,
    pub password: String,
    pub voice_base_url: Option<String>,
    pub webrtc_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// TOML credentials file: one table per profile. The client only reads it;
/// creating the file and restricting its permissions is left to the operator.
///
/// ```toml
/// [default]
/// account_id = "9900000"
/// username = "api-user"
/// password = "secret"
///
/// [staging]
/// account_id = "9900001"
/// username = "api-user"
/// password = "secret"
/// voice_base_url = "https://voice.staging.example.com/api/v2/accounts"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CredentialsFile {
    profiles: BTreeMap<String, Profile>,
}

impl CredentialsFile {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            BandwidthError::Configuration(format!(
                "unable to read credentials file {}: {err}",
                path.display()
            ))
        })?;
        Self::parse(&raw).map_err(|err| err.context(format!("credentials file {}", path.display())))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| BandwidthError::Configuration(err.to_string()))
    }

    /// Resolve a profile into a full config, applying defaults for unset fields.
    pub fn profile(&self, name: &str) -> Result<BandwidthConfig> {
        let key = normalize_profile(name);
        let profile = self.profiles.get(&key).ok_or_else(|| {
            BandwidthError::Configuration(format!("profile {key:?} not found in credentials file"))
        })?;

        let mut config = BandwidthConfig::new(
            profile.account_id.clone(),
            profile.username.clone(),
            profile.password.clone(),
        );
        if let Some(url) = &profile.voice_base_url {
            config.voice_base_url = url.clone();
        }
        if let Some(url) = &profile.webrtc_base_url {
            config.webrtc_base_url = url.clone();
        }
        if let Some(secs) = profile.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config.validate()?;
        Ok(config)
    }
}

/// `~/.bandwidth/credentials.toml`, or a relative `.bandwidth` directory when no
/// home directory can be determined.
pub fn default_credentials_path() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".bandwidth"))
        .unwrap_or_else(|| PathBuf::from(".bandwidth"))
        .join("credentials.toml")
}

fn normalize_profile(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "default".to_string()
    } else {
        trimmed.to_ascii_lowercase()
    }
}
