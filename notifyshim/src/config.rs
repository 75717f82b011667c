//! Notifier configuration.
//!
//! Values come from, in increasing priority:
//! 1. built-in defaults
//! 2. a TOML or JSON file (`NOTIFYSHIM_CONFIG`, or the first of
//!    [`probe_config_paths`] that exists)
//! 3. environment overrides
//!
//! ## Environment Variables
//! - `NOTIFYSHIM_CONFIG`: config file path
//! - `NOTIFYSHIM_APP_NAME`: display name of the sending application
//! - `NOTIFYSHIM_APP_ID`: explicit AUMI (Windows) or bundle id (macOS)
//! - `NOTIFYSHIM_ICON_POLICY`: `drop_invalid` or `reject`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{NotifyError, Result};

pub const CONFIG_ENV: &str = "NOTIFYSHIM_CONFIG";
pub const APP_NAME_ENV: &str = "NOTIFYSHIM_APP_NAME";
pub const APP_ID_ENV: &str = "NOTIFYSHIM_APP_ID";
pub const ICON_POLICY_ENV: &str = "NOTIFYSHIM_ICON_POLICY";

/// What to do with an icon path that doesn't point at a readable image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPolicy {
    /// Send the notification without an icon.
    #[default]
    DropInvalid,
    /// Fail the dispatch.
    Reject,
}

impl std::str::FromStr for IconPolicy {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drop_invalid" | "drop" => Ok(IconPolicy::DropInvalid),
            "reject" => Ok(IconPolicy::Reject),
            other => Err(NotifyError::Config(format!("unknown icon policy: {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub app_name: String,
    pub company: String,
    pub product: String,
    pub sub_product: String,
    pub version: String,
    pub app_id: Option<String>,
    pub icon_policy: IconPolicy,
    pub handler_ttl_secs: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            app_name: "NotifyShim".to_string(),
            company: "NotifyShim".to_string(),
            product: "NotifyShim".to_string(),
            sub_product: String::new(),
            version: String::new(),
            app_id: None,
            icon_policy: IconPolicy::DropInvalid,
            handler_ttl_secs: 600,
        }
    }
}

impl NotifierConfig {
    pub fn handler_ttl(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.handler_ttl_secs)
    }
}

/// Load configuration: file if one is found, defaults otherwise, then
/// environment overrides on top.
///
/// # Errors
/// Returns `NotifyError::Config` if a file exists but can't be read or
/// parsed, or an override has an invalid value.
pub fn load() -> Result<NotifierConfig> {
    let path = match env_non_empty(CONFIG_ENV) {
        Some(p) => Some(PathBuf::from(p)),
        None => probe_config_paths(),
    };

    let config = match path {
        Some(p) => load_from_file(&p)?,
        None => {
            tracing::debug!("no config file found, using defaults");
            NotifierConfig::default()
        }
    };
    apply_env_overrides(config)
}

/// # Errors
/// Returns `NotifyError::Config` if the file is missing or malformed.
pub fn load_from_file(path: &Path) -> Result<NotifierConfig> {
    if !path.exists() {
        return Err(NotifyError::Config(format!("config file not found: {}", path.display())));
    }
    tracing::info!(path = %path.display(), "loading notifier configuration");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| NotifyError::Config(format!("failed to read config file: {e}")))?;
    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<NotifierConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| NotifyError::Config(format!("invalid TOML: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NotifyError::Config(format!("invalid JSON: {e}"))),
        other => Err(NotifyError::Config(format!("unsupported config format: {other}"))),
    }
}

/// Candidate config files, working directory first, then next to the
/// executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("notifyshim.toml"));
        candidates.push(cwd.join("notifyshim.json"));
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("notifyshim.toml"));
            candidates.push(dir.join("notifyshim.json"));
        }
    }

    candidates.into_iter().find(|p| p.is_file())
}

fn apply_env_overrides(mut config: NotifierConfig) -> Result<NotifierConfig> {
    if let Some(name) = env_non_empty(APP_NAME_ENV) {
        config.app_name = name;
    }
    if let Some(id) = env_non_empty(APP_ID_ENV) {
        config.app_id = Some(id);
    }
    if let Some(policy) = env_non_empty(ICON_POLICY_ENV) {
        config.icon_policy = policy.parse()?;
    }
    Ok(config)
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
