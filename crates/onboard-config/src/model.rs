use std::{env, fmt, path::PathBuf, time::Duration};

use onboard_domain::PersistPolicy;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "ONBOARD_HOME";

/// Upper bound for `submit_delay_ms`, also applied to hand-edited files.
const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Stores user-configurable onboarding preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub persist_policy: PersistPolicy,
    #[serde(default)]
    pub submit_delay_ms: u64,
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            persist_policy: PersistPolicy::default(),
            submit_delay_ms: 0,
            storage_key: Self::default_storage_key(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_storage_key() -> String {
        "onboarding-draft".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.min(MAX_SUBMIT_DELAY_MS))
    }

    pub fn get(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::PersistPolicy => self.persist_policy.to_string(),
            ConfigKey::SubmitDelayMs => self.submit_delay_ms.to_string(),
            ConfigKey::StorageKey => self.storage_key.clone(),
            ConfigKey::Color => self.ui_color_enabled.to_string(),
        }
    }

    /// Parses `value` for `key` and applies it; the config is untouched on error.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };
        let trimmed = value.trim();
        match key {
            ConfigKey::PersistPolicy => {
                self.persist_policy = PersistPolicy::parse(trimmed)
                    .ok_or_else(|| invalid("expected `on-transition` or `every-change`"))?;
            }
            ConfigKey::SubmitDelayMs => {
                let millis: u64 = trimmed
                    .parse()
                    .map_err(|_| invalid("expected a whole number of milliseconds"))?;
                if millis > MAX_SUBMIT_DELAY_MS {
                    return Err(invalid("must be at most 60000"));
                }
                self.submit_delay_ms = millis;
            }
            ConfigKey::StorageKey => {
                if trimmed.is_empty() {
                    return Err(invalid("storage key cannot be empty"));
                }
                self.storage_key = trimmed.to_string();
            }
            ConfigKey::Color => {
                self.ui_color_enabled = parse_switch(trimmed)
                    .ok_or_else(|| invalid("expected `on` or `off`"))?;
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(ConfigKey, String)> {
        ConfigKey::ALL
            .iter()
            .map(|key| (*key, self.get(*key)))
            .collect()
    }
}

/// Keys accepted by `config set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    PersistPolicy,
    SubmitDelayMs,
    StorageKey,
    Color,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::PersistPolicy,
        ConfigKey::SubmitDelayMs,
        ConfigKey::StorageKey,
        ConfigKey::Color,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::PersistPolicy => "persist-policy",
            ConfigKey::SubmitDelayMs => "submit-delay-ms",
            ConfigKey::StorageKey => "storage-key",
            ConfigKey::Color => "color",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        ConfigKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == normalized)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the data directory: `$ONBOARD_HOME`, else `~/.onboard`.
pub fn resolve_home() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".onboard")
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
