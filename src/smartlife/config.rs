use crate::error::{Result, StoreError};
use crate::model::{Preferences, Theme};
use crate::store::{is_valid_key, StorageKeys, DEFAULT_KEY_PREFIX};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a data directory, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SmartlifeConfig {
    /// Namespace prepended to every storage key (`<prefix>_events`, ...).
    /// Empty means bare key names.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Seed example records the first time a data directory is opened
    #[serde(default = "default_seed_on_open")]
    pub seed_on_open: bool,

    /// What preferences resolve to when nothing (or only part) is stored.
    /// Fields missing here fall back to the built-in defaults.
    #[serde(default, deserialize_with = "deserialize_preferences")]
    pub default_preferences: Preferences,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_seed_on_open() -> bool {
    true
}

fn deserialize_preferences<'de, D>(deserializer: D) -> std::result::Result<Preferences, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Value::deserialize(deserializer)?;
    Ok(Preferences::merged_over(&Preferences::default(), &stored))
}

impl Default for SmartlifeConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            seed_on_open: default_seed_on_open(),
            default_preferences: Preferences::default(),
        }
    }
}

/// Keys accepted by [`SmartlifeConfig::get`] and [`SmartlifeConfig::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "key-prefix",
    "seed-on-open",
    "default-user-name",
    "default-theme",
    "default-notifications",
];

impl SmartlifeConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StoreError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| StoreError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StoreError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StoreError::Serialization)?;
        fs::write(config_path, content).map_err(StoreError::Io)?;
        Ok(())
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::with_prefix(self.key_prefix.clone())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "key-prefix" => self.key_prefix.clone(),
            "seed-on-open" => self.seed_on_open.to_string(),
            "default-user-name" => self.default_preferences.user_name.clone(),
            "default-theme" => self.default_preferences.theme.to_string(),
            "default-notifications" => self.default_preferences.notifications.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "key-prefix" => {
                if !value.is_empty() && !is_valid_key(value) {
                    return Err(StoreError::Config(format!(
                        "key-prefix may only use letters, digits, '_', '-' and '.' and must not start with '.', got {:?}",
                        value
                    )));
                }
                self.key_prefix = value.to_string()
            }
            "seed-on-open" => self.seed_on_open = parse_bool(key, value)?,
            "default-user-name" => self.default_preferences.user_name = value.to_string(),
            "default-theme" => {
                self.default_preferences.theme = value
                    .parse::<Theme>()
                    .map_err(StoreError::Config)?
            }
            "default-notifications" => {
                self.default_preferences.notifications = parse_bool(key, value)?
            }
            other => return Err(StoreError::Config(format!("unknown config key: {}", other))),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(StoreError::Config(format!(
            "{} expects true or false, got {:?}",
            key, value
        ))),
    }
}
