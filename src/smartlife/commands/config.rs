use crate::commands::DataPaths;
use crate::config::{SmartlifeConfig, CONFIG_KEYS};
use crate::error::{Result, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Runs a config action against the config file of `paths` and returns the
/// `(key, value)` pairs to display.
pub fn run(paths: &DataPaths, action: ConfigAction) -> Result<Vec<(String, String)>> {
    let mut config = SmartlifeConfig::load(paths.config_dir())?;

    match action {
        ConfigAction::ShowAll => Ok(CONFIG_KEYS
            .iter()
            .filter_map(|key| config.get(key).map(|v| (key.to_string(), v)))
            .collect()),
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| StoreError::Config(format!("unknown config key: {}", key)))?;
            Ok(vec![(key, value)])
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(paths.config_dir())?;
            let stored = config.get(&key).unwrap_or(value);
            Ok(vec![(key, stored)])
        }
    }
}
