//! Common CLI utility functions shared across commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use volforce_core::config::default_config_path;
use volforce_core::{Config, JsonFileStore, Tracker};

/// Load the config file, from `path` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    let config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    debug!("Config: {:?}", config);
    Ok(config)
}

/// The plays file: the `--store` override, or the configured path.
pub fn store_path(store: Option<&Path>, config: &Config) -> PathBuf {
    store
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.storage.path.clone())
}

/// Open the tracker over the plays file.
pub fn open_tracker(path: &Path) -> Result<Tracker<JsonFileStore>> {
    Tracker::open(JsonFileStore::new(path))
        .with_context(|| format!("Failed to load plays from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path_override() {
        let config = Config::default();
        assert_eq!(
            store_path(Some(Path::new("mine.json")), &config),
            PathBuf::from("mine.json")
        );
        assert_eq!(store_path(None, &config), config.storage.path);
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("none.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_open_tracker_on_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = open_tracker(&dir.path().join("plays.json")).unwrap();
        assert_eq!(tracker.plays().len(), 1);
    }
}
