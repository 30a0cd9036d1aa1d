use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BusbookError, Result};

/// App-level config: where the ledger data lives. Distinct from the pay
/// settings document, which is part of the ledger data itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
        }
    }
}

fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BUSBOOK_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("busbook")
}

fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("busbook")
}

pub fn load_config() -> Config {
    let path = config_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)?;
    let json =
        serde_json::to_string_pretty(config).map_err(|e| BusbookError::Config(e.to_string()))?;
    std::fs::write(config_path(), format!("{json}\n"))?;
    Ok(())
}

pub fn get_data_dir() -> PathBuf {
    PathBuf::from(&load_config().data_dir)
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| PathBuf::from(path))
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("BUSBOOK_CONFIG_DIR", dir.path());

        let config = Config {
            data_dir: "/tmp/test".to_string(),
        };
        save_config(&config).unwrap();
        assert!(dir.path().join("config.json").exists());
        let loaded = load_config();

        std::env::remove_var("BUSBOOK_CONFIG_DIR");
        assert_eq!(loaded.data_dir, "/tmp/test");
    }

    #[test]
    fn test_default_data_dir_is_set() {
        let c = Config::default();
        assert!(!c.data_dir.is_empty());
    }
}
