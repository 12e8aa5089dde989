pub mod config;
pub mod manager;

pub use config::{
    AdvisorSettings, Config, ConfigError, ConfigResult, LlmSettings, LogLevel, LoggingConfig,
};
pub use manager::ConfigManager;

use std::path::PathBuf;

/// Wander configuration directory (`~/.wander`)
pub fn wander_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".wander"))
}

/// Default config file path (`~/.wander/config.json`)
pub fn default_config_path() -> Option<PathBuf> {
    wander_dir().map(|dir| dir.join("config.json"))
}

/// Default log file path
pub fn default_log_path() -> Option<PathBuf> {
    wander_dir().map(|dir| dir.join("logs").join("wander.log"))
}

/// Create the wander directory layout
pub async fn init_wander_dirs() -> ConfigResult<()> {
    if let Some(base) = wander_dir() {
        tokio::fs::create_dir_all(&base).await?;
        tokio::fs::create_dir_all(base.join("logs")).await?;
    }
    Ok(())
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wander_dir() {
        let dir = wander_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().to_string_lossy().contains(".wander"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/.wander/config.json").unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));

        let plain = expand_tilde("/tmp/config.json").unwrap();
        assert_eq!(plain, PathBuf::from("/tmp/config.json"));
    }
}
