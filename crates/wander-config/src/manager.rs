use crate::config::{Config, ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Async configuration manager.
///
/// Holds the config behind a shared `RwLock` so long-lived components can
/// keep a handle while the CLI edits values.
#[derive(Clone)]
pub struct ConfigManager {
    path: PathBuf,
    config: Arc<RwLock<Config>>,
}

impl ConfigManager {
    /// Load a config file, writing the defaults first if it doesn't exist
    pub async fn load(path: &Path) -> ConfigResult<Self> {
        let config = if path.exists() {
            info!("Loading config from {:?}", path);
            let content = tokio::fs::read_to_string(path).await?;
            serde_json::from_str(&content)?
        } else {
            info!("Config file not found, creating default config at {:?}", path);
            let default_config = Config::default();
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            let content = serde_json::to_string_pretty(&default_config)?;
            tokio::fs::write(path, &content).await?;
            default_config
        };

        Ok(Self {
            path: path.to_path_buf(),
            config: Arc::new(RwLock::new(config)),
        })
    }

    /// Load from the default location (`~/.wander/config.json`)
    pub async fn load_default() -> ConfigResult<Self> {
        let path = crate::default_config_path()
            .ok_or_else(|| ConfigError::InvalidPath("could not find home directory".to_string()))?;
        Self::load(&path).await
    }

    /// Wrap an in-memory config (used by tests)
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Shared handle to the live config
    pub fn get(&self) -> Arc<RwLock<Config>> {
        Arc::clone(&self.config)
    }

    /// A snapshot of the current config
    pub async fn snapshot(&self) -> Config {
        self.config.read().await.clone()
    }

    /// Apply a mutation to the live config
    pub async fn update<F>(&self, mutate: F) -> ConfigResult<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write().await;
        mutate(&mut config);
        Ok(())
    }

    /// Persist the current config to its file
    pub async fn save(&self) -> ConfigResult<()> {
        let config = self.config.read().await;
        let content = serde_json::to_string_pretty(&*config)?;
        drop(config);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        info!("Config saved to {:?}", self.path);
        Ok(())
    }

    /// Re-read the config from disk
    pub async fn reload(&self) -> ConfigResult<()> {
        if !self.path.exists() {
            return Err(ConfigError::InvalidPath(format!(
                "config file not found: {:?}",
                self.path
            )));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let new_config: Config = serde_json::from_str(&content)?;

        let mut config = self.config.write().await;
        *config = new_config;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let manager = ConfigManager::load(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(manager.snapshot().await, Config::default());
    }

    #[tokio::test]
    async fn test_update_save_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let manager = ConfigManager::load(&path).await.unwrap();
        manager
            .update(|config| {
                config.llm.model = "gpt-4o".to_string();
            })
            .await
            .unwrap();
        manager.save().await.unwrap();

        let fresh = ConfigManager::load(&path).await.unwrap();
        assert_eq!(fresh.snapshot().await.llm.model, "gpt-4o");
    }

    #[tokio::test]
    async fn test_reload_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let manager = ConfigManager::new(Config::default(), path);

        assert!(matches!(
            manager.reload().await,
            Err(ConfigError::InvalidPath(_))
        ));
    }
}
