use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapfeedConfig {
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_posts_collection")]
    pub posts_collection: String,

    #[serde(default = "default_users_collection")]
    pub users_collection: String,
}

fn default_path() -> String {
    ".snapfeed".to_string()
}

fn default_posts_collection() -> String {
    "posts".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            posts_collection: default_posts_collection(),
            users_collection: default_users_collection(),
        }
    }
}

impl SnapfeedConfig {
    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: SnapfeedConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn data_path(&self, data_root: &Path) -> PathBuf {
        data_root.join(&self.store.path)
    }

    pub fn posts_path(&self, data_root: &Path) -> PathBuf {
        self.data_path(data_root).join(&self.store.posts_collection)
    }

    pub fn users_path(&self, data_root: &Path) -> PathBuf {
        self.data_path(data_root).join(&self.store.users_collection)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
