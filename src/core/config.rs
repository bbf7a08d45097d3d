//! Tool configuration management

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Persisted editor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding one JSON file per page identifier
    pub content_dir: PathBuf,
    /// Pages the website actually routes to; the landing page is hardcoded
    /// in the site itself and has no content file
    pub pages: Vec<String>,
    /// Root of the website project, where the rebuild command runs
    pub project_root: PathBuf,
    /// Command handed to the shell to rebuild the static site
    pub build_command: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("client/public/data"),
            pages: ["home", "education", "experience", "projects"]
                .map(String::from)
                .to_vec(),
            project_root: PathBuf::from("."),
            build_command: "npm run build".to_string(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "pagekeeper", "Pagekeeper")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk, falling back to defaults when no
    /// config file exists yet
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_whitelist() {
        let config = AppConfig::default();
        assert_eq!(
            config.pages,
            vec!["home", "education", "experience", "projects"]
        );
        assert_eq!(config.build_command, "npm run build");
    }
}
