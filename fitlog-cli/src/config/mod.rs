use anyhow::{Context, Result};
use fitlog::AnalyticsConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub goals: AnalyticsConfig,
}

/// Where the exported JSON files live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_dashboard_file")]
    pub dashboard_file: PathBuf,

    #[serde(default = "default_scans_file")]
    pub scans_file: PathBuf,

    #[serde(default = "default_training_file")]
    pub training_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

// Default value functions
fn default_dashboard_file() -> PathBuf {
    data_dir().join("dashboard.json")
}

fn default_scans_file() -> PathBuf {
    data_dir().join("body-scans.json")
}

fn default_training_file() -> PathBuf {
    data_dir().join("training.json")
}

fn default_true() -> bool {
    true
}

fn default_decimals() -> usize {
    1
}

fn data_dir() -> PathBuf {
    Config::config_dir()
        .map(|dir| dir.join("data"))
        .unwrap_or_else(|_| PathBuf::from("data"))
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dashboard_file: default_dashboard_file(),
            scans_file: default_scans_file(),
            training_file: default_training_file(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            decimals: default_decimals(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.fitlog/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".fitlog"))
    }

    /// Get config file path (~/.fitlog/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolve the file to use, honouring an explicit override
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration from a file; a missing file means defaults.
    ///
    /// `FITLOG_*` goal variables override whatever the file says.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            toml::from_str::<Config>(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?
        } else {
            tracing::info!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        let goals = config
            .goals
            .with_env_overrides()
            .context("Invalid goal override in environment")?;

        Ok(Self { goals, ..config })
    }

    /// Save configuration to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.color);
        assert_eq!(config.display.decimals, 1);
        assert_eq!(config.goals, AnalyticsConfig::default());
        assert!(config.data.dashboard_file.ends_with("dashboard.json"));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            [display]
            color = false

            [goals]
            protein_goal_g = 300.0
            "#,
        )
        .unwrap();

        assert!(!config.display.color);
        assert_eq!(config.display.decimals, 1);
        assert_eq!(config.goals.protein_goal_g, 300.0);
        assert_eq!(config.goals.streak_goal_days, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.data.dashboard_file = PathBuf::from("/tmp/dash.json");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.data.dashboard_file, PathBuf::from("/tmp/dash.json"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.display, DisplayConfig::default());
    }
}
