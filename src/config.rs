use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub downloads: DownloadConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where property data comes from
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// JSON snapshot to serve; sample data when unset
    pub snapshot_path: Option<PathBuf>,
    /// Number of uploads listed on the dashboard
    #[serde(default = "default_recent_media")]
    pub recent_media: usize,
}

fn default_recent_media() -> usize {
    5
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            recent_media: default_recent_media(),
        }
    }
}

/// Asset download settings
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_timeout_seconds() -> u64 {
    30
}

impl DownloadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Load configuration from TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.data.snapshot_path.is_none());
        assert_eq!(config.downloads.output_dir, PathBuf::from("downloads"));
        assert_eq!(config.downloads.timeout(), Duration::from_secs(30));
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_config_deserialization() {
        let toml = r#"
            [data]
            snapshot_path = "/srv/portfolio.json"
            recent_media = 3

            [downloads]
            output_dir = "/tmp/assets"
            timeout_seconds = 10

            [logging]
            filter = "property_dashboard=debug"
        "#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.snapshot_path, Some(PathBuf::from("/srv/portfolio.json")));
        assert_eq!(config.data.recent_media, 3);
        assert_eq!(config.downloads.timeout_seconds, 10);
        assert_eq!(config.logging.filter, "property_dashboard=debug");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [downloads]
            timeout_seconds = 5
        "#;

        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.downloads.timeout_seconds, 5);
        assert_eq!(config.downloads.output_dir, PathBuf::from("downloads"));
        assert_eq!(config.data.recent_media, 5);
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        std::fs::write(&path, "[logging]\nfilter = \"warn\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.logging.filter, "warn");
        assert!(load_config(dir.path().join("missing.toml")).is_err());
    }
}
