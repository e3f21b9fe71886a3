use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Where the platform lives and how we authenticate to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Site root, e.g. `https://media.example.ac.uk`. The API is served
    /// under `<base_url>/api/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Session cookie copied from a signed-in browser session. Empty means
    /// browse anonymously. Authentication itself happens elsewhere; this
    /// value is passed through verbatim.
    #[serde(default)]
    pub session_cookie: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How many items the latest-media section asks for.
    #[serde(default = "default_latest_count")]
    pub latest_count: u64,
}

/// User-configurable paths for logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for the application log file.
    /// Defaults to the platform data directory.
    #[serde(default = "data_dir")]
    pub log_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            session_cookie: String::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            latest_count: default_latest_count(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_dir: data_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://media.example.ac.uk".to_string()
}

fn default_latest_count() -> u64 {
    18
}

/// Platform config directory for this application.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mview")
}

/// Platform data directory (logs live here by default).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mview")
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.base_url.starts_with("https://"));
        assert!(config.api.session_cookie.is_empty());
        assert_eq!(config.ui.latest_count, 18);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://media.test"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://media.test");
        assert!(config.api.session_cookie.is_empty());
        assert_eq!(config.ui.latest_count, 18);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.api.session_cookie = "sessionid=abc123".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.api.session_cookie, "sessionid=abc123");
    }
}
