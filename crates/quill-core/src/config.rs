//! Configuration loading and path resolution.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for quill configuration and session data.
    //!
    //! QUILL_HOME resolution order:
    //! 1. QUILL_HOME environment variable (if set)
    //! 2. ~/.config/quill (default)

    use std::path::PathBuf;

    /// Returns the quill home directory.
    ///
    /// Checks QUILL_HOME env var first, falls back to ~/.config/quill
    pub fn quill_home() -> PathBuf {
        if let Ok(home) = std::env::var("QUILL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("quill"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        quill_home().join("config.toml")
    }

    /// Returns the path to the persisted session credential.
    pub fn session_path() -> PathBuf {
        quill_home().join("session.json")
    }
}

/// Default config template written by `quill config init`.
fn default_config_template() -> &'static str {
    "\
# quill configuration

# Base URL of the remote content service.
# Can also be set with the QUILL_BASE_URL environment variable.
# base_url = \"https://blog.example.com\"
"
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote content service
    pub base_url: Option<String>,
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template, refusing to overwrite.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the remote base URL with precedence: env > config.
    ///
    /// There is no meaningful default remote, so absence is an error.
    pub fn resolve_base_url(&self) -> Result<String> {
        if let Ok(env_url) = std::env::var("QUILL_BASE_URL") {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.to_string());
            }
        }

        if let Some(config_url) = self.base_url.as_deref() {
            let trimmed = config_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.to_string());
            }
        }

        bail!("No base URL configured. Set QUILL_BASE_URL or base_url in config.toml.")
    }
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid base URL: {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_load_from_parses_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_url = \"https://blog.example.com\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://blog.example.com"));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "# existing").unwrap();

        let err = Config::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_init_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::init(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# base_url ="));
        // The template must itself be loadable.
        let config = Config::load_from(&path).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_resolve_base_url_rejects_malformed() {
        let config = Config {
            base_url: Some("not a url".to_string()),
        };
        assert!(config.resolve_base_url().is_err());
    }
}
