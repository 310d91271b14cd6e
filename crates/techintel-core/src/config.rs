//! Configuration management for techintel.
//!
//! Loads configuration from ${TECHINTEL_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::providers::gemini;

pub mod paths {
    //! Path resolution for techintel configuration.
    //!
    //! TECHINTEL_HOME resolution order:
    //! 1. TECHINTEL_HOME environment variable (if set)
    //! 2. ~/.config/techintel (default)

    use std::path::PathBuf;

    /// Returns the techintel home directory.
    pub fn techintel_home() -> PathBuf {
        if let Ok(home) = std::env::var("TECHINTEL_HOME")
            && !home.trim().is_empty()
        {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".techintel"),
            |h| h.join(".config").join("techintel"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        techintel_home().join("config.toml")
    }
}

/// Gemini provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The Gemini model to use
    pub model: String,

    /// Whole-request timeout for API calls in seconds (0 disables)
    pub request_timeout_secs: u32,

    #[serde(default)]
    pub gemini: GeminiSection,
}

impl Config {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 60;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
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

    /// Writes the commented default template to `path`.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Saves only `[gemini].api_key`, preserving other fields and comments.
    ///
    /// Creates the file from the default template if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the key is blank or the file cannot be read, parsed or written.
    pub fn save_api_key_to(path: &Path, api_key: &str) -> Result<()> {
        use toml_edit::{DocumentMut, Item, Table, value};

        let key = api_key.trim();
        if key.is_empty() {
            anyhow::bail!("Please enter a valid Gemini API key");
        }

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        if !doc.contains_table("gemini") {
            doc["gemini"] = Item::Table(Table::new());
        }
        doc["gemini"]["api_key"] = value(key);

        Self::write_config(path, &doc.to_string())
    }

    /// Returns the configured API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: gemini::DEFAULT_MODEL.to_string(),
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            gemini: GeminiSection::default(),
        }
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}
