//! CLI command handlers.

use anyhow::{Context, Result};
use techintel_core::config::Config;
use techintel_core::credentials::ChainedCredentials;
use techintel_core::intel::{EngineSettings, IntelEngine};

pub mod config;
pub mod format;
pub mod key;
pub mod search;
pub mod suggest;

/// Engine reading its key from the config file, then `GEMINI_API_KEY`.
fn engine(config: &Config) -> Result<IntelEngine<ChainedCredentials>> {
    let settings = EngineSettings::from_config(config).context("resolve Gemini settings")?;
    Ok(IntelEngine::new(
        ChainedCredentials::from_config(config),
        settings,
    ))
}
