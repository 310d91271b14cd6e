//! API key handlers.
//!
//! `set` only persists a key after the API has accepted it.

use anyhow::{Context, Result, bail};
use techintel_core::config::{self, Config};
use techintel_core::credentials::{
    API_KEY_ENV_VAR, ConfigCredentials, CredentialProvider, EnvCredentials,
};
use techintel_core::intel::EngineSettings;

pub async fn set(config: &Config, key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        bail!("Please enter a valid Gemini API key");
    }

    let settings = EngineSettings::from_config(config).context("resolve Gemini settings")?;
    let client = settings.client(key.to_string())?;
    eprintln!("Testing API key with {}...", client.model());

    let accepted = client
        .test_connection()
        .await
        .context("test Gemini connection")?;
    if !accepted {
        bail!("API key test failed. Please check your key and try again.");
    }

    let config_path = config::paths::config_path();
    Config::save_api_key_to(&config_path, key)
        .with_context(|| format!("save API key to {}", config_path.display()))?;
    println!("API key saved to {}", config_path.display());
    Ok(())
}

pub fn status(config: &Config) {
    let source = if ConfigCredentials::from_config(config).api_key().is_some() {
        Some(format!("config file {}", config::paths::config_path().display()))
    } else if EnvCredentials::default().api_key().is_some() {
        Some(API_KEY_ENV_VAR.to_string())
    } else {
        None
    };

    match source {
        Some(source) => println!("Gemini API key: configured ({source})"),
        None => println!("Gemini API key: not configured (searches use mock data)"),
    }
    println!("Model: {}", config.model);
}
