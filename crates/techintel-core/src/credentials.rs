//! API credential providers.
//!
//! The engine never reads ambient state for its key; callers inject a
//! `CredentialProvider`. The default chain is config file, then `GEMINI_API_KEY`.

use crate::config::Config;

pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Source of the Gemini API key. Blank keys must be reported as `None`.
pub trait CredentialProvider: Send + Sync {
    fn api_key(&self) -> Option<String>;
}

fn non_blank(key: &str) -> Option<String> {
    let trimmed = key.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A fixed key (or none). Useful for tests and one-off invocations.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.as_deref().and_then(non_blank)
    }
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_ENV_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var).ok().as_deref().and_then(non_blank)
    }
}

/// Key from `[gemini].api_key` in a loaded config.
#[derive(Debug, Clone, Default)]
pub struct ConfigCredentials {
    api_key: Option<String>,
}

impl ConfigCredentials {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.api_key().map(str::to_string),
        }
    }
}

impl CredentialProvider for ConfigCredentials {
    fn api_key(&self) -> Option<String> {
        self.api_key.as_deref().and_then(non_blank)
    }
}

/// First provider with a key wins.
pub struct ChainedCredentials {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainedCredentials {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Config file first, then `GEMINI_API_KEY`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(vec![
            Box::new(ConfigCredentials::from_config(config)),
            Box::new(EnvCredentials::default()),
        ])
    }
}

impl CredentialProvider for ChainedCredentials {
    fn api_key(&self) -> Option<String> {
        self.providers.iter().find_map(|p| p.api_key())
    }
}
