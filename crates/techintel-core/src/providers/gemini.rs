//! Gemini API key provider (Generative Language API, `generateContent`).

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};

use super::shared::{ProviderError, ProviderResult, USER_AGENT, classify_reqwest_error};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const CONNECTION_TEST_PROMPT: &str = "Test connection";

/// Gemini API configuration. `base_url` is already resolved and has no trailing slash.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends a single-turn prompt and returns the generated text.
    ///
    /// # Errors
    /// Returns a `ProviderError` on transport failure, non-2xx status, or a
    /// response without text parts.
    pub async fn generate_content(&self, prompt: &str) -> ProviderResult<String> {
        let response = self.post(prompt).await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ProviderError::http_status(status.as_u16(), &body));
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| ProviderError::parse(format!("Invalid Gemini response JSON: {e}")))?;
        let text = extract_text(&value)?;
        tracing::debug!(model = %self.config.model, chars = text.len(), "gemini response");
        Ok(text)
    }

    /// Sends a trivial prompt and reports whether the key is accepted.
    ///
    /// A non-2xx status is `Ok(false)`.
    ///
    /// # Errors
    /// Returns a `ProviderError` only when the request could not be sent.
    pub async fn test_connection(&self) -> ProviderResult<bool> {
        let response = self.post(CONNECTION_TEST_PROMPT).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::info!(status = status.as_u16(), "gemini connection test rejected");
        }
        Ok(status.is_success())
    }

    async fn post(&self, prompt: &str) -> ProviderResult<reqwest::Response> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        self.http
            .post(url)
            .headers(build_headers(&self.config.api_key))
            .json(&build_request(prompt))
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))
    }
}

fn build_request(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{
                "text": prompt
            }]
        }]
    })
}

/// Concatenates the text parts of the first candidate.
fn extract_text(value: &Value) -> ProviderResult<String> {
    if let Some(error) = value.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");
        return Err(ProviderError::api_error(message));
    }

    let parts = value
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| ProviderError::parse("Gemini response has no candidate content"))?;

    let texts: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    if texts.is_empty() {
        return Err(ProviderError::parse("Gemini response has no text parts"));
    }
    Ok(texts.concat())
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("accept", HeaderValue::from_static("application/json"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));
    headers
}
