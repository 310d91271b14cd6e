use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use super::extract::{parse_overview, parse_results, suggestion_lines, summary_lines};
use super::fallback::{
    fallback_overview, fallback_results, fallback_suggestions, mock_results, template_summaries,
};
use super::types::{DataOrigin, Overview, Report, SearchResult, SourceCounts};
use crate::charts::ChartData;
use crate::config::Config;
use crate::credentials::CredentialProvider;
use crate::prompts;
use crate::providers::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::providers::{GeminiClient, GeminiConfig, resolve_base_url};
use crate::series::generate_series;

/// Minimum untrimmed query length, in UTF-16 code units, before suggestions
/// are requested from the API.
const MIN_SUGGEST_QUERY_UNITS: usize = 2;

/// API settings shared by every request the engine makes.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl EngineSettings {
    /// Resolves the base URL (`GEMINI_BASE_URL`, then config, then default).
    ///
    /// # Errors
    /// Returns an error if the resolved base URL is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = resolve_base_url(
            config.gemini.base_url.as_deref(),
            "GEMINI_BASE_URL",
            DEFAULT_BASE_URL,
            "Gemini",
        )?;
        Ok(Self {
            model: config.model.clone(),
            base_url,
            timeout: config.request_timeout(),
        })
    }

    /// Client for `api_key` using these settings.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn client(&self, api_key: String) -> Result<GeminiClient> {
        GeminiClient::new(GeminiConfig {
            api_key,
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            timeout: self.timeout,
        })
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(Duration::from_secs(60)),
        }
    }
}

/// How the engine can reach the API for one operation.
enum Connection {
    /// No key configured.
    Offline,
    Online(GeminiClient),
    /// A key is configured but no client could be built.
    Unavailable,
}

/// Search, summary, overview and suggestion orchestration.
///
/// The key is read from `C` at the start of every operation, so a key saved
/// mid-session takes effect on the next search.
pub struct IntelEngine<C: CredentialProvider> {
    credentials: C,
    settings: EngineSettings,
}

impl<C: CredentialProvider> IntelEngine<C> {
    pub fn new(credentials: C, settings: EngineSettings) -> Self {
        Self {
            credentials,
            settings,
        }
    }

    fn connection(&self) -> Connection {
        let Some(api_key) = self.credentials.api_key() else {
            return Connection::Offline;
        };
        match self.settings.client(api_key) {
            Ok(client) => Connection::Online(client),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "gemini client unavailable");
                Connection::Unavailable
            }
        }
    }

    /// Runs a full search. A blank query yields `None`.
    ///
    /// Provider failures never surface here; each step degrades to its
    /// local template instead.
    pub async fn search(&self, query: &str) -> Option<Report> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let connection = self.connection();
        let (origin, results) = fetch_results(&connection, query).await;
        debug!(?origin, count = results.len(), "search results ready");

        let (summaries, overview) = tokio::join!(
            fetch_summaries(&connection, &results),
            fetch_overview(&connection, &results),
        );

        let insights = generate_series(&results);
        let charts = ChartData::from_insights(&insights);

        Some(Report {
            query: query.to_string(),
            origin,
            source_counts: Self::source_counts(&results),
            results,
            summaries,
            overview,
            insights,
            charts,
        })
    }

    /// Search-box suggestions for a partial query.
    pub async fn suggest(&self, query: &str) -> Vec<String> {
        if query.encode_utf16().count() >= MIN_SUGGEST_QUERY_UNITS
            && let Connection::Online(client) = self.connection()
        {
            match client
                .generate_content(&prompts::suggestions_prompt(query))
                .await
            {
                Ok(text) => {
                    let suggestions = suggestion_lines(&text);
                    if !suggestions.is_empty() {
                        return suggestions;
                    }
                }
                Err(e) => warn!(error = %e, "suggestion request failed"),
            }
        }
        fallback_suggestions(query)
    }

    pub fn source_counts(results: &[SearchResult]) -> SourceCounts {
        SourceCounts::from_results(results)
    }
}

async fn fetch_results(connection: &Connection, query: &str) -> (DataOrigin, Vec<SearchResult>) {
    let client = match connection {
        Connection::Offline => {
            info!("no API key configured; using mock results");
            return (DataOrigin::Mock, mock_results(query));
        }
        Connection::Unavailable => return (DataOrigin::Fallback, fallback_results(query)),
        Connection::Online(client) => client,
    };

    let fetched = match client.generate_content(&prompts::search_prompt(query)).await {
        Ok(text) => parse_results(&text),
        Err(e) => Err(e.into()),
    };
    match fetched {
        Ok(results) => (DataOrigin::Live, results),
        Err(e) => {
            warn!(error = %format!("{e:#}"), "search request failed; using fallback results");
            (DataOrigin::Fallback, fallback_results(query))
        }
    }
}

async fn fetch_summaries(connection: &Connection, results: &[SearchResult]) -> Vec<String> {
    let Connection::Online(client) = connection else {
        return template_summaries(results);
    };
    if results.is_empty() {
        return Vec::new();
    }

    let prompt = prompts::summary_prompt(&abstracts(results));
    match client.generate_content(&prompt).await {
        Ok(text) => summary_lines(&text),
        Err(e) => {
            warn!(error = %e, "summary request failed; using template summaries");
            template_summaries(results)
        }
    }
}

async fn fetch_overview(connection: &Connection, results: &[SearchResult]) -> Overview {
    let Connection::Online(client) = connection else {
        return fallback_overview();
    };
    if results.is_empty() {
        return fallback_overview();
    }

    let prompt = prompts::overview_prompt(&abstracts(results));
    let parsed = match client.generate_content(&prompt).await {
        Ok(text) => parse_overview(&text),
        Err(e) => Err(e.into()),
    };
    parsed.unwrap_or_else(|e| {
        warn!(error = %format!("{e:#}"), "overview request failed; using fallback overview");
        fallback_overview()
    })
}

fn abstracts(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| r.abstract_text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
