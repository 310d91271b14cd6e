//! Parsing of free-form model output into typed results.
//!
//! The model is asked for JSON but routinely wraps it in prose or code
//! fences, so extraction takes the widest bracketed span it can find.

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::types::{Overview, SearchResult, Source};

const DEFAULT_RELEVANCE: u8 = 85;
const MAX_SUMMARY_LINES: usize = 3;
const MIN_SUMMARY_LINE_CHARS: usize = 21;
const MAX_SUGGESTION_LINES: usize = 6;
const MIN_SUGGESTION_LINE_CHARS: usize = 11;

/// Text from the first `open` to the last `close`, inclusive.
fn span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

pub fn json_array_span(text: &str) -> Option<&str> {
    span(text, '[', ']')
}

pub fn json_object_span(text: &str) -> Option<&str> {
    span(text, '{', '}')
}

/// Parses the search-results array out of a model response.
///
/// # Errors
/// Returns an error when no array is present or it is not valid JSON.
pub fn parse_results(text: &str) -> Result<Vec<SearchResult>> {
    let Some(array) = json_array_span(text) else {
        bail!("No JSON array in search response");
    };
    let entries: Vec<Value> =
        serde_json::from_str(array).context("Failed to parse search results JSON")?;

    Ok(entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| normalize_entry(index, entry))
        .collect())
}

/// Parses the overview object out of a model response.
///
/// # Errors
/// Returns an error when no object is present or it does not deserialize.
pub fn parse_overview(text: &str) -> Result<Overview> {
    let Some(object) = json_object_span(text) else {
        bail!("No JSON object in overview response");
    };
    serde_json::from_str(object).context("Failed to parse overview JSON")
}

fn normalize_entry(index: usize, entry: &Value) -> Option<SearchResult> {
    let object = entry.as_object()?;
    let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

    let title = text("title").filter(|t| !t.trim().is_empty())?;
    let id = match object.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => (index + 1).to_string(),
    };
    let source = object
        .get("source")
        .and_then(Value::as_str)
        .and_then(Source::parse)
        .unwrap_or(Source::Paper);

    Some(SearchResult {
        id,
        title,
        abstract_text: text("abstract").unwrap_or_default(),
        source,
        relevance: relevance(object.get("relevance")),
        date: text("date").unwrap_or_default(),
        url: text("url").filter(|u| !u.is_empty()),
    })
}

/// Numeric or numeric-string relevance, clamped to 0..=100. Zero or anything
/// unparsable becomes the default.
fn relevance(value: Option<&Value>) -> u8 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(score) if score.is_finite() => {
            let clamped = score.round().clamp(0.0, 100.0) as u8;
            if clamped == 0 { DEFAULT_RELEVANCE } else { clamped }
        }
        _ => DEFAULT_RELEVANCE,
    }
}

fn qualifying_lines(text: &str, min_chars: usize, limit: usize) -> Vec<String> {
    text.lines()
        .filter(|line| line.trim().chars().count() >= min_chars)
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Insight lines from a summary response: longer than 20 characters, at most three.
pub fn summary_lines(text: &str) -> Vec<String> {
    qualifying_lines(text, MIN_SUMMARY_LINE_CHARS, MAX_SUMMARY_LINES)
}

/// Suggestion lines: longer than 10 characters, at most six, trimmed.
pub fn suggestion_lines(text: &str) -> Vec<String> {
    qualifying_lines(text, MIN_SUGGESTION_LINE_CHARS, MAX_SUGGESTION_LINES)
        .into_iter()
        .map(|line| line.trim().to_string())
        .collect()
}
