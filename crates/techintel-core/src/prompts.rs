//! Prompt templates sent to the generative API.
//!
//! Placeholders use `{{NAME}}` and are filled with `str::replace`.

/// Prompt template for the twelve-entry search.
pub const SEARCH_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/search_prompt.md"
));

/// Prompt template for the three strategic insights.
pub const SUMMARY_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/summary_prompt.md"
));

/// Prompt template for the JSON overview.
pub const OVERVIEW_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/overview_prompt.md"
));

/// Prompt template for search suggestions.
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/suggestions_prompt.md"
));

pub fn search_prompt(query: &str) -> String {
    SEARCH_PROMPT_TEMPLATE.replace("{{QUERY}}", query)
}

pub fn summary_prompt(abstracts: &str) -> String {
    SUMMARY_PROMPT_TEMPLATE.replace("{{ABSTRACTS}}", abstracts)
}

pub fn overview_prompt(abstracts: &str) -> String {
    OVERVIEW_PROMPT_TEMPLATE.replace("{{ABSTRACTS}}", abstracts)
}

pub fn suggestions_prompt(query: &str) -> String {
    SUGGESTIONS_PROMPT_TEMPLATE.replace("{{QUERY}}", query)
}
