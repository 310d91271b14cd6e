//! Generative-language provider clients.

pub mod gemini;
pub mod shared;

pub use gemini::{GeminiClient, GeminiConfig};
pub use shared::{
    ProviderError, ProviderErrorKind, ProviderResult, USER_AGENT, classify_reqwest_error,
    resolve_base_url,
};
