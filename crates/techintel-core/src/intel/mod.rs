//! Intelligence engine: search, summaries, overview and suggestions.
//!
//! With no API key every operation answers from local templates. With a key,
//! each API call degrades independently to its template on failure.

mod engine;
mod extract;
mod fallback;
mod types;

pub use engine::{EngineSettings, IntelEngine};
pub use extract::{json_array_span, json_object_span, parse_overview, parse_results};
pub use fallback::{fallback_overview, fallback_suggestions, mock_results};
pub use types::{DataOrigin, Overview, Report, SearchResult, Source, SourceCounts};
