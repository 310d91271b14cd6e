use serde::{Deserialize, Serialize};

use crate::charts::ChartData;
use crate::series::{Insight, SeriesItem};

/// Where a search result nominally comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Patent,
    Paper,
    Startup,
}

impl Source {
    /// Lenient parse for model output. Unknown values are `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "patent" | "patents" => Some(Self::Patent),
            "paper" | "papers" | "research paper" => Some(Self::Paper),
            "startup" | "startups" => Some(Self::Startup),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Patent => "patent",
            Self::Paper => "paper",
            Self::Startup => "startup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub source: Source,
    /// 0-100
    pub relevance: u8,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SeriesItem for SearchResult {
    fn title(&self) -> &str {
        &self.title
    }

    fn relevance(&self) -> Option<u8> {
        Some(self.relevance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overview {
    pub key_findings: Vec<String>,
    pub trends: Vec<String>,
    pub strategic_implications: String,
}

/// Result counts per source, for the sidebar filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub patents: usize,
    pub papers: usize,
    pub startups: usize,
}

impl SourceCounts {
    pub fn from_results(results: &[SearchResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result.source {
                Source::Patent => counts.patents += 1,
                Source::Paper => counts.papers += 1,
                Source::Startup => counts.startups += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.patents + self.papers + self.startups
    }
}

/// Whether results came from the API or local templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// No API key configured; query-templated mock data.
    Mock,
    /// Results returned by the API.
    Live,
    /// API configured but the call failed; fallback templates.
    Fallback,
}

/// Everything the dashboard renders for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub query: String,
    pub origin: DataOrigin,
    pub results: Vec<SearchResult>,
    pub source_counts: SourceCounts,
    pub summaries: Vec<String>,
    pub overview: Overview,
    pub insights: Vec<Insight>,
    pub charts: ChartData,
}

impl Report {
    /// Keeps only the results from `source`. Source counts, summaries, and
    /// charts still describe the full result set.
    pub fn retain_source(&mut self, source: Source) {
        self.results.retain(|result| result.source == source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intel::{fallback_overview, mock_results};
    use crate::series::generate_series;

    fn mock_report() -> Report {
        let results = mock_results("Radar");
        let insights = generate_series(&results);
        Report {
            query: "Radar".to_string(),
            origin: DataOrigin::Mock,
            source_counts: SourceCounts::from_results(&results),
            charts: ChartData::from_insights(&insights),
            summaries: Vec::new(),
            overview: fallback_overview(),
            insights,
            results,
        }
    }

    #[test]
    fn test_retain_source_keeps_counts_over_all_results() {
        let mut report = mock_report();
        let counts = report.source_counts;
        let insights = report.insights.clone();

        report.retain_source(Source::Patent);
        assert_eq!(report.results.len(), 2);
        assert!(report.results.iter().all(|r| r.source == Source::Patent));
        assert_eq!(report.source_counts, counts);
        assert_eq!(report.source_counts.total(), 5);
        assert_eq!(report.insights, insights);
    }

    #[test]
    fn test_source_parse_accepts_plural_filter_names() {
        assert_eq!(Source::parse("Patents"), Some(Source::Patent));
        assert_eq!(Source::parse(" startup "), Some(Source::Startup));
        assert_eq!(Source::parse("blog"), None);
    }
}
