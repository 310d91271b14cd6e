//! Local templates used when the API is not configured or fails.

use super::types::{Overview, SearchResult, Source};

const MAX_SUGGESTIONS: usize = 6;

const DEFENSE_SUGGESTIONS: &[&str] = &[
    "AI-powered missile defense systems",
    "Autonomous military drones",
    "Cybersecurity threat detection",
    "Radar signal processing",
    "Battlefield communication networks",
    "Smart ammunition systems",
    "Military satellite technology",
    "Electronic warfare countermeasures",
    "Biometric identification systems",
    "Stealth technology materials",
    "Naval combat systems",
    "Armored vehicle protection",
    "Surveillance and reconnaissance",
    "Command and control systems",
    "Military logistics optimization",
];

fn result(
    id: &str,
    title: String,
    abstract_text: String,
    source: Source,
    relevance: u8,
    date: &str,
) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title,
        abstract_text,
        source,
        relevance,
        date: date.to_string(),
        url: Some("#".to_string()),
    }
}

/// Query-templated results shown when no API key is configured.
pub fn mock_results(query: &str) -> Vec<SearchResult> {
    vec![
        result(
            "1",
            format!("AI-Powered {query} Defense System"),
            format!("Advanced artificial intelligence approach for real-time {query} threat detection and interception in modern defense systems. This technology represents a breakthrough in autonomous defense capabilities..."),
            Source::Patent,
            95,
            "2024-01-15",
        ),
        result(
            "2",
            format!("Autonomous {query} Coordination"),
            format!("Machine learning algorithms for coordinating multiple autonomous systems in {query} defense scenarios. Research shows significant operational advantages in complex battlefield environments..."),
            Source::Paper,
            88,
            "2024-02-20",
        ),
        result(
            "3",
            format!("{query} Defense Solutions"),
            format!("Startup developing next-generation {query} cybersecurity solutions for military applications. Focus on real-time threat detection and automated response systems..."),
            Source::Startup,
            82,
            "2024-03-10",
        ),
        result(
            "4",
            format!("Quantum {query} Encryption"),
            format!("Revolutionary quantum computing approach to {query} security protocols. This technology promises unbreakable encryption for military communications..."),
            Source::Patent,
            91,
            "2024-01-28",
        ),
        result(
            "5",
            format!("Neural Network {query} Analysis"),
            format!("Deep learning models for analyzing {query} patterns and predicting potential threats. Academic research shows 94% accuracy in threat classification..."),
            Source::Paper,
            87,
            "2024-02-15",
        ),
    ]
}

/// Results shown when the API is configured but the request or parse failed.
pub fn fallback_results(query: &str) -> Vec<SearchResult> {
    let lower = query.to_lowercase();
    vec![
        result(
            "1",
            format!("{query} - AI Defense System"),
            format!("Advanced artificial intelligence system for {lower} applications in defense scenarios with real-time processing capabilities..."),
            Source::Patent,
            92,
            "2024-01-15",
        ),
        result(
            "2",
            format!("Research on {query} Technologies"),
            format!("Comprehensive analysis of {lower} implementation in military environments with focus on operational efficiency..."),
            Source::Paper,
            87,
            "2024-02-20",
        ),
        result(
            "3",
            format!("DefenseTech {query} Solutions"),
            format!("Startup specializing in {lower} solutions for defense contractors with proven track record..."),
            Source::Startup,
            84,
            "2024-03-10",
        ),
    ]
}

/// Three canned insights keyed on the first word of the first result title.
pub fn template_summaries(results: &[SearchResult]) -> Vec<String> {
    let topic = results
        .first()
        .and_then(|r| r.title.split(' ').next())
        .filter(|word| !word.is_empty())
        .unwrap_or("Defense");

    vec![
        format!("**{topic} technology** is rapidly advancing with 95% accuracy in threat detection, indicating strong market readiness and military adoption potential. The latest research shows significant improvements in autonomous decision-making capabilities."),
        format!("**Autonomous {topic} systems** represent a paradigm shift in modern warfare tactics, with research demonstrating substantial operational advantages in complex battlefield scenarios. Military adoption rates are increasing exponentially."),
        format!("**{topic} cybersecurity startups** are filling critical gaps in military infrastructure protection, suggesting high investment opportunities in this rapidly growing sector. Market analysis indicates 40% year-over-year growth."),
    ]
}

pub fn fallback_overview() -> Overview {
    Overview {
        key_findings: vec![
            "AI-driven threat detection systems show highest maturity with TRL 8".to_string(),
            "Autonomous defense systems emerging as critical technology".to_string(),
            "Cyber warfare AI capabilities in rapid development phase".to_string(),
        ],
        trends: vec![
            "92% of analyzed technologies show significant advancement in AI integration"
                .to_string(),
            "Emerging focus on autonomous systems with 88% relevance score".to_string(),
            "Cross-domain integration becoming a key development priority".to_string(),
        ],
        strategic_implications: "Current analysis indicates a rapid shift towards AI-enabled defense systems, with particular emphasis on autonomous capabilities and cyber warfare. Technologies are showing accelerated maturity cycles, suggesting increased investment and development focus in these areas.".to_string(),
    }
}

/// Built-in suggestions containing `query` (case-insensitive), at most six.
pub fn fallback_suggestions(query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    DEFENSE_SUGGESTIONS
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|s| (*s).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_results_embed_query() {
        let results = mock_results("Radar");
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].title, "AI-Powered Radar Defense System");
        assert!(results[4].abstract_text.contains("analyzing Radar patterns"));
    }

    #[test]
    fn test_fallback_results_lowercase_query_in_abstracts() {
        let results = fallback_results("Hypersonic");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Hypersonic - AI Defense System");
        assert!(results[0].abstract_text.contains("for hypersonic applications"));
    }

    #[test]
    fn test_template_summaries_use_first_title_word() {
        let summaries = template_summaries(&mock_results("Radar"));
        assert_eq!(summaries.len(), 3);
        assert!(summaries[0].starts_with("**AI-Powered technology**"));

        let defaults = template_summaries(&[]);
        assert!(defaults[1].starts_with("**Autonomous Defense systems**"));
    }

    #[test]
    fn test_fallback_suggestions_filter_case_insensitively() {
        let matches = fallback_suggestions("RADAR");
        assert_eq!(matches, vec!["Radar signal processing".to_string()]);

        let military = fallback_suggestions("military");
        assert_eq!(military.len(), 3);

        assert_eq!(fallback_suggestions("").len(), 6);
        assert!(fallback_suggestions("zzz").is_empty());
    }
}
