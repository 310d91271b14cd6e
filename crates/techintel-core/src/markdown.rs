//! Inline markdown formatting for generated summary text.
//!
//! Supports a deliberately small subset:
//! - `**bold**` and `*bold*` emphasis (non-nested, first match wins)
//! - `*`, `-`, `+` bullet markers
//! - `N.` ordinal markers
//!
//! Formatting never fails. Unbalanced delimiters fall through as plain text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*]+)\*\*|\*([^*]+)\*").unwrap_or_else(|e| panic!("emphasis regex: {e}"))
});

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*\-+]\s+").unwrap_or_else(|e| panic!("bullet regex: {e}")));

static ORDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\.\s+").unwrap_or_else(|e| panic!("ordinal regex: {e}"))
});

/// Kind of list marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bullet,
    Ordinal,
}

/// A single inline fragment of a formatted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineFragment {
    PlainText { text: String },
    Emphasis { text: String },
    ListMarker {
        kind: ListKind,
        /// Parsed digits for ordinal markers. `None` for bullets, or when
        /// the digits do not fit in a `u64`.
        value: Option<u64>,
    },
}

impl InlineFragment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        Self::Emphasis { text: text.into() }
    }

    pub fn bullet() -> Self {
        Self::ListMarker {
            kind: ListKind::Bullet,
            value: None,
        }
    }

    pub fn ordinal(value: Option<u64>) -> Self {
        Self::ListMarker {
            kind: ListKind::Ordinal,
            value,
        }
    }

    /// Text content with delimiters stripped. Markers have none.
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::Emphasis { text } => text,
            Self::ListMarker { .. } => "",
        }
    }
}

impl fmt::Display for InlineFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlainText { text } | Self::Emphasis { text } => f.write_str(text),
            Self::ListMarker {
                kind: ListKind::Bullet,
                ..
            } => f.write_str("• "),
            Self::ListMarker {
                kind: ListKind::Ordinal,
                value: Some(n),
            } => write!(f, "{n}. "),
            Self::ListMarker {
                kind: ListKind::Ordinal,
                value: None,
            } => f.write_str("#. "),
        }
    }
}

/// One rendered line. A blank input line has no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedLine {
    pub segments: Vec<InlineFragment>,
}

impl FormattedLine {
    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    /// Visible characters of the line, without delimiters or marker glyphs.
    pub fn text(&self) -> String {
        self.segments.iter().map(InlineFragment::text).collect()
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Formats text into lines of inline fragments.
///
/// Splits on `\n` and keeps empty lines, so `""` yields one blank line.
pub fn format(text: &str) -> Vec<FormattedLine> {
    text.split('\n').map(format_line).collect()
}

/// Formats a single line.
///
/// Emphasis is searched anywhere in the unconsumed text before list markers
/// are considered, and list markers only match at the start of what remains.
/// This means `- **x**` yields plain `"- "` followed by emphasis, not a bullet.
pub fn format_line(line: &str) -> FormattedLine {
    if line.trim().is_empty() {
        return FormattedLine::default();
    }

    let mut segments = Vec::new();
    let mut remaining = line;

    while !remaining.is_empty() {
        if let Some(caps) = EMPHASIS.captures(remaining)
            && let Some(whole) = caps.get(0)
        {
            if whole.start() > 0 {
                segments.push(InlineFragment::plain(&remaining[..whole.start()]));
            }
            let content = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            segments.push(InlineFragment::emphasis(content));
            remaining = &remaining[whole.end()..];
            continue;
        }

        if let Some(marker) = BULLET.find(remaining) {
            segments.push(InlineFragment::bullet());
            remaining = &remaining[marker.end()..];
            continue;
        }

        if let Some(caps) = ORDINAL.captures(remaining)
            && let Some(whole) = caps.get(0)
        {
            let value = caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok());
            segments.push(InlineFragment::ordinal(value));
            remaining = &remaining[whole.end()..];
            continue;
        }

        segments.push(InlineFragment::plain(remaining));
        break;
    }

    FormattedLine { segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(text: &str) -> Vec<InlineFragment> {
        let lines = format(text);
        assert_eq!(lines.len(), 1, "expected a single line for {text:?}");
        lines.into_iter().next().unwrap().segments
    }

    #[test]
    fn test_mixed_emphasis_styles_in_one_line() {
        assert_eq!(
            segments("**Radar** tech is *hot* now"),
            vec![
                InlineFragment::emphasis("Radar"),
                InlineFragment::plain(" tech is "),
                InlineFragment::emphasis("hot"),
                InlineFragment::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_bullet_marker() {
        assert_eq!(
            segments("- Item one"),
            vec![InlineFragment::bullet(), InlineFragment::plain("Item one")]
        );
        assert_eq!(
            segments("   + indented"),
            vec![InlineFragment::bullet(), InlineFragment::plain("indented")]
        );
    }

    #[test]
    fn test_ordinal_marker() {
        assert_eq!(
            segments("2. Second point"),
            vec![
                InlineFragment::ordinal(Some(2)),
                InlineFragment::plain("Second point")
            ]
        );
    }

    #[test]
    fn test_ordinal_overflow_keeps_marker() {
        assert_eq!(
            segments("99999999999999999999999. big"),
            vec![InlineFragment::ordinal(None), InlineFragment::plain("big")]
        );
    }

    #[test]
    fn test_marker_without_space_is_plain() {
        assert_eq!(segments("-dash"), vec![InlineFragment::plain("-dash")]);
        assert_eq!(segments("3.14 pi"), vec![InlineFragment::plain("3.14 pi")]);
    }

    #[test]
    fn test_emphasis_wins_over_leading_marker() {
        assert_eq!(
            segments("- **Key** finding"),
            vec![
                InlineFragment::plain("- "),
                InlineFragment::emphasis("Key"),
                InlineFragment::plain(" finding"),
            ]
        );
    }

    #[test]
    fn test_ordinal_not_recognised_when_emphasis_follows() {
        assert_eq!(
            segments("1. plain then **bold**"),
            vec![
                InlineFragment::plain("1. plain then "),
                InlineFragment::emphasis("bold"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_delimiters_fall_through() {
        assert_eq!(
            segments("**unclosed bold"),
            vec![InlineFragment::plain("**unclosed bold")]
        );
        assert_eq!(segments("a ** b"), vec![InlineFragment::plain("a ** b")]);
    }

    #[test]
    fn test_nested_emphasis_is_not_recursive() {
        // Runs cannot contain `*`, so the leftmost valid match is `*a *`.
        assert_eq!(
            segments("**a *b* c**"),
            vec![
                InlineFragment::plain("*"),
                InlineFragment::emphasis("a "),
                InlineFragment::plain("b"),
                InlineFragment::emphasis(" c"),
                InlineFragment::plain("*"),
            ]
        );
    }

    #[test]
    fn test_empty_input_is_single_blank_line() {
        let lines = format("");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank());
    }

    #[test]
    fn test_preserves_blank_lines() {
        let lines = format("first\n\n   \nsecond");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].text(), "first");
        assert!(lines[1].is_blank());
        assert!(lines[2].is_blank());
        assert_eq!(lines[3].text(), "second");
    }

    #[test]
    fn test_format_is_deterministic() {
        let text = "**A** b\n- c *d*\n7. e";
        assert_eq!(format(text), format(text));
    }

    #[test]
    fn test_text_strips_delimiters_and_markers() {
        let lines = format("- **Quantum** radar and *lidar*\n10. Ten");
        assert_eq!(lines[0].text(), "- Quantum radar and lidar");
        assert_eq!(lines[1].text(), "Ten");
    }

    #[test]
    fn test_display_renders_marker_glyphs() {
        let lines = format("- one\n4. four");
        assert_eq!(lines[0].to_string(), "• one");
        assert_eq!(lines[1].to_string(), "4. four");
    }

    #[test]
    fn test_non_ascii_digits_are_not_ordinals() {
        assert_eq!(segments("٣. Third"), vec![InlineFragment::plain("٣. Third")]);
        assert_eq!(format("٣. Third")[0].to_string(), "٣. Third");
    }
}
