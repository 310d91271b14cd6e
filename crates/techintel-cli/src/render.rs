//! Plain-text dashboard rendering.
//!
//! Emphasis and headings are bold only when stdout is a terminal and
//! `NO_COLOR` is unset; piped output is plain text.

use std::fmt::Write as _;
use std::io::IsTerminal;

use crossterm::style::Stylize;
use techintel_core::intel::{DataOrigin, Overview, Report, SearchResult};
use techintel_core::markdown::{self, FormattedLine, InlineFragment};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 34;
const ABSTRACT_PREVIEW_CHARS: usize = 160;

#[derive(Debug, Clone, Copy)]
pub struct Style {
    bold: bool,
}

impl Style {
    pub fn detect() -> Self {
        Self {
            bold: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self { bold: false }
    }

    fn strong(self, text: &str) -> String {
        if self.bold {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(self, text: &str) -> String {
        if self.bold {
            text.dim().to_string()
        } else {
            text.to_string()
        }
    }
}

pub fn line(line: &FormattedLine, style: Style) -> String {
    line.segments
        .iter()
        .map(|segment| match segment {
            InlineFragment::Emphasis { text } => style.strong(text),
            other => other.to_string(),
        })
        .collect()
}

/// Formats `text` with the markdown formatter, one rendered line per input line.
pub fn markdown_lines(text: &str, style: Style) -> Vec<String> {
    markdown::format(text)
        .iter()
        .map(|formatted| line(formatted, style))
        .collect()
}

pub fn dashboard(report: &Report, style: Style) -> String {
    let mut out = String::new();

    let origin = match report.origin {
        DataOrigin::Live => "live",
        DataOrigin::Mock => "mock data, no API key configured",
        DataOrigin::Fallback => "fallback data, API unavailable",
    };
    let _ = writeln!(
        out,
        "{} \"{}\" {}",
        style.strong("Technology intelligence:"),
        report.query,
        style.muted(&format!("({origin})"))
    );
    let counts = &report.source_counts;
    let _ = writeln!(
        out,
        "Sources: {} patents, {} papers, {} startups ({} total)",
        counts.patents,
        counts.papers,
        counts.startups,
        counts.total()
    );

    section(&mut out, style, "Results");
    if report.results.is_empty() {
        let _ = writeln!(out, "  No results.");
    }
    for result in &report.results {
        result_card(&mut out, style, result);
    }

    section(&mut out, style, "AI Summary");
    if report.summaries.is_empty() {
        let _ = writeln!(out, "  No summary available.");
    }
    for summary in &report.summaries {
        for rendered in markdown_lines(summary, style) {
            let _ = writeln!(out, "  {rendered}");
        }
    }

    overview(&mut out, style, &report.overview);

    section(&mut out, style, "Key Insights");
    for insight in &report.insights {
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} TRL {}  {:<32} {:<9} {:>3}%",
            truncate(&insight.title, LABEL_WIDTH),
            insight.trl,
            insight.hype.label(),
            insight.category.label(),
            insight.relevance
        );
    }

    section(&mut out, style, "Technology Readiness Levels");
    let max_count = report.charts.trl.counts.iter().copied().max().unwrap_or(0);
    for (label, count) in report.charts.trl.labeled() {
        let _ = writeln!(out, "  {label:<6} {} {count}", bar(count, max_count));
    }

    section(&mut out, style, "Relevance Radar");
    for point in &report.charts.radar.points {
        let _ = writeln!(
            out,
            "  {:<LABEL_WIDTH$} {} {}",
            truncate(&point.label, LABEL_WIDTH),
            bar(usize::from(point.relevance), 100),
            point.relevance
        );
    }

    section(&mut out, style, "Hype Cycle");
    for point in &report.charts.hype.points {
        let level = point.level.round() as usize;
        let _ = writeln!(
            out,
            "  {:<32} {} {level}",
            point.phase.label(),
            bar(level, 100)
        );
    }

    out
}

fn section(out: &mut String, style: Style, title: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style.strong(title));
}

fn result_card(out: &mut String, style: Style, result: &SearchResult) {
    let _ = writeln!(
        out,
        "  [{}] {} {}",
        result.source.label(),
        style.strong(&result.title),
        style.muted(&format!("{}% | {}", result.relevance, result.date))
    );
    if !result.abstract_text.is_empty() {
        let _ = writeln!(
            out,
            "      {}",
            truncate(&result.abstract_text, ABSTRACT_PREVIEW_CHARS)
        );
    }
}

fn overview(out: &mut String, style: Style, overview: &Overview) {
    section(out, style, "Overview");
    let _ = writeln!(out, "  Key findings");
    for finding in &overview.key_findings {
        let _ = writeln!(out, "    • {finding}");
    }
    let _ = writeln!(out, "  Trends");
    for trend in &overview.trends {
        let _ = writeln!(out, "    • {trend}");
    }
    if !overview.strategic_implications.is_empty() {
        let _ = writeln!(out, "  Strategic implications");
        let _ = writeln!(out, "    {}", overview.strategic_implications);
    }
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (value.min(max) * BAR_WIDTH).div_ceil(max);
    "█".repeat(filled)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
