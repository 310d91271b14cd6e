//! Search command: full dashboard for one query.

use anyhow::{Context, Result, bail};
use techintel_core::config::Config;
use techintel_core::intel::Source;

use crate::render::{self, Style};

pub async fn run(config: &Config, query: &str, json: bool, source: Option<Source>) -> Result<()> {
    let engine = super::engine(config)?;
    let Some(mut report) = engine.search(query).await else {
        bail!("Please enter a search query");
    };
    if let Some(source) = source {
        report.retain_source(source);
    }

    if json {
        let body = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{body}");
    } else {
        print!("{}", render::dashboard(&report, Style::detect()));
    }
    Ok(())
}
