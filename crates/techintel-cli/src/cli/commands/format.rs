//! Format command: inline markdown from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use techintel_core::markdown;

use crate::render::{self, Style};

pub fn run(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    // A trailing newline would otherwise render as an extra blank line.
    let text = text.strip_suffix('\n').unwrap_or(&text);
    let style = Style::detect();
    for line in markdown::format(text) {
        println!("{}", render::line(&line, style));
    }
    Ok(())
}
