use anyhow::Result;
use techintel_core::config::Config;

pub async fn run(config: &Config, query: &str) -> Result<()> {
    let engine = super::engine(config)?;
    for suggestion in engine.suggest(query).await {
        println!("{suggestion}");
    }
    Ok(())
}
