//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use techintel_core::config;
use techintel_core::intel::Source;

mod commands;

#[derive(Parser)]
#[command(name = "techintel")]
#[command(version)]
#[command(about = "Defense technology intelligence dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the model from config
    #[arg(short, long, global = true)]
    model: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search a topic and render the dashboard
    Search {
        /// Technology topic to analyze
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print the report as JSON instead of the dashboard
        #[arg(long)]
        json: bool,

        /// Only list results from this source (counts still cover every result)
        #[arg(long, value_enum, value_name = "SOURCE")]
        source: Option<SourceFilter>,
    },

    /// Render inline markdown (**bold**, *italic*, lists) from a file or stdin
    Format {
        /// File to format (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<std::path::PathBuf>,
    },

    /// Suggest search topics for a partial query
    Suggest {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Manage the Gemini API key
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceFilter {
    Patent,
    Paper,
    Startup,
}

impl From<SourceFilter> for Source {
    fn from(filter: SourceFilter) -> Self {
        match filter {
            SourceFilter::Patent => Source::Patent,
            SourceFilter::Paper => Source::Paper,
            SourceFilter::Startup => Source::Startup,
        }
    }
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

#[derive(clap::Subcommand)]
enum KeyCommands {
    /// Test a key against the API and save it if accepted
    Set {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Show whether a key is configured
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;

    if let Some(model) = cli.model.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
        config.model = model.to_string();
    }

    match cli.command {
        Commands::Search {
            query,
            json,
            source,
        } => commands::search::run(&config, &query, json, source.map(Source::from)).await,
        Commands::Format { file } => commands::format::run(file.as_deref()),
        Commands::Suggest { query } => commands::suggest::run(&config, &query).await,
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Commands::Key { command } => match command {
            KeyCommands::Set { key } => commands::key::set(&config, &key).await,
            KeyCommands::Status => {
                commands::key::status(&config);
                Ok(())
            }
        },
    }
}
