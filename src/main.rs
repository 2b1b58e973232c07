//! # Summary Harness CLI (`sumh`)
//!
//! The `sumh` binary drives the summarization pipeline from the terminal and
//! hosts the JSON HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! sumh --config ./config/sumh.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sumh summarize <url>` | Fetch an article, summarize it, store the record |
//! | `sumh summarize --text "<content>"` | Summarize pasted text |
//! | `sumh search "<query>"` | Filter stored summaries by substring |
//! | `sumh search` | Print all stored summaries, newest first |
//! | `sumh serve` | Start the JSON HTTP server |
//!
//! The OpenAI API key is read from the `OPENAI_API_KEY` environment variable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use summary_harness::config::load_config;
use summary_harness::fetch::ArticleFetcher;
use summary_harness::ingest::{ingest, SummarizeSource};
use summary_harness::search::filter_records;
use summary_harness::server::run_server;
use summary_harness::store::SummaryStore;
use summary_harness::summarizer::create_summarizer;

/// Summary Harness — summarize and tag articles with an LLM, search the results.
#[derive(Parser)]
#[command(
    name = "sumh",
    about = "Summary Harness — summarize and tag articles with an LLM, search the results",
    version,
    long_about = "Summary Harness ingests an article (fetched from a URL or pasted as text), \
    asks an LLM for a short summary and 1-3 tags, and stores the result in a flat JSON file. \
    Stored summaries are searchable by case-insensitive substring over title, summary, and tags."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/sumh.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Start the JSON HTTP server.
    ///
    /// Serves POST /summarize, GET /summaries?q=, and GET /health on the
    /// address configured in [server].bind.
    Serve,

    /// Summarize an article and store the result.
    ///
    /// Pass a URL to fetch and extract the article, or --text to summarize
    /// pasted content directly. The URL wins when both are given. Prints the
    /// stored record as JSON.
    Summarize {
        /// Article URL to fetch and extract.
        url: Option<String>,

        /// Raw article text to summarize instead of fetching a URL.
        #[arg(long)]
        text: Option<String>,
    },

    /// Search stored summaries.
    ///
    /// Case-insensitive substring match over title, summary text, and tags.
    /// With no query, prints the full list, newest first.
    Search {
        /// Substring to search for.
        query: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            run_server(&config).await?;
        }
        Commands::Summarize { url, text } => {
            let source = SummarizeSource::from_parts(url, text);
            let fetcher = ArticleFetcher::new(&config.fetcher)?;
            let summarizer = create_summarizer(&config.summarizer)?;
            let store = SummaryStore::new(config.store.path.clone());

            let record = ingest(&fetcher, summarizer.as_ref(), &store, source).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Search { query } => {
            let store = SummaryStore::new(config.store.path.clone());
            let results = filter_records(store.load_all(), query.as_deref());
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
    }

    Ok(())
}
