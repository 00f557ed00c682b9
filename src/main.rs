//! # newsfetch
//!
//! Command-line entry point: queries NewsAPI's `everything` endpoint and
//! writes the raw JSON response to `output.json`.
//!
//! ## Usage
//!
//! ```sh
//! newsfetch --api YOUR_KEY get-news --query "climate" --from 2026-07-01
//! ```
//!
//! ## Control Flow
//!
//! 1. Load a local `.env` file (if present) into the process environment
//! 2. Initialize tracing
//! 3. Parse the CLI (credential from flag or `NEWS_API_KEY`)
//! 4. Run the one fetch and print the article-count summary
//!
//! Any failure after option parsing (transport, decode, persistence) is
//! logged and surfaced as a non-zero exit; no summary line is printed for
//! a failed invocation.

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

use newsfetch::api::NewsClient;
use newsfetch::cli::{Cli, Command};
use newsfetch::models::{summary_line, SearchQuery, SortBy, DEFAULT_QUERY};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present, before clap reads the environment
    dotenvy::dotenv().ok();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();

    match args.command {
        Command::GetNews(opts) => {
            debug!(?opts, "Parsed get-news options");

            if opts.page_size != 100 {
                warn!(
                    page_size = opts.page_size,
                    "--page-size is accepted for compatibility but the request always asks for 100"
                );
            }
            if opts.sort_by != SortBy::PublishedAt {
                warn!(
                    sort_by = ?opts.sort_by,
                    "--sort-by is accepted for compatibility but the request always sorts by publishedAt"
                );
            }

            let query = SearchQuery {
                query: opts
                    .query
                    .filter(|q| !q.is_empty())
                    .unwrap_or_else(|| DEFAULT_QUERY.to_string()),
                from: opts.from,
                to: opts.to,
                page: opts.page,
            };

            let client = NewsClient::new(args.api_key)?;
            let today = Local::now().date_naive();

            match client.fetch(&query, today).await {
                Ok(data) => {
                    info!("get-news completed");
                    println!("{}", summary_line(&data, client.output_path()));
                }
                Err(e) => {
                    error!(error = %e, "get-news failed");
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
