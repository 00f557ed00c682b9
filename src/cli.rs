//! Command-line interface definitions for newsfetch.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The API credential can be provided via a flag or the `NEWS_API_KEY`
//! environment variable; everything else is per-invocation options on the
//! `get-news` subcommand.

use crate::models::SortBy;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line arguments for newsfetch.
///
/// A missing credential (no `--api` flag and no `NEWS_API_KEY` in the
/// environment) is a usage error reported before any network activity.
///
/// # Examples
///
/// ```sh
/// # Credential from a flag
/// newsfetch --api YOUR_KEY get-news --query "climate"
///
/// # Credential from the environment, explicit date range
/// NEWS_API_KEY=YOUR_KEY newsfetch get-news --from 2026-07-01 --to 2026-07-31
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsAPI key (or set NEWS_API_KEY)
    #[arg(
        long = "api",
        visible_alias = "api-key",
        env = "NEWS_API_KEY",
        value_name = "KEY",
        hide_env_values = true
    )]
    pub api_key: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch one page of search results and write them to output.json
    GetNews(GetNewsArgs),
}

/// Options for the `get-news` subcommand.
#[derive(Args, Debug)]
pub struct GetNewsArgs {
    /// Search query (defaults to Apple)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Start date YYYY-MM-DD (defaults to 7 days ago)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub from: Option<NaiveDate>,

    /// End date YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub to: Option<NaiveDate>,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page (accepted for compatibility; the request always asks for 100)
    #[arg(long, default_value_t = 100)]
    pub page_size: u32,

    /// Sort order (accepted for compatibility; the request always sorts by publishedAt)
    #[arg(long, value_enum, default_value = "publishedAt")]
    pub sort_by: SortBy,
}
