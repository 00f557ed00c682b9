//! # newsfetch
//!
//! A small command-line utility that searches [NewsAPI](https://newsapi.org)
//! and writes the raw JSON response to `output.json` in the working directory.
//!
//! ## Usage
//!
//! ```sh
//! newsfetch --api YOUR_KEY get-news --query "climate" --page 2
//! ```
//!
//! The API key can also be supplied via the `NEWS_API_KEY` environment
//! variable, optionally loaded from a local `.env` file.
//!
//! ## Architecture
//!
//! The crate is a thin, linear pipeline:
//! 1. **CLI**: parse the credential and per-invocation search options
//! 2. **Fetch**: one GET against the NewsAPI `everything` endpoint
//! 3. **Persist**: pretty-print the JSON body to `output.json`, overwriting
//! 4. **Summary**: print how many articles were written
//!
//! Every invocation performs exactly one request; there is no retry logic,
//! no pagination traversal, and no response schema validation.

pub mod api;
pub mod cli;
pub mod error;
pub mod models;
pub mod outputs;
