//! CLI commands and argument parsing

use crate::newslist::Category;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cnyes (Anue) news-listing client CLI
#[derive(Parser, Debug)]
#[command(name = "cnyes-news")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch all news in a date range, walking every page
    Fetch {
        /// News category (headline, twstock)
        #[arg(short, long, default_value = "headline")]
        category: Category,

        /// Range start date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Range end date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Items per page
        #[arg(long, default_value = "30")]
        limit: u32,

        /// Days covered by each query window
        #[arg(long, default_value = "50")]
        window_days: i64,

        /// Keep only stories tagging this stock code
        #[arg(long)]
        stock: Option<String>,

        /// Requests per second (0 = unthrottled)
        #[arg(long, default_value = "10")]
        rps: u32,

        /// Override the API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Write results to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// List known categories and their endpoint URLs
    Categories,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one item per line)
    Json,
    /// Human-readable output
    Pretty,
    /// CSV with a header row
    Csv,
}
