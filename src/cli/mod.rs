//! CLI module
//!
//! Command-line interface for fetching paginated news listings.
//!
//! # Commands
//!
//! - `fetch` - Fetch all news in a date range, walking every page
//! - `categories` - List known categories and their endpoint URLs

mod commands;
mod output;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
