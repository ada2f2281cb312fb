//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::output;
use crate::client::{ApiClient, RestClient};
use crate::error::Result;
use crate::newslist::{
    Category, DateWindowPaginator, NewsItem, NewsListEndpoint, NewsListRequest, DEFAULT_BASE_URL,
};
use crate::pagination::PagedClient;
use crate::transport::{
    HttpTransport, LoggingTransport, RateLimiter, RateLimiterConfig, ThrottledTransport, Transport,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the fetch command
struct FetchArgs {
    category: Category,
    start: NaiveDate,
    end: Option<NaiveDate>,
    limit: u32,
    window_days: i64,
    stock: Option<String>,
    rps: u32,
    base_url: Option<String>,
    output: Option<PathBuf>,
    format: OutputFormat,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                category,
                start,
                end,
                limit,
                window_days,
                stock,
                rps,
                base_url,
                output,
                format,
            } => {
                self.fetch(FetchArgs {
                    category: *category,
                    start: *start,
                    end: *end,
                    limit: *limit,
                    window_days: *window_days,
                    stock: stock.clone(),
                    rps: *rps,
                    base_url: base_url.clone(),
                    output: output.clone(),
                    format: *format,
                })
                .await
            }
            Commands::Categories => Self::categories(),
        }
    }

    /// Fetch every page of a category across a date range
    async fn fetch(&self, args: FetchArgs) -> Result<()> {
        let end = args.end.unwrap_or_else(|| Utc::now().date_naive());
        let start_at = args.start.and_time(NaiveTime::MIN).and_utc();
        let end_at = end.and_time(NaiveTime::MIN).and_utc();

        let endpoint: NewsListEndpoint<NewsItem> = match &args.base_url {
            Some(base_url) => NewsListEndpoint::with_base_url(args.category, base_url)?,
            None => NewsListEndpoint::new(args.category),
        };

        info!(
            "Fetching {} news from {} to {}",
            args.category, args.start, end
        );

        let client = PagedClient::new(
            RestClient::new(Self::build_transport(args.rps), endpoint),
            DateWindowPaginator::with_window_days(args.window_days),
        );

        let request = NewsListRequest::new(start_at, end_at).with_limit(args.limit);
        let envelope = client.send_and_receive(request).await?;

        let mut items: Vec<NewsItem> = envelope.items.data;
        if let Some(code) = &args.stock {
            items.retain(|item| item.mentions_stock(code));
        }
        info!("Fetched {} news items", items.len());

        let rendered = output::format_items(&items, args.format)?;
        output::write_output(&rendered, args.output.as_deref())
    }

    /// List known categories and their endpoint URLs
    fn categories() -> Result<()> {
        for category in Category::ALL {
            println!("{}  {}", category.slug(), category.url(DEFAULT_BASE_URL));
        }
        Ok(())
    }

    /// Compose the transport stack for the given throttle setting
    fn build_transport(rps: u32) -> Box<dyn Transport> {
        let http = HttpTransport::new();
        if rps == 0 {
            return Box::new(LoggingTransport::new(http));
        }
        let limiter = RateLimiter::new(&RateLimiterConfig::new(rps, rps));
        Box::new(LoggingTransport::new(ThrottledTransport::new(
            http, limiter,
        )))
    }
}
