//! Output formatting for fetched news items

use super::commands::OutputFormat;
use crate::error::{Result, ResultExt};
use crate::newslist::NewsItem;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// Render news items in the requested format
pub fn format_items(items: &[NewsItem], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = String::new();
            for item in items {
                out.push_str(&serde_json::to_string(item)?);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Pretty => Ok(format_pretty(items)),
        OutputFormat::Csv => Ok(format_csv(items)),
    }
}

/// Write rendered output to a file, or stdout when no path is given
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}

fn format_pretty(items: &[NewsItem]) -> String {
    let mut out = String::new();
    for item in items {
        let published = item
            .published_at()
            .map_or_else(|| item.publish_at.to_string(), format_timestamp);
        out.push_str(&format!("{published}  [{}] {}\n", item.news_id, item.title));
        if let Some(summary) = &item.summary {
            out.push_str(&format!("    {summary}\n"));
        }
    }
    out
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn format_csv(items: &[NewsItem]) -> String {
    let mut out = String::from("news_id,publish_at,title,summary,stocks\n");
    for item in items {
        let stocks = item
            .market
            .iter()
            .map(|stock| stock.code.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            item.news_id,
            item.publish_at,
            csv_field(&item.title),
            csv_field(item.summary.as_deref().unwrap_or_default()),
            csv_field(&stocks)
        ));
    }
    out
}

/// Quote a CSV field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains(|c| c == '"' || c == ',' || c == '\n' || c == '\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::newslist::StockTag;
    use pretty_assertions::assert_eq;

    fn item(news_id: u64, title: &str) -> NewsItem {
        NewsItem {
            news_id,
            title: title.to_string(),
            publish_at: 1_619_827_200,
            summary: None,
            market: Vec::new(),
        }
    }

    #[test]
    fn test_json_format_is_one_item_per_line() {
        let items = vec![item(1, "one"), item(2, "two")];
        let rendered = format_items(&items, OutputFormat::Json).unwrap();

        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.lines().next().unwrap().contains("\"newsId\":1"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_pretty_format_shows_dates() {
        let mut noted = item(9, "盤後速報");
        noted.summary = Some("重點整理".to_string());

        let rendered = format_items(&[noted], OutputFormat::Pretty).unwrap();
        assert!(rendered.contains("2021-05-01 00:00"));
        assert!(rendered.contains("[9] 盤後速報"));
        assert!(rendered.contains("    重點整理"));
    }

    #[test]
    fn test_csv_format_quotes_fields() {
        let mut noisy = item(3, "a, \"quoted\" title");
        noisy.summary = Some("line\nbreak".to_string());
        noisy.market = vec![StockTag {
            code: "2330".to_string(),
            name: "台積電".to_string(),
            symbol: None,
        }];

        let rendered = format_items(&[noisy], OutputFormat::Csv).unwrap();
        assert_eq!(
            rendered,
            "news_id,publish_at,title,summary,stocks\n\
             3,1619827200,\"a, \"\"quoted\"\" title\",\"line\nbreak\",2330\n"
        );
    }

    #[test]
    fn test_csv_format_plain_fields_stay_unquoted() {
        let rendered = format_items(&[item(4, "plain title")], OutputFormat::Csv).unwrap();
        assert!(rendered.contains("4,1619827200,plain title,,\n"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news.jsonl");

        write_output("line one\n", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\n");
    }
}
