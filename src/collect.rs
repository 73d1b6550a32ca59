use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::fetcher::Fetcher;
use crate::registry::FeedSource;

/// How many entries are taken from the head of each feed. Feeds are assumed
/// to list their newest entries first; the sequence is used as-is.
pub const PER_FEED_LIMIT: usize = 3;

/// How many items survive the final recency cut.
pub const MAX_ITEMS: usize = 15;

/// One feed entry before normalization. Every field is optional; the date
/// text fields hold the raw strings for sources where feed_rs produced no
/// structured date.
#[derive(Debug, Default, Clone)]
pub struct RawEntry {
    pub title: Option<String>,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub published_text: Option<String>,
    pub updated_text: Option<String>,
}

impl RawEntry {
    pub fn from_feed_entry(
        entry: &feed_rs::model::Entry,
        date_texts: &HashMap<String, String>,
    ) -> Self {
        let link = entry.links.first().map(|l| l.href.clone());
        let published_text = link
            .as_deref()
            .and_then(|href| date_texts.get(href))
            .cloned();

        Self {
            title: entry.title.as_ref().map(|t| t.content.clone()),
            link,
            published: entry.published,
            updated: entry.updated,
            published_text,
            updated_text: None,
        }
    }
}

/// One headline after source-tagging and timestamp resolution, independent of
/// the feed format it came from.
#[derive(Debug, Clone)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    pub source: String,
    pub published: DateTime<Utc>,
}

impl NewsItem {
    pub fn from_raw(raw: RawEntry, source: &str) -> Self {
        let published = resolve_published(&raw);
        let title = raw
            .title
            .unwrap_or_else(|| "Untitled".to_string())
            .trim()
            .to_string();
        let link = raw.link.unwrap_or_default().trim().to_string();

        Self {
            title,
            link,
            source: source.to_string(),
            published,
        }
    }
}

/// Resolve an entry's publication instant. Never fails: structured dates win,
/// then RFC 2822 date text, then the current time.
pub fn resolve_published(entry: &RawEntry) -> DateTime<Utc> {
    entry
        .published
        .or(entry.updated)
        .or_else(|| entry.published_text.as_deref().and_then(parse_rfc2822))
        .or_else(|| entry.updated_text.as_deref().and_then(parse_rfc2822))
        .unwrap_or_else(Utc::now)
}

fn parse_rfc2822(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(text.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Walk the registry in order, fetch each feed, and collect the first
/// `per_feed_limit` entries per feed as normalized items.
///
/// A feed that fails to fetch or parse is logged and skipped; one bad source
/// never aborts the run.
pub async fn aggregate(
    fetcher: &Fetcher,
    registry: &[FeedSource],
    per_feed_limit: usize,
) -> Vec<NewsItem> {
    let mut items = Vec::new();

    for source in registry {
        info!("Fetching feed: {} ({})", source.name, source.url);

        let doc = match fetcher.fetch(&source.url).await {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Skipping feed '{}' ({}): {}", source.name, source.url, e);
                continue;
            }
        };

        if let Some(reason) = &doc.content_warning {
            warn!(
                "Feed '{}' ({}) looks malformed: {}; using its entries anyway",
                source.name, source.url, reason
            );
        }

        for entry in doc.feed.entries.iter().take(per_feed_limit) {
            let raw = RawEntry::from_feed_entry(entry, &doc.date_texts);
            items.push(NewsItem::from_raw(raw, &source.name));
        }
    }

    items
}

/// Stable-sort by publication time, newest first, and keep the top
/// `max_items`. Ties keep aggregation order, which follows registry order.
pub fn select_top(mut items: Vec<NewsItem>, max_items: usize) -> Vec<NewsItem> {
    items.sort_by(|a, b| b.published.cmp(&a.published));
    items.truncate(max_items);
    items
}
