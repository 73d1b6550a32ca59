use std::collections::HashMap;
use std::time::Duration;

use feed_rs::parser;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use thiserror::Error;

/// A fetch failure scoped to a single feed. Callers treat either variant as
/// "this feed contributes nothing this run" and move on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed parse failed: {0}")]
    Parse(#[from] parser::ParseFeedError),
}

/// One successfully parsed feed, held just long enough for the aggregation
/// loop to pull entries out of it.
pub struct FeedDocument {
    pub feed: feed_rs::model::Feed,
    /// Raw `<pubDate>` text per item link, recovered from the RSS source
    /// because feed_rs discards date strings it cannot interpret.
    pub date_texts: HashMap<String, String>,
    /// Set when the body parsed as a feed but the server described it as
    /// something else (usually a misconfigured content type).
    pub content_warning: Option<String>,
}

pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("ai-headlines/0.1 (AI News Digest)")
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch and parse one feed URL.
    ///
    /// Any transport error, non-success status, or parse failure surfaces as
    /// a `FetchError`; a feed that parses despite a suspicious content type
    /// comes back with `content_warning` set and its entries intact.
    pub async fn fetch(&self, url: &str) -> Result<FeedDocument, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await?;

        let date_texts = Self::extract_date_texts(&bytes);
        let feed = parser::parse(&bytes[..])?;

        let content_warning = content_type
            .filter(|ct| !Self::looks_like_feed_content_type(ct))
            .map(|ct| format!("unexpected content type: {ct}"));

        Ok(FeedDocument {
            feed,
            date_texts,
            content_warning,
        })
    }

    fn looks_like_feed_content_type(content_type: &str) -> bool {
        let ct = content_type.to_lowercase();
        ct.contains("xml") || ct.contains("rss") || ct.contains("atom")
    }

    /// Extract raw `<pubDate>` strings keyed by `<link>` from RSS XML, since
    /// feed_rs only exposes dates it managed to parse
    pub fn extract_date_texts(xml_bytes: &[u8]) -> HashMap<String, String> {
        let mut date_map = HashMap::new();
        let xml_str = match std::str::from_utf8(xml_bytes) {
            Ok(s) => s,
            Err(_) => return date_map,
        };

        // Regex-free parsing: find <item> blocks and pick out <link> and
        // <pubDate>
        for item_block in xml_str.split("<item>").skip(1) {
            let item_end = item_block.find("</item>").unwrap_or(item_block.len());
            let item = &item_block[..item_end];

            let link = Self::extract_xml_element(item, "link");
            let pub_date = Self::extract_xml_element(item, "pubDate");

            if let (Some(link), Some(pub_date)) = (link, pub_date) {
                date_map.insert(link, pub_date);
            }
        }

        date_map
    }

    pub fn extract_xml_element(xml: &str, tag: &str) -> Option<String> {
        let start_tag = format!("<{}>", tag);
        let end_tag = format!("</{}>", tag);

        let start = xml.find(&start_tag)? + start_tag.len();
        let end = xml[start..].find(&end_tag)? + start;

        Some(xml[start..end].trim().to_string())
    }
}
