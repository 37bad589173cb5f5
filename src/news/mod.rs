//! Per-ticker headlines from Yahoo's RSS feed.

mod model;
mod wire;

pub use model::NewsItem;

use chrono::{DateTime, Utc};

use crate::core::{YfClient, YfError, net};
use wire::{ItemNode, Rss};

impl NewsItem {
    fn from_node(n: ItemNode) -> Option<Self> {
        Some(Self {
            title: n.title?.trim().to_string(),
            link: n.link.map(|l| l.trim().to_string()),
            published: n
                .pub_date
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc2822(s.trim()).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            summary: n.description,
            guid: n.guid.and_then(|g| g.value),
        })
    }
}

/// Decode an RSS 2.0 document into headline items, in feed order. Items without a
/// title are skipped; a feed with no `<channel>` yields no items.
///
/// # Errors
///
/// [`YfError::Xml`] if the document is not well-formed RSS.
pub fn parse_feed(xml: &str) -> Result<Vec<NewsItem>, YfError> {
    let rss: Rss = quick_xml::de::from_str(xml)?;
    Ok(rss
        .channel
        .map(|c| c.items.into_iter().filter_map(NewsItem::from_node).collect())
        .unwrap_or_default())
}

/// Recent headlines for `symbol`.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response, [`YfError::Xml`] if the feed
/// cannot be decoded.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn headlines(client: &YfClient, symbol: &str) -> Result<Vec<NewsItem>, YfError> {
    let mut url = client.base_news_rss().clone();
    url.query_pairs_mut()
        .append_pair("s", symbol)
        .append_pair("region", "US")
        .append_pair("lang", "en-US");

    let body = net::fetch_text(client, url, "news_rss", symbol, "xml").await?;
    let items = parse_feed(&body)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(count = items.len(), "headlines parsed");

    Ok(items)
}
