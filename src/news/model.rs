use chrono::{DateTime, Utc};
use serde::Serialize;

/// One headline from a ticker's news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub link: Option<String>,
    /// Publication time, if the feed's `pubDate` is valid RFC 2822.
    pub published: Option<DateTime<Utc>>,
    pub summary: Option<String>,
    pub guid: Option<String>,
}
