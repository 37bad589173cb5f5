use chrono::{TimeZone, Utc};
use httpmock::Method::GET;
use yahoo_fin_rs::news::{headlines, parse_feed};
use yahoo_fin_rs::{Ticker, YfError};

use crate::common;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<rss version="2.0">
  <channel>
    <copyright>Copyright (c) 2021 Yahoo! Inc. All rights reserved.</copyright>
    <description>Latest Financial News for NFLX</description>
    <language>en-US</language>
    <lastBuildDate>Tue, 05 Jan 2021 21:30:06 +0000</lastBuildDate>
    <link>http://finance.yahoo.com/q/h?s=NFLX</link>
    <title>Yahoo! Finance: NFLX News</title>
    <item>
      <description>Netflix subscriber growth beat estimates.</description>
      <guid isPermaLink="false">2f0c1b7e-1111-4c1c-9d3a-000000000001</guid>
      <link>https://finance.yahoo.com/news/netflix-subscribers-210000001.html</link>
      <pubDate>Tue, 05 Jan 2021 21:00:00 +0000</pubDate>
      <title>Netflix tops subscriber forecasts</title>
    </item>
    <item>
      <description>Streaming stocks slide.</description>
      <guid isPermaLink="false">2f0c1b7e-1111-4c1c-9d3a-000000000002</guid>
      <link>https://finance.yahoo.com/news/streaming-stocks-150000002.html</link>
      <pubDate>not a date</pubDate>
      <title>Streaming stocks slide &amp; rebound</title>
    </item>
    <item>
      <link>https://finance.yahoo.com/news/untitled.html</link>
    </item>
  </channel>
</rss>"#;

#[tokio::test]
async fn headlines_are_read_from_the_feed() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rss/2.0/headline")
            .query_param("s", "NFLX")
            .query_param("region", "US")
            .query_param("lang", "en-US");
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(FEED);
    });

    let client = common::client_for(&server);
    let items = headlines(&client, "NFLX").await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Netflix tops subscriber forecasts");
    assert_eq!(
        items[0].link.as_deref(),
        Some("https://finance.yahoo.com/news/netflix-subscribers-210000001.html")
    );
    assert_eq!(
        items[0].published,
        Some(Utc.with_ymd_and_hms(2021, 1, 5, 21, 0, 0).unwrap())
    );
    assert_eq!(
        items[0].guid.as_deref(),
        Some("2f0c1b7e-1111-4c1c-9d3a-000000000001")
    );
    assert_eq!(items[1].title, "Streaming stocks slide & rebound");
    assert_eq!(items[1].published, None);
}

#[tokio::test]
async fn ticker_news_uses_its_symbol() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rss/2.0/headline")
            .query_param("s", "NFLX");
        then.status(200).body(FEED);
    });

    let client = common::client_for(&server);
    let items = Ticker::new(&client, "NFLX").news().await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
}

#[test]
fn feed_without_items_is_empty() {
    let xml = "<rss version=\"2.0\"><channel><title>Yahoo! Finance: ZZZZ News</title></channel></rss>";
    assert!(parse_feed(xml).unwrap().is_empty());
}

#[test]
fn malformed_feed_is_an_error() {
    let err = parse_feed("<rss><channel><item><title>cut</channel></rss>").unwrap_err();
    assert!(matches!(err, YfError::Xml(_)), "got {err:?}");
}

#[tokio::test]
async fn feed_status_is_mapped() {
    let server = common::setup_server();
    let mock = common::mock_status(&server, "/rss/2.0/headline", 503);

    let client = common::client_for(&server);
    let err = headlines(&client, "NFLX").await.unwrap_err();

    mock.assert();
    assert!(err.is_upstream(), "got {err:?}");
}
