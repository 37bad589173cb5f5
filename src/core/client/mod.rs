//! Public client surface + builder.
//! Defaults (UA and endpoint bases) live in `constants`.

mod constants;

use crate::core::YfError;
use constants::{
    DEFAULT_BASE_CALENDAR, DEFAULT_BASE_CHART, DEFAULT_BASE_QUOTE, DEFAULT_BASE_QUOTE_V7,
    DEFAULT_BASE_NEWS_RSS, DEFAULT_BASE_SYMBOL_DIR, DEFAULT_BASE_WIKI, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Configured HTTP client plus the base URL of every page family this crate reads.
///
/// A `YfClient` is immutable once built; every retrieval function borrows it, so the
/// user agent and endpoints travel with each call instead of living in global state.
/// Cloning is cheap.
#[derive(Debug, Clone)]
pub struct YfClient {
    http: Client,
    user_agent: String,
    base_quote: Url,
    base_chart: Url,
    base_quote_v7: Url,
    base_calendar: Url,
    base_symbol_dir: Url,
    base_wiki: Url,
    base_news_rss: Url,
}

impl Default for YfClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YfClient {
    /// Create a new builder.
    pub fn builder() -> YfClientBuilder {
        YfClientBuilder::default()
    }

    /// The User-Agent sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) fn base_quote_v7(&self) -> &Url {
        &self.base_quote_v7
    }
    pub(crate) fn base_calendar(&self) -> &Url {
        &self.base_calendar
    }
    pub(crate) fn base_symbol_dir(&self) -> &Url {
        &self.base_symbol_dir
    }
    pub(crate) fn base_wiki(&self) -> &Url {
        &self.base_wiki
    }
    pub(crate) fn base_news_rss(&self) -> &Url {
        &self.base_news_rss
    }

    /// Builds `{base_quote}{symbol}[/{page}]?p={symbol}`.
    pub(crate) fn quote_page_url(&self, symbol: &str, page: Option<&str>) -> Result<Url, YfError> {
        let path = match page {
            Some(p) => format!("{symbol}/{p}"),
            None => symbol.to_string(),
        };
        let mut url = self.base_quote.join(&path)?;
        url.query_pairs_mut().append_pair("p", symbol);
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YfClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    base_chart: Option<Url>,
    base_quote_v7: Option<Url>,
    base_calendar: Option<Url>,
    base_symbol_dir: Option<Url>,
    base_wiki: Option<Url>,
    base_news_rss: Option<Url>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YfClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote-page HTML base (e.g., `https://finance.yahoo.com/quote/`).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the live quote API (e.g., `https://query1.finance.yahoo.com/v7/finance/quote`).
    pub fn base_quote_v7(mut self, url: Url) -> Self {
        self.base_quote_v7 = Some(url);
        self
    }

    /// Override the earnings calendar page (e.g., `https://finance.yahoo.com/calendar/earnings`).
    pub fn base_calendar(mut self, url: Url) -> Self {
        self.base_calendar = Some(url);
        self
    }

    /// Override the symbol directory holding `nasdaqlisted.txt` and `otherlisted.txt`.
    pub fn base_symbol_dir(mut self, url: Url) -> Self {
        self.base_symbol_dir = Some(url);
        self
    }

    /// Override the Wikipedia article base used for index constituents.
    pub fn base_wiki(mut self, url: Url) -> Self {
        self.base_wiki = Some(url);
        self
    }

    /// Override the headline RSS feed URL.
    pub fn base_news_rss(mut self, url: Url) -> Self {
        self.base_news_rss = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<YfClient, YfError> {
        let base_quote = self.base_quote.unwrap_or(Url::parse(DEFAULT_BASE_QUOTE)?);
        let base_chart = self.base_chart.unwrap_or(Url::parse(DEFAULT_BASE_CHART)?);
        let base_quote_v7 = self
            .base_quote_v7
            .unwrap_or(Url::parse(DEFAULT_BASE_QUOTE_V7)?);
        let base_calendar = self
            .base_calendar
            .unwrap_or(Url::parse(DEFAULT_BASE_CALENDAR)?);
        let base_symbol_dir = self
            .base_symbol_dir
            .unwrap_or(Url::parse(DEFAULT_BASE_SYMBOL_DIR)?);
        let base_wiki = self.base_wiki.unwrap_or(Url::parse(DEFAULT_BASE_WIKI)?);
        let base_news_rss = self
            .base_news_rss
            .unwrap_or(Url::parse(DEFAULT_BASE_NEWS_RSS)?);

        let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_string());

        let mut httpb = reqwest::Client::builder()
            .user_agent(user_agent.as_str())
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(YfClient {
            http,
            user_agent,
            base_quote,
            base_chart,
            base_quote_v7,
            base_calendar,
            base_symbol_dir,
            base_wiki,
            base_news_rss,
        })
    }
}
