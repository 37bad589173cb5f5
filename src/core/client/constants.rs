//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo quote HTML base (symbol and page are appended).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finance.yahoo.com/quote/";

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Base URL for the Yahoo Finance v7 quote API.
pub(crate) const DEFAULT_BASE_QUOTE_V7: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Yahoo earnings calendar page.
pub(crate) const DEFAULT_BASE_CALENDAR: &str = "https://finance.yahoo.com/calendar/earnings";

/// HTTPS mirror of the `ftp.nasdaqtrader.com/SymbolDirectory` listing.
pub(crate) const DEFAULT_BASE_SYMBOL_DIR: &str = "https://www.nasdaqtrader.com/dynamic/SymDir/";

/// Per-ticker headline RSS feed.
pub(crate) const DEFAULT_BASE_NEWS_RSS: &str = "https://feeds.finance.yahoo.com/rss/2.0/headline";

/// Wikipedia article base used for index constituent tables.
pub(crate) const DEFAULT_BASE_WIKI: &str = "https://en.wikipedia.org/wiki/";
