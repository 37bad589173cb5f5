//! Page scraping: fetch a Yahoo page, then pull either its embedded JSON state or
//! its rendered tables.

pub mod extract;
pub mod html;
pub mod normalize;
pub(crate) mod utils;

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

pub use extract::{
    APP_MAIN_MARKER, QUOTE_SUMMARY_STORE, SCREENER_RESULTS_STORE, descend, extract_embedded_json,
    extract_store,
};
pub use html::{option_texts, parse_tables};
pub use normalize::{flatten_raw_wrappers, normalize_statements};

use serde_json::Value;
use url::Url;

use crate::core::{Table, YfClient, YfError, net};

/// GET an HTML page.
pub(crate) async fn fetch_page(
    client: &YfClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
) -> Result<String, YfError> {
    let body = net::fetch_text(client, url, endpoint, symbol, "html").await?;

    #[cfg(feature = "debug-dumps")]
    if debug::enabled() {
        let _ = debug::debug_dump_html(endpoint, symbol, &body);
    }

    Ok(body)
}

/// GET a page and extract one flattened store from its embedded JSON.
pub(crate) async fn fetch_store(
    client: &YfClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
    store: &str,
) -> Result<Value, YfError> {
    let body = fetch_page(client, url, endpoint, symbol).await?;
    let value = extract_store(&body, store)?;

    #[cfg(feature = "debug-dumps")]
    if debug::enabled() {
        let _ = debug::debug_dump_extracted_json(endpoint, symbol, &value);
    }

    Ok(value)
}

/// GET a page and parse all of its `<table>` elements.
pub(crate) async fn fetch_tables(
    client: &YfClient,
    url: Url,
    endpoint: &str,
    symbol: &str,
) -> Result<Vec<Table>, YfError> {
    let body = fetch_page(client, url, endpoint, symbol).await?;
    Ok(parse_tables(&body))
}
