//! Quote page attributes and the live quote JSON endpoint.

mod wire;

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::core::{YfClient, YfError, net};
use crate::history::{ChartWindow, Interval, fetch_chart};
use crate::scrape;
use wire::V7Envelope;

/// Attribute/value pairs from the summary tables of the quote page
/// (`Previous Close`, `Open`, `Market Cap`, ...), keyed and sorted by attribute.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] if the page
/// has no two-column tables.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quote_table(
    client: &YfClient,
    symbol: &str,
) -> Result<BTreeMap<String, String>, YfError> {
    let url = client.quote_page_url(symbol, None)?;
    let tables = scrape::fetch_tables(client, url, "quote_html", symbol).await?;

    let out: BTreeMap<String, String> = tables
        .iter()
        .flat_map(|t| t.pairs())
        .filter(|(k, _)| !k.is_empty())
        .collect();

    if out.is_empty() {
        return Err(YfError::Parse(format!(
            "no attribute/value tables on quote page for {symbol}"
        )));
    }
    Ok(out)
}

/// Every field the live quote endpoint returns for `symbol`.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::DataUnavailable`] if the
/// response has no result for the symbol.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn quote_data(client: &YfClient, symbol: &str) -> Result<Map<String, Value>, YfError> {
    let mut url = client.base_quote_v7().clone();
    url.query_pairs_mut().append_pair("symbols", symbol);

    let body = net::fetch_text(client, url, "quote_v7", symbol, "json").await?;
    let env: V7Envelope = serde_json::from_str(&body)?;

    env.quote_response
        .and_then(|qr| qr.result)
        .and_then(|mut v| (!v.is_empty()).then(|| v.swap_remove(0)))
        .ok_or_else(|| YfError::DataUnavailable(format!("no quote result for {symbol}")))
}

/// Latest regular-session price from the chart endpoint.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] if the chart metadata carries no market price.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn live_price(client: &YfClient, symbol: &str) -> Result<f64, YfError> {
    let result = fetch_chart(client, symbol, ChartWindow::Range("1d"), Interval::D1, None).await?;
    result
        .meta
        .and_then(|m| m.regular_market_price)
        .ok_or_else(|| YfError::DataUnavailable(format!("no live price for {symbol}")))
}

/// Pre-market price, when the market is in its pre-market session.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] outside the pre-market session.
pub async fn premarket_price(client: &YfClient, symbol: &str) -> Result<f64, YfError> {
    number_field(client, symbol, "preMarketPrice").await
}

/// Post-market price, once the after-hours session has started.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] when there is no post-market price.
pub async fn postmarket_price(client: &YfClient, symbol: &str) -> Result<f64, YfError> {
    number_field(client, symbol, "postMarketPrice").await
}

/// Market state as reported by Yahoo (`PRE`, `REGULAR`, `POST`, `CLOSED`, ...).
///
/// # Errors
///
/// [`YfError::DataUnavailable`] if the quote has no market state.
pub async fn market_status(client: &YfClient, symbol: &str) -> Result<String, YfError> {
    let data = quote_data(client, symbol).await?;
    data.get("marketState")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| YfError::DataUnavailable(format!("marketState missing for {symbol}")))
}

async fn number_field(client: &YfClient, symbol: &str, field: &str) -> Result<f64, YfError> {
    let data = quote_data(client, symbol).await?;
    data.get(field)
        .and_then(Value::as_f64)
        .ok_or_else(|| YfError::DataUnavailable(format!("{field} missing for {symbol}")))
}
