//! Option chains from the options page.

use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use crate::core::conversions::date_to_epoch;
use crate::core::{Cell, Table, YfClient, YfError};
use crate::scrape;

/// Columns holding percentages, converted to fractions.
const PERCENT_COLUMNS: &[&str] = &["% Change", "Implied Volatility"];

/// Columns holding plain or suffixed numbers.
const NUMERIC_COLUMNS: &[&str] = &[
    "Strike",
    "Last Price",
    "Bid",
    "Ask",
    "Change",
    "Volume",
    "Open Interest",
];

/// Format of the expiration picker entries (`"January 15, 2021"`).
const EXPIRATION_FORMAT: &str = "%B %d, %Y";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OptionChain {
    pub calls: Table,
    pub puts: Table,
}

fn options_url(client: &YfClient, symbol: &str, date: Option<NaiveDate>) -> Result<Url, YfError> {
    let mut url = client.quote_page_url(symbol, Some("options"))?;
    if let Some(d) = date {
        url.query_pairs_mut()
            .append_pair("date", &date_to_epoch(d).to_string());
    }
    Ok(url)
}

/// Convert display text to numbers in the known option columns.
fn clean_chain_table(table: &mut Table) {
    for col in PERCENT_COLUMNS {
        table.map_column(col, Cell::to_fraction);
    }
    for col in NUMERIC_COLUMNS {
        table.map_column(col, Cell::to_number);
    }
}

/// Calls and puts expiring on `date`, or on the nearest expiration when `date` is
/// `None`.
///
/// With `raw = false`, `% Change` and `Implied Volatility` become fractions and the
/// price, volume and interest columns become numbers. With `raw = true` every cell
/// keeps the page text.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::DataUnavailable`] if the
/// page does not carry both the calls and puts tables.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn option_chain(
    client: &YfClient,
    symbol: &str,
    date: Option<NaiveDate>,
    raw: bool,
) -> Result<OptionChain, YfError> {
    let url = options_url(client, symbol, date)?;
    let mut tables = scrape::fetch_tables(client, url, "options_html", symbol)
        .await?
        .into_iter();

    let (Some(mut calls), Some(mut puts)) = (tables.next(), tables.next()) else {
        return Err(YfError::DataUnavailable(format!(
            "options chain tables missing for {symbol}"
        )));
    };

    if !raw {
        clean_chain_table(&mut calls);
        clean_chain_table(&mut puts);
    }
    Ok(OptionChain { calls, puts })
}

/// Call side of [`option_chain`].
///
/// # Errors
///
/// Same as [`option_chain`].
pub async fn calls(
    client: &YfClient,
    symbol: &str,
    date: Option<NaiveDate>,
    raw: bool,
) -> Result<Table, YfError> {
    Ok(option_chain(client, symbol, date, raw).await?.calls)
}

/// Put side of [`option_chain`].
///
/// # Errors
///
/// Same as [`option_chain`].
pub async fn puts(
    client: &YfClient,
    symbol: &str,
    date: Option<NaiveDate>,
    raw: bool,
) -> Result<Table, YfError> {
    Ok(option_chain(client, symbol, date, raw).await?.puts)
}

/// Expiration dates offered in the page's expiration picker, ascending.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::DataUnavailable`] if no
/// picker entry parses as a date.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn expiration_dates(client: &YfClient, symbol: &str) -> Result<Vec<NaiveDate>, YfError> {
    let url = options_url(client, symbol, None)?;
    let body = scrape::fetch_page(client, url, "options_html", symbol).await?;

    let mut dates: Vec<NaiveDate> = scrape::option_texts(&body)
        .iter()
        .filter_map(|t| NaiveDate::parse_from_str(t, EXPIRATION_FORMAT).ok())
        .collect();
    dates.sort_unstable();
    dates.dedup();

    if dates.is_empty() {
        return Err(YfError::DataUnavailable(format!(
            "no option expirations for {symbol}"
        )));
    }
    Ok(dates)
}
