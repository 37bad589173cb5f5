//! Holders page tables.

use std::collections::BTreeMap;

use crate::core::{Table, YfClient, YfError};
use crate::scrape;

/// Names given to the holders page tables, in page order.
pub const HOLDER_TABLE_NAMES: [&str; 4] = [
    "Major Holders",
    "Direct Holders (Forms 3 and 4)",
    "Top Institutional Holders",
    "Top Mutual Fund Holders",
];

/// The holders page tables keyed by [`HOLDER_TABLE_NAMES`].
///
/// Tables are paired with names positionally; a page with fewer tables yields
/// fewer entries and extra tables are ignored.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] if the page
/// has no tables.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn holders(client: &YfClient, symbol: &str) -> Result<BTreeMap<String, Table>, YfError> {
    let url = client.quote_page_url(symbol, Some("holders"))?;
    let tables = scrape::fetch_tables(client, url, "holders_html", symbol).await?;
    if tables.is_empty() {
        return Err(YfError::Parse(format!("no tables on holders page for {symbol}")));
    }

    Ok(HOLDER_TABLE_NAMES
        .iter()
        .zip(tables)
        .map(|(name, table)| ((*name).to_string(), table))
        .collect())
}
