//! Analysis page tables (earnings and revenue estimates, EPS trend, revisions,
//! growth estimates).

use std::collections::BTreeMap;

use crate::core::{Table, YfClient, YfError};
use crate::scrape;

/// The analysis page tables keyed by their first column header
/// (`"Earnings Estimate"`, `"Revenue Estimate"`, `"EPS Trend"`, ...).
///
/// Tables without a header are skipped. If two tables share a header the later
/// one wins.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] if the page
/// has no headed tables.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn analysts_info(
    client: &YfClient,
    symbol: &str,
) -> Result<BTreeMap<String, Table>, YfError> {
    let url = client.quote_page_url(symbol, Some("analysis"))?;
    let tables = scrape::fetch_tables(client, url, "analysis_html", symbol).await?;

    let out: BTreeMap<String, Table> = tables
        .into_iter()
        .filter_map(|t| {
            let key = t.columns.first().filter(|c| !c.is_empty())?.clone();
            Some((key, t))
        })
        .collect();

    if out.is_empty() {
        return Err(YfError::Parse(format!(
            "no headed tables on analysis page for {symbol}"
        )));
    }
    Ok(out)
}
