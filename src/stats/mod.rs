//! Key-statistics page tables.

use crate::core::{Table, YfClient, YfError};
use crate::scrape;

const PAGE: &str = "key-statistics";

fn attribute_columns() -> Vec<String> {
    vec!["Attribute".to_string(), "Value".to_string()]
}

async fn stats_tables(client: &YfClient, symbol: &str) -> Result<Vec<Table>, YfError> {
    let url = client.quote_page_url(symbol, Some(PAGE))?;
    let tables = scrape::fetch_tables(client, url, "stats_html", symbol).await?;
    if tables.is_empty() {
        return Err(YfError::Parse(format!(
            "no tables on statistics page for {symbol}"
        )));
    }
    Ok(tables)
}

/// Every statistic on the page (valuation, financial highlights, trading
/// information) as one `Attribute`/`Value` table, in page order.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] if the page
/// has no tables.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn stats(client: &YfClient, symbol: &str) -> Result<Table, YfError> {
    let tables = stats_tables(client, symbol).await?;
    let mut out = Table::new(attribute_columns());
    for t in tables {
        out.rows.extend(t.rows);
    }
    Ok(out)
}

/// The valuation measures block (the page's first table), with its own headers.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] if the page
/// has no tables.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn stats_valuation(client: &YfClient, symbol: &str) -> Result<Table, YfError> {
    let mut tables = stats_tables(client, symbol).await?;
    let mut first = tables.swap_remove(0);
    if first.columns.is_empty() && first.width() == 2 {
        first.columns = attribute_columns();
    }
    Ok(first)
}
