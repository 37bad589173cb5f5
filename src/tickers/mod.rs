//! Index constituents and exchange symbol directories.
//!
//! Constituent lists come from Wikipedia (S&P 500, FTSE 100, FTSE 250, NIFTY 50)
//! and from Yahoo's `^DJI` components page. Exchange listings come from the Nasdaq
//! Trader symbol directory files.

use serde::Serialize;

use crate::core::{Cell, Table, YfClient, YfError, net};
use crate::scrape;

/// One index constituent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerRecord {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
}

/// Where a constituent table lives and how its columns are labelled.
struct IndexSource {
    article: &'static str,
    symbol: &'static [&'static str],
    name: &'static [&'static str],
    sector: &'static [&'static str],
}

const SP500: IndexSource = IndexSource {
    article: "List_of_S%26P_500_companies",
    symbol: &["Symbol", "Ticker"],
    name: &["Security", "Company"],
    sector: &["GICS Sector"],
};

const FTSE100: IndexSource = IndexSource {
    article: "FTSE_100_Index",
    symbol: &["Ticker", "EPIC"],
    name: &["Company"],
    sector: &["Sector", "FTSE Industry"],
};

const FTSE250: IndexSource = IndexSource {
    article: "FTSE_250_Index",
    symbol: &["Ticker", "EPIC"],
    name: &["Company"],
    sector: &["Sector", "FTSE Industry"],
};

const NIFTY50: IndexSource = IndexSource {
    article: "NIFTY_50",
    symbol: &["Symbol"],
    name: &["Company"],
    sector: &["Sector"],
};

const DOW_PATH: &str = "%5EDJI/components";
const DOW_SYMBOL: &str = "^DJI";

const NASDAQ_LISTED: &str = "nasdaqlisted.txt";
const OTHER_LISTED: &str = "otherlisted.txt";
const FOOTER_PREFIX: &str = "File Creation Time";

/// First column whose label starts with one of `labels` (case-insensitive).
fn find_column(table: &Table, labels: &[&str]) -> Option<usize> {
    labels.iter().find_map(|want| {
        let want = want.to_ascii_lowercase();
        table
            .columns
            .iter()
            .position(|c| c.trim().to_ascii_lowercase().starts_with(&want))
    })
}

fn cell_string(cell: Option<&Cell>) -> Option<String> {
    match cell? {
        Cell::Text(s) => Some(s.trim().to_string()),
        Cell::Number(v) => Some(v.to_string()),
        Cell::Missing => None,
    }
}

/// Pick the first table carrying a symbol column and read its rows as records.
fn records_from_tables(tables: &[Table], source: &IndexSource) -> Result<Vec<TickerRecord>, YfError> {
    let (table, sym_idx) = tables
        .iter()
        .find_map(|t| find_column(t, source.symbol).map(|i| (t, i)))
        .ok_or_else(|| {
            YfError::Parse(format!(
                "no constituent table with a {:?} column",
                source.symbol
            ))
        })?;
    let name_idx = find_column(table, source.name);
    let sector_idx = find_column(table, source.sector);

    Ok(table
        .rows
        .iter()
        .filter_map(|row| {
            Some(TickerRecord {
                symbol: cell_string(row.get(sym_idx)).filter(|s| !s.is_empty())?,
                name: name_idx.and_then(|i| cell_string(row.get(i))),
                sector: sector_idx.and_then(|i| cell_string(row.get(i))),
            })
        })
        .collect())
}

async fn wiki_index(client: &YfClient, source: &IndexSource) -> Result<Vec<TickerRecord>, YfError> {
    let url = client.base_wiki().join(source.article)?;
    let tables = scrape::fetch_tables(client, url, "wiki_html", source.article).await?;
    records_from_tables(&tables, source)
}

/// Current S&P 500 constituents.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] if no table
/// with a symbol column is found.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn sp500(client: &YfClient) -> Result<Vec<TickerRecord>, YfError> {
    wiki_index(client, &SP500).await
}

/// Current FTSE 100 constituents.
///
/// # Errors
///
/// Same as [`sp500`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn ftse100(client: &YfClient) -> Result<Vec<TickerRecord>, YfError> {
    wiki_index(client, &FTSE100).await
}

/// Current FTSE 250 constituents.
///
/// # Errors
///
/// Same as [`sp500`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn ftse250(client: &YfClient) -> Result<Vec<TickerRecord>, YfError> {
    wiki_index(client, &FTSE250).await
}

/// Current NIFTY 50 constituents.
///
/// # Errors
///
/// Same as [`sp500`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn nifty50(client: &YfClient) -> Result<Vec<TickerRecord>, YfError> {
    wiki_index(client, &NIFTY50).await
}

/// Dow Jones Industrial Average components from Yahoo, sorted by symbol.
///
/// # Errors
///
/// Same as [`sp500`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn dow(client: &YfClient) -> Result<Vec<TickerRecord>, YfError> {
    let mut url = client.base_quote().join(DOW_PATH)?;
    url.query_pairs_mut().append_pair("p", DOW_SYMBOL);

    let tables = scrape::fetch_tables(client, url, "dow_components_html", DOW_SYMBOL).await?;
    let source = IndexSource {
        article: DOW_PATH,
        symbol: &["Symbol"],
        name: &["Company Name", "Company"],
        sector: &["Sector", "Industry"],
    };
    let mut out = records_from_tables(&tables, &source)?;
    out.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    Ok(out)
}

/// Parse a pipe-delimited symbol directory file.
///
/// The first line is the header; the trailing `File Creation Time` line and blank
/// lines are dropped.
///
/// # Errors
///
/// Returns [`YfError::Parse`] if the text has no header line.
pub fn parse_symbol_directory(text: &str) -> Result<Table, YfError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines
        .next()
        .ok_or_else(|| YfError::Parse("symbol directory is empty".into()))?;

    let mut table = Table::new(header.split('|').map(|h| h.trim().to_string()).collect());
    table.rows = lines
        .filter(|l| !l.starts_with(FOOTER_PREFIX))
        .map(|l| l.split('|').map(|c| Cell::from_text(c.trim())).collect())
        .collect();
    Ok(table)
}

/// Symbols from a directory table, skipping test issues.
fn listed_symbols(table: &Table, symbol_column: &str) -> Result<Vec<String>, YfError> {
    let sym = table
        .column_index(symbol_column)
        .ok_or_else(|| YfError::Parse(format!("`{symbol_column}` column missing")))?;
    let test = table
        .column_index("Test Issue")
        .ok_or_else(|| YfError::Parse("`Test Issue` column missing".into()))?;

    Ok(table
        .rows
        .iter()
        .filter(|r| r.get(test).and_then(Cell::as_str) == Some("N"))
        .filter_map(|r| r.get(sym).and_then(Cell::as_str).map(str::to_string))
        .collect())
}

async fn symbol_directory(client: &YfClient, file: &str) -> Result<Table, YfError> {
    let url = client.base_symbol_dir().join(file)?;
    let text = net::fetch_text(client, url, "symbol_directory", file, "txt").await?;
    parse_symbol_directory(&text)
}

/// Every security in `nasdaqlisted.txt`, all columns.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response; [`YfError::Parse`] on an empty file.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn nasdaq_listed(client: &YfClient) -> Result<Table, YfError> {
    symbol_directory(client, NASDAQ_LISTED).await
}

/// Every security in `otherlisted.txt` (NYSE, NYSE American, Cboe, IEX, ...), all columns.
///
/// # Errors
///
/// Same as [`nasdaq_listed`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn other_listed(client: &YfClient) -> Result<Table, YfError> {
    symbol_directory(client, OTHER_LISTED).await
}

/// Nasdaq-listed symbols, excluding test issues.
///
/// # Errors
///
/// Same as [`nasdaq_listed`], plus [`YfError::Parse`] if the expected columns are absent.
pub async fn nasdaq_symbols(client: &YfClient) -> Result<Vec<String>, YfError> {
    listed_symbols(&nasdaq_listed(client).await?, "Symbol")
}

/// Symbols listed on other exchanges, excluding test issues.
///
/// # Errors
///
/// Same as [`nasdaq_symbols`].
pub async fn other_symbols(client: &YfClient) -> Result<Vec<String>, YfError> {
    listed_symbols(&other_listed(client).await?, "ACT Symbol")
}
