//! Earnings calendar: companies reporting on a day, over a range of days, and a
//! single company's reporting history.

mod wire;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::core::{YfClient, YfError};
use crate::scrape::{self, SCREENER_RESULTS_STORE, descend};
use wire::{EarningsRowNode, ScreenerResults};

/// Rows requested per calendar page.
pub const PAGE_SIZE: usize = 100;

/// Upper bound on pages read for one query.
pub const MAX_PAGES: usize = 50;

/// One row of the earnings calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarningsEvent {
    pub ticker: String,
    pub company_name: Option<String>,
    /// Scheduled (or actual) report time.
    pub start: Option<DateTime<Utc>>,
    /// Yahoo's time-of-day code: `BMO`, `AMC`, `TAS`, `TNS`.
    pub start_time_type: Option<String>,
    pub eps_estimate: Option<f64>,
    pub eps_actual: Option<f64>,
    pub eps_surprise_pct: Option<f64>,
}

impl EarningsEvent {
    fn from_node(n: EarningsRowNode) -> Option<Self> {
        Some(Self {
            ticker: n.ticker?,
            company_name: n.company_short_name,
            start: n
                .start_datetime
                .as_deref()
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
            start_time_type: n.start_datetime_type,
            eps_estimate: n.eps_estimate,
            eps_actual: n.eps_actual,
            eps_surprise_pct: n.eps_surprise_pct,
        })
    }
}

/// Read every page of a calendar query, following `offset` until `total` rows have
/// been seen, a page comes back short, or [`MAX_PAGES`] is reached. Without a
/// `total` only a short page ends the query.
async fn fetch_calendar(
    client: &YfClient,
    key: &str,
    value: &str,
) -> Result<Vec<EarningsEvent>, YfError> {
    let mut out = Vec::new();

    for page in 0..MAX_PAGES {
        let offset = page * PAGE_SIZE;
        let mut url = client.base_calendar().clone();
        url.query_pairs_mut()
            .append_pair(key, value)
            .append_pair("offset", &offset.to_string())
            .append_pair("size", &PAGE_SIZE.to_string());

        let store =
            scrape::fetch_store(client, url, "calendar_html", value, SCREENER_RESULTS_STORE)
                .await?;
        let results = descend(&store, &["results"]).map_err(|_| {
            YfError::DataUnavailable(format!("earnings calendar results missing for {value}"))
        })?;
        let results: ScreenerResults = serde_json::from_value(results.clone())?;

        let fetched = results.rows.len();
        out.extend(results.rows.into_iter().filter_map(EarningsEvent::from_node));

        #[cfg(feature = "tracing")]
        tracing::debug!(page, fetched, total = ?results.total, "earnings calendar page");

        let seen_total = results
            .total
            .is_some_and(|t| u64::try_from(offset + fetched).is_ok_and(|seen| seen >= t));
        if fetched < PAGE_SIZE || seen_total {
            break;
        }
    }

    Ok(out)
}

/// Companies reporting earnings on `day`.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response, [`YfError::Parse`] if the page
/// state cannot be located, [`YfError::DataUnavailable`] if it carries no results.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn earnings_for_date(
    client: &YfClient,
    day: NaiveDate,
) -> Result<Vec<EarningsEvent>, YfError> {
    fetch_calendar(client, "day", &day.format("%Y-%m-%d").to_string()).await
}

/// Companies reporting on each day from `start` through `end`, inclusive, in day
/// order. Days are fetched one after another.
///
/// # Errors
///
/// [`YfError::InvalidDates`] if `start` is after `end`; otherwise the first error
/// from [`earnings_for_date`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn earnings_in_date_range(
    client: &YfClient,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<EarningsEvent>, YfError> {
    if start > end {
        return Err(YfError::InvalidDates);
    }

    let mut out = Vec::new();
    for day in start.iter_days().take_while(|d| *d <= end) {
        out.extend(earnings_for_date(client, day).await?);
    }
    Ok(out)
}

/// Every earnings report Yahoo lists for `symbol`, past and scheduled.
///
/// # Errors
///
/// Same as [`earnings_for_date`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn earnings_history(
    client: &YfClient,
    symbol: &str,
) -> Result<Vec<EarningsEvent>, YfError> {
    fetch_calendar(client, "symbol", symbol).await
}
