//! Historical prices and corporate actions from the chart JSON endpoint.

mod fetch;
mod model;
mod params;
mod wire;

pub use model::{Dividend, PriceRow, Split};
pub use params::Interval;

pub(crate) use fetch::{ChartWindow, fetch_chart};

use chrono::NaiveDate;

use crate::core::conversions::{epoch_to_date, epoch_to_datetime};
use crate::core::{YfClient, YfError};
use wire::ChartResult;

/// Builder for a historical price request.
///
/// Defaults to daily bars from the earliest available date up to now.
///
/// ```no_run
/// # use yahoo_fin_rs::{HistoryBuilder, Interval, YfClient};
/// # use chrono::NaiveDate;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let rows = HistoryBuilder::new(&client, "AMZN")
///     .start(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .interval(Interval::W1)
///     .fetch()
///     .await?;
/// println!("{} weekly bars", rows.len());
/// # Ok(())
/// # }
/// ```
pub struct HistoryBuilder<'a> {
    client: &'a YfClient,
    symbol: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    interval: Interval,
}

impl<'a> HistoryBuilder<'a> {
    pub fn new(client: &'a YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            start: None,
            end: None,
            interval: Interval::D1,
        }
    }

    /// First day to include (UTC midnight).
    pub fn start(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Day to stop at (UTC midnight, exclusive).
    pub fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    pub fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(start).end(end)
    }

    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Fetch the bars, oldest first. Bars with any missing field are dropped.
    ///
    /// # Errors
    ///
    /// [`YfError::InvalidDates`] if start is not before end, [`YfError::Status`] on a
    /// non-success response, [`YfError::DataUnavailable`] if Yahoo reports no data.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol, interval = %self.interval)))]
    pub async fn fetch(self) -> Result<Vec<PriceRow>, YfError> {
        let window = ChartWindow::between(self.start, self.end)?;
        let result = fetch_chart(self.client, &self.symbol, window, self.interval, None).await?;
        Ok(assemble_rows(&result, &self.symbol))
    }
}

fn assemble_rows(result: &ChartResult, symbol: &str) -> Vec<PriceRow> {
    let ticker = symbol.to_uppercase();
    let ts = result.timestamp.as_deref().unwrap_or_default();
    let Some(ind) = result.indicators.as_ref() else {
        return Vec::new();
    };
    let Some(q) = ind.quote.first() else {
        return Vec::new();
    };
    // Intraday charts carry no adjclose block; the close is already unadjusted there.
    let adj = ind.adjclose.first().map(|a| a.adjclose.as_slice());

    let at = |v: &[Option<f64>], i: usize| v.get(i).copied().flatten();

    let mut rows: Vec<PriceRow> = ts
        .iter()
        .enumerate()
        .filter_map(|(i, &t)| {
            let close = at(&q.close, i)?;
            let adjclose = match adj {
                Some(a) => at(a, i)?,
                None => close,
            };
            Some(PriceRow {
                date: epoch_to_datetime(t)?,
                open: at(&q.open, i)?,
                high: at(&q.high, i)?,
                low: at(&q.low, i)?,
                close,
                adjclose,
                volume: q.volume.get(i).copied().flatten()?,
                ticker: ticker.clone(),
            })
        })
        .collect();

    rows.sort_by_key(|r| r.date);
    rows
}

/// Dividends paid between `start` and `end`, oldest first.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] if the chart carries no dividend events.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn dividends(
    client: &YfClient,
    symbol: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<Dividend>, YfError> {
    let window = ChartWindow::between(start, end)?;
    let result = fetch_chart(client, symbol, window, Interval::D1, Some("div")).await?;

    let events = result
        .events
        .and_then(|e| e.dividends)
        .ok_or_else(|| YfError::DataUnavailable(format!("no dividend events for {symbol}")))?;

    let ticker = symbol.to_uppercase();
    let mut out: Vec<Dividend> = events
        .into_iter()
        .filter_map(|(key, ev)| {
            let ts = ev.date.or_else(|| key.parse().ok())?;
            Some(Dividend {
                date: epoch_to_date(ts)?,
                amount: ev.amount?,
                ticker: ticker.clone(),
            })
        })
        .collect();
    out.sort_by_key(|d| d.date);
    Ok(out)
}

/// Stock splits between `start` and `end`, oldest first.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] if the chart carries no split events.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn splits(
    client: &YfClient,
    symbol: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<Split>, YfError> {
    let window = ChartWindow::between(start, end)?;
    let result = fetch_chart(client, symbol, window, Interval::D1, Some("split")).await?;

    let events = result
        .events
        .and_then(|e| e.splits)
        .ok_or_else(|| YfError::DataUnavailable(format!("no split events for {symbol}")))?;

    let ticker = symbol.to_uppercase();
    let mut out: Vec<Split> = events
        .into_iter()
        .filter_map(|(key, ev)| {
            let ts = ev.date.or_else(|| key.parse().ok())?;
            let (numerator, denominator) = match (ev.numerator, ev.denominator) {
                (Some(n), Some(d)) => (n, d),
                _ => parse_ratio(ev.split_ratio.as_deref()?)?,
            };
            Some(Split {
                date: epoch_to_date(ts)?,
                numerator,
                denominator,
                ratio: ev
                    .split_ratio
                    .unwrap_or_else(|| format!("{numerator}:{denominator}")),
                ticker: ticker.clone(),
            })
        })
        .collect();
    out.sort_by_key(|s| s.date);
    Ok(out)
}

/// `"4:1"` or `"4/1"` into `(4, 1)`.
fn parse_ratio(s: &str) -> Option<(u64, u64)> {
    let (n, d) = s.split_once([':', '/'])?;
    Some((n.trim().parse().ok()?, d.trim().parse().ok()?))
}
