use chrono::{NaiveDate, Utc};

use crate::core::conversions::date_to_epoch;
use crate::core::{YfClient, YfError, net};

use super::Interval;
use super::wire::{ChartEnvelope, ChartResult};

/// Default `period1` when no start is given (late March 1970), matching the
/// earliest history the chart endpoint serves.
pub(crate) const DEFAULT_START_EPOCH: i64 = 7_223_400;

pub(crate) enum ChartWindow {
    Period { start: i64, end: i64 },
    Range(&'static str),
}

impl ChartWindow {
    /// Resolve optional start/end dates into epoch bounds.
    pub(crate) fn between(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Self, YfError> {
        let start = start.map_or(DEFAULT_START_EPOCH, date_to_epoch);
        let end = end.map_or_else(|| Utc::now().timestamp(), date_to_epoch);
        if start >= end {
            return Err(YfError::InvalidDates);
        }
        Ok(ChartWindow::Period { start, end })
    }
}

pub(crate) async fn fetch_chart(
    client: &YfClient,
    symbol: &str,
    window: ChartWindow,
    interval: Interval,
    events: Option<&str>,
) -> Result<ChartResult, YfError> {
    let mut url = client.base_chart().join(symbol)?;
    {
        let mut qp = url.query_pairs_mut();
        match window {
            ChartWindow::Period { start, end } => {
                qp.append_pair("period1", &start.to_string());
                qp.append_pair("period2", &end.to_string());
            }
            ChartWindow::Range(r) => {
                qp.append_pair("range", r);
            }
        }
        qp.append_pair("interval", interval.as_str());
        if let Some(ev) = events {
            qp.append_pair("events", ev);
        }
    }

    let endpoint = match events {
        Some(ev) => format!("history_chart_{ev}"),
        None => "history_chart".to_string(),
    };
    let body = net::fetch_text(client, url, &endpoint, symbol, "json").await?;
    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<ChartResult, YfError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)?;

    let chart = parsed
        .chart
        .ok_or_else(|| YfError::Parse("chart node missing".into()))?;

    if let Some(err) = chart.error {
        return Err(YfError::DataUnavailable(format!(
            "yahoo chart error: {} - {}",
            err.code, err.description
        )));
    }

    chart
        .result
        .and_then(|mut v| (!v.is_empty()).then(|| v.swap_remove(0)))
        .ok_or_else(|| YfError::DataUnavailable("empty chart result".into()))
}
