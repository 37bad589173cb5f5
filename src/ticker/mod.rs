use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::analysts;
use crate::calendar::{self, EarningsEvent};
use crate::core::{StatementTable, Table, YfClient, YfError};
use crate::fundamentals::{self, CompanyProfile, Earnings, Financials};
use crate::history::{self, Dividend, HistoryBuilder, Interval, PriceRow, Split};
use crate::holders;
use crate::news::{self, NewsItem};
use crate::options::{self, OptionChain};
use crate::quote;
use crate::stats;

/// A high-level interface for a single ticker symbol, providing access to every
/// per-symbol page this crate reads.
///
/// A `Ticker` is created with a [`YfClient`] and a symbol. Each method issues its
/// own request; nothing is cached between calls.
///
/// # Example
///
/// ```no_run
/// # use yahoo_fin_rs::{Ticker, YfClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YfClient::default();
/// let ticker = Ticker::new(&client, "MSFT");
///
/// let price = ticker.live_price().await?;
/// println!("MSFT last price: {price}");
///
/// let income = ticker.income_statement(false).await?;
/// println!("{} yearly periods", income.periods.len());
/// # Ok(())
/// # }
/// ```
pub struct Ticker {
    client: YfClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YfClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /* ---------------- History ---------------- */

    /// A [`HistoryBuilder`] for this symbol, for full control over the request.
    pub fn history_builder(&self) -> HistoryBuilder<'_> {
        HistoryBuilder::new(&self.client, self.symbol.clone())
    }

    /// Price bars between `start` and `end` at `interval`.
    ///
    /// # Errors
    ///
    /// See [`HistoryBuilder::fetch`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn history(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        interval: Interval,
    ) -> Result<Vec<PriceRow>, YfError> {
        let mut b = self.history_builder().interval(interval);
        if let Some(s) = start {
            b = b.start(s);
        }
        if let Some(e) = end {
            b = b.end(e);
        }
        b.fetch().await
    }

    /// # Errors
    ///
    /// See [`history::dividends`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn dividends(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Dividend>, YfError> {
        history::dividends(&self.client, &self.symbol, start, end).await
    }

    /// # Errors
    ///
    /// See [`history::splits`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn splits(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Split>, YfError> {
        history::splits(&self.client, &self.symbol, start, end).await
    }

    /* ---------------- Quote ---------------- */

    /// # Errors
    ///
    /// See [`quote::quote_table`].
    pub async fn quote_table(&self) -> Result<BTreeMap<String, String>, YfError> {
        quote::quote_table(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`quote::quote_data`].
    pub async fn quote_data(&self) -> Result<Map<String, Value>, YfError> {
        quote::quote_data(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`quote::live_price`].
    pub async fn live_price(&self) -> Result<f64, YfError> {
        quote::live_price(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`quote::premarket_price`].
    pub async fn premarket_price(&self) -> Result<f64, YfError> {
        quote::premarket_price(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`quote::postmarket_price`].
    pub async fn postmarket_price(&self) -> Result<f64, YfError> {
        quote::postmarket_price(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`quote::market_status`].
    pub async fn market_status(&self) -> Result<String, YfError> {
        quote::market_status(&self.client, &self.symbol).await
    }

    /* ---------------- Statistics ---------------- */

    /// # Errors
    ///
    /// See [`stats::stats`].
    pub async fn stats(&self) -> Result<Table, YfError> {
        stats::stats(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`stats::stats_valuation`].
    pub async fn stats_valuation(&self) -> Result<Table, YfError> {
        stats::stats_valuation(&self.client, &self.symbol).await
    }

    /* ---------------- Fundamentals ---------------- */

    /// # Errors
    ///
    /// See [`fundamentals::income_statement`].
    pub async fn income_statement(&self, quarterly: bool) -> Result<StatementTable, YfError> {
        fundamentals::income_statement(&self.client, &self.symbol, quarterly).await
    }

    /// # Errors
    ///
    /// See [`fundamentals::balance_sheet`].
    pub async fn balance_sheet(&self, quarterly: bool) -> Result<StatementTable, YfError> {
        fundamentals::balance_sheet(&self.client, &self.symbol, quarterly).await
    }

    /// # Errors
    ///
    /// See [`fundamentals::cash_flow`].
    pub async fn cash_flow(&self, quarterly: bool) -> Result<StatementTable, YfError> {
        fundamentals::cash_flow(&self.client, &self.symbol, quarterly).await
    }

    /// # Errors
    ///
    /// See [`fundamentals::financials`].
    pub async fn financials(&self, yearly: bool, quarterly: bool) -> Result<Financials, YfError> {
        fundamentals::financials(&self.client, &self.symbol, yearly, quarterly).await
    }

    /// # Errors
    ///
    /// See [`fundamentals::earnings`].
    pub async fn earnings(&self) -> Result<Earnings, YfError> {
        fundamentals::earnings(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`fundamentals::company_info`].
    pub async fn company_info(&self) -> Result<CompanyProfile, YfError> {
        fundamentals::company_info(&self.client, &self.symbol).await
    }

    /* ---------------- Holders / analysts ---------------- */

    /// # Errors
    ///
    /// See [`holders::holders`].
    pub async fn holders(&self) -> Result<BTreeMap<String, Table>, YfError> {
        holders::holders(&self.client, &self.symbol).await
    }

    /// # Errors
    ///
    /// See [`analysts::analysts_info`].
    pub async fn analysts_info(&self) -> Result<BTreeMap<String, Table>, YfError> {
        analysts::analysts_info(&self.client, &self.symbol).await
    }

    /* ---------------- Options ---------------- */

    /// # Errors
    ///
    /// See [`options::option_chain`].
    pub async fn option_chain(
        &self,
        date: Option<NaiveDate>,
        raw: bool,
    ) -> Result<OptionChain, YfError> {
        options::option_chain(&self.client, &self.symbol, date, raw).await
    }

    /// # Errors
    ///
    /// See [`options::calls`].
    pub async fn calls(&self, date: Option<NaiveDate>, raw: bool) -> Result<Table, YfError> {
        options::calls(&self.client, &self.symbol, date, raw).await
    }

    /// # Errors
    ///
    /// See [`options::puts`].
    pub async fn puts(&self, date: Option<NaiveDate>, raw: bool) -> Result<Table, YfError> {
        options::puts(&self.client, &self.symbol, date, raw).await
    }

    /// # Errors
    ///
    /// See [`options::expiration_dates`].
    pub async fn expiration_dates(&self) -> Result<Vec<NaiveDate>, YfError> {
        options::expiration_dates(&self.client, &self.symbol).await
    }

    /* ---------------- Calendar ---------------- */

    /// # Errors
    ///
    /// See [`calendar::earnings_history`].
    pub async fn earnings_history(&self) -> Result<Vec<EarningsEvent>, YfError> {
        calendar::earnings_history(&self.client, &self.symbol).await
    }

    /* ---------------- News ---------------- */

    /// # Errors
    ///
    /// See [`news::headlines`].
    pub async fn news(&self) -> Result<Vec<NewsItem>, YfError> {
        news::headlines(&self.client, &self.symbol).await
    }
}
