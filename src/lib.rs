//! yahoo-fin-rs: scrape and parse Yahoo Finance pages into tables.
//!
//! Every operation follows the same shape: build a URL from a symbol (and
//! optionally a date range or interval), fetch it with a shared [`YfClient`], pull
//! out either the page's embedded JSON state or its rendered HTML tables, and
//! reshape the result into a typed row list, a [`Table`] or a [`StatementTable`].
//! Headlines come from the per-ticker RSS feed instead.
//!
//! ```no_run
//! # use yahoo_fin_rs::{YfClient, fundamentals, quote};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = YfClient::default();
//! let price = quote::live_price(&client, "AAPL").await?;
//! let balance = fundamentals::balance_sheet(&client, "AAPL", true).await?;
//! println!("{price} / {} quarters", balance.periods.len());
//! # Ok(())
//! # }
//! ```

pub mod analysts;
pub mod calendar;
pub mod core;
pub mod fundamentals;
pub mod history;
pub mod holders;
pub mod news;
pub mod options;
pub mod quote;
pub mod scrape;
pub mod stats;
pub mod ticker;
pub mod tickers;

pub use crate::core::{
    Cell, StatementRow, StatementTable, Table, YfClient, YfClientBuilder, YfError,
};
pub use calendar::EarningsEvent;
pub use fundamentals::{CompanyProfile, Earnings, Financials, StatementSet};
pub use history::{Dividend, HistoryBuilder, Interval, PriceRow, Split};
pub use news::NewsItem;
pub use options::OptionChain;
pub use ticker::Ticker;
pub use tickers::TickerRecord;
