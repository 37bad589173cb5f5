//! Financial statements, earnings and company profile from the `QuoteSummaryStore`
//! embedded in the quote sub-pages.

mod model;
mod wire;

pub use model::{
    Address, CompanyProfile, Earnings, EpsResult, Financials, Officer, RevenueEarnings,
    StatementSet,
};

use serde_json::Value;

use crate::core::{StatementTable, YfClient, YfError};
use crate::scrape::{self, QUOTE_SUMMARY_STORE, descend, normalize_statements};
use wire::{EarningsNode, ProfileNode, period_label};

#[derive(Clone, Copy, Debug)]
enum Statement {
    Income,
    Balance,
    CashFlow,
}

impl Statement {
    fn page(self) -> &'static str {
        match self {
            Statement::Income => "financials",
            Statement::Balance => "balance-sheet",
            Statement::CashFlow => "cash-flow",
        }
    }

    fn node(self, quarterly: bool) -> &'static str {
        match (self, quarterly) {
            (Statement::Income, false) => "incomeStatementHistory",
            (Statement::Income, true) => "incomeStatementHistoryQuarterly",
            (Statement::Balance, false) => "balanceSheetHistory",
            (Statement::Balance, true) => "balanceSheetHistoryQuarterly",
            (Statement::CashFlow, false) => "cashflowStatementHistory",
            (Statement::CashFlow, true) => "cashflowStatementHistoryQuarterly",
        }
    }

    fn list_key(self) -> &'static str {
        match self {
            Statement::Income => "incomeStatementHistory",
            Statement::Balance => "balanceSheetStatements",
            Statement::CashFlow => "cashflowStatements",
        }
    }
}

async fn summary_store(client: &YfClient, symbol: &str, page: &str) -> Result<Value, YfError> {
    let url = client.quote_page_url(symbol, Some(page))?;
    let endpoint = format!("{}_html", page.replace('-', "_"));
    scrape::fetch_store(client, url, &endpoint, symbol, QUOTE_SUMMARY_STORE).await
}

/// A sub-object that is absent from an otherwise valid store is unavailable data,
/// not a layout change.
fn require<'a>(store: &'a Value, path: &[&str], symbol: &str) -> Result<&'a Value, YfError> {
    descend(store, path)
        .map_err(|_| YfError::DataUnavailable(format!("{} missing for {symbol}", path.join("."))))
}

fn statement_from_store(
    store: &Value,
    kind: Statement,
    quarterly: bool,
    symbol: &str,
) -> Result<StatementTable, YfError> {
    let node = require(store, &[kind.node(quarterly), kind.list_key()], symbol)?;
    match node {
        Value::Array(snapshots) => normalize_statements(snapshots),
        Value::Null => Err(YfError::DataUnavailable(format!(
            "{} is null for {symbol}",
            kind.node(quarterly)
        ))),
        _ => Err(YfError::Parse(format!(
            "{}.{} is not a list",
            kind.node(quarterly),
            kind.list_key()
        ))),
    }
}

async fn statement(
    client: &YfClient,
    symbol: &str,
    kind: Statement,
    quarterly: bool,
) -> Result<StatementTable, YfError> {
    let store = summary_store(client, symbol, kind.page()).await?;
    statement_from_store(&store, kind, quarterly, symbol)
}

/// Income statement, one column per fiscal period end.
///
/// # Errors
///
/// [`YfError::Status`] on a non-success response, [`YfError::Parse`] if the page
/// state cannot be located, [`YfError::DataUnavailable`] if the statement history
/// is absent.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn income_statement(
    client: &YfClient,
    symbol: &str,
    quarterly: bool,
) -> Result<StatementTable, YfError> {
    statement(client, symbol, Statement::Income, quarterly).await
}

/// Balance sheet, one column per fiscal period end.
///
/// # Errors
///
/// Same as [`income_statement`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn balance_sheet(
    client: &YfClient,
    symbol: &str,
    quarterly: bool,
) -> Result<StatementTable, YfError> {
    statement(client, symbol, Statement::Balance, quarterly).await
}

/// Cash flow statement, one column per fiscal period end.
///
/// # Errors
///
/// Same as [`income_statement`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn cash_flow(
    client: &YfClient,
    symbol: &str,
    quarterly: bool,
) -> Result<StatementTable, YfError> {
    statement(client, symbol, Statement::CashFlow, quarterly).await
}

/// All three statements for the requested frequencies from a single page load.
///
/// The financials page state carries every statement history, so only one request
/// is made regardless of how many tables are returned.
///
/// # Errors
///
/// Same as [`income_statement`]; any missing history fails the whole call.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn financials(
    client: &YfClient,
    symbol: &str,
    yearly: bool,
    quarterly: bool,
) -> Result<Financials, YfError> {
    let store = summary_store(client, symbol, Statement::Income.page()).await?;

    let set = |q: bool| -> Result<StatementSet, YfError> {
        Ok(StatementSet {
            income_statement: statement_from_store(&store, Statement::Income, q, symbol)?,
            balance_sheet: statement_from_store(&store, Statement::Balance, q, symbol)?,
            cash_flow: statement_from_store(&store, Statement::CashFlow, q, symbol)?,
        })
    };

    Ok(Financials {
        yearly: yearly.then(|| set(false)).transpose()?,
        quarterly: quarterly.then(|| set(true)).transpose()?,
    })
}

/// EPS history and revenue/earnings series from the financials page.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] if the page state has no `earnings` module.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn earnings(client: &YfClient, symbol: &str) -> Result<Earnings, YfError> {
    let store = summary_store(client, symbol, Statement::Income.page()).await?;
    let node = require(&store, &["earnings"], symbol)?;
    let node: EarningsNode = serde_json::from_value(node.clone())?;

    let quarterly_results = node
        .earnings_chart
        .map(|c| c.quarterly)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|q| {
            Some(EpsResult {
                quarter: period_label(q.date)?,
                actual: q.actual,
                estimate: q.estimate,
            })
        })
        .collect();

    let (yearly, quarterly) = node
        .financials_chart
        .map(|f| (f.yearly, f.quarterly))
        .unwrap_or_default();
    let to_rows = |nodes: Vec<wire::PeriodNode>| -> Vec<RevenueEarnings> {
        nodes
            .into_iter()
            .filter_map(|p| {
                Some(RevenueEarnings {
                    period: period_label(p.date)?,
                    revenue: p.revenue,
                    earnings: p.earnings,
                })
            })
            .collect()
    };

    Ok(Earnings {
        quarterly_results,
        yearly_revenue_earnings: to_rows(yearly),
        quarterly_revenue_earnings: to_rows(quarterly),
    })
}

/// Sector, industry, address, headcount and officers from the profile page.
///
/// Reads `assetProfile`, falling back to `summaryProfile`.
///
/// # Errors
///
/// [`YfError::DataUnavailable`] if neither profile module is present.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn company_info(client: &YfClient, symbol: &str) -> Result<CompanyProfile, YfError> {
    let store = summary_store(client, symbol, "profile").await?;
    let node = ["assetProfile", "summaryProfile"]
        .iter()
        .find_map(|k| store.get(*k).filter(|v| v.is_object()))
        .ok_or_else(|| YfError::DataUnavailable(format!("profile missing for {symbol}")))?;
    let p: ProfileNode = serde_json::from_value(node.clone())?;

    Ok(CompanyProfile {
        sector: p.sector,
        industry: p.industry,
        website: p.website,
        summary: p.long_business_summary,
        address: Address {
            street1: p.address1,
            street2: p.address2,
            city: p.city,
            state: p.state,
            country: p.country,
            zip: p.zip,
            phone: p.phone,
        },
        full_time_employees: p.full_time_employees,
        officers: p
            .company_officers
            .into_iter()
            .filter_map(|o| {
                Some(Officer {
                    name: o.name?,
                    title: o.title,
                    age: o.age,
                    year_born: o.year_born,
                    total_pay: o.total_pay,
                })
            })
            .collect(),
    })
}
