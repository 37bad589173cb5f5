use serde::Serialize;

use crate::core::StatementTable;

/// Income statement, balance sheet and cash flow for one reporting frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementSet {
    pub income_statement: StatementTable,
    pub balance_sheet: StatementTable,
    pub cash_flow: StatementTable,
}

/// Statements read from a single financials page load.
///
/// A frequency that was not requested is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Financials {
    pub yearly: Option<StatementSet>,
    pub quarterly: Option<StatementSet>,
}

/// Reported vs. estimated EPS for one quarter (`"1Q2021"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpsResult {
    pub quarter: String,
    pub actual: Option<f64>,
    pub estimate: Option<f64>,
}

/// Revenue and earnings for one period: a year (`"2020"`) or quarter (`"1Q2021"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueEarnings {
    pub period: String,
    pub revenue: Option<f64>,
    pub earnings: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Earnings {
    pub quarterly_results: Vec<EpsResult>,
    pub yearly_revenue_earnings: Vec<RevenueEarnings>,
    pub quarterly_revenue_earnings: Vec<RevenueEarnings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Address {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Officer {
    pub name: String,
    pub title: Option<String>,
    pub age: Option<u32>,
    pub year_born: Option<u32>,
    pub total_pay: Option<f64>,
}

/// Company description from the profile page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub address: Address,
    pub full_time_employees: Option<u64>,
    pub officers: Vec<Officer>,
}
