use serde::Deserialize;
use serde_json::Value;

use crate::scrape::normalize::{de_opt_number, de_opt_string};

/* Shapes of the QuoteSummaryStore modules read here, after `{raw, fmt}` flattening. */

#[derive(Deserialize)]
pub(crate) struct EarningsNode {
    #[serde(rename = "earningsChart")]
    pub(crate) earnings_chart: Option<EarningsChartNode>,
    #[serde(rename = "financialsChart")]
    pub(crate) financials_chart: Option<FinancialsChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct EarningsChartNode {
    #[serde(default)]
    pub(crate) quarterly: Vec<EpsNode>,
}

#[derive(Deserialize)]
pub(crate) struct EpsNode {
    pub(crate) date: Option<Value>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) actual: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) estimate: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct FinancialsChartNode {
    #[serde(default)]
    pub(crate) yearly: Vec<PeriodNode>,
    #[serde(default)]
    pub(crate) quarterly: Vec<PeriodNode>,
}

#[derive(Deserialize)]
pub(crate) struct PeriodNode {
    pub(crate) date: Option<Value>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) revenue: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) earnings: Option<f64>,
}

#[derive(Deserialize)]
pub(crate) struct ProfileNode {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) sector: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) industry: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) website: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string", rename = "longBusinessSummary")]
    pub(crate) long_business_summary: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) address1: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) address2: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) city: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) state: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) country: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) zip: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) phone: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number", rename = "fullTimeEmployees")]
    pub(crate) full_time_employees: Option<u64>,
    #[serde(default, rename = "companyOfficers")]
    pub(crate) company_officers: Vec<OfficerNode>,
}

#[derive(Deserialize)]
pub(crate) struct OfficerNode {
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) age: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number", rename = "yearBorn")]
    pub(crate) year_born: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_number", rename = "totalPay")]
    pub(crate) total_pay: Option<f64>,
}

/// Period labels arrive as strings (`"1Q2021"`) or bare years (`2020`).
pub(crate) fn period_label(v: Option<Value>) -> Option<String> {
    match v? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
