use serde::Deserialize;

use crate::scrape::normalize::de_opt_number;

#[derive(Deserialize)]
pub(crate) struct ScreenerResults {
    #[serde(default)]
    pub(crate) rows: Vec<EarningsRowNode>,
    #[serde(default, deserialize_with = "de_opt_number")]
    pub(crate) total: Option<u64>,
}

#[derive(Deserialize)]
pub(crate) struct EarningsRowNode {
    pub(crate) ticker: Option<String>,
    #[serde(rename = "companyshortname")]
    pub(crate) company_short_name: Option<String>,
    #[serde(rename = "startdatetime")]
    pub(crate) start_datetime: Option<String>,
    #[serde(rename = "startdatetimetype")]
    pub(crate) start_datetime_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_number", rename = "epsestimate")]
    pub(crate) eps_estimate: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number", rename = "epsactual")]
    pub(crate) eps_actual: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_number", rename = "epssurprisepct")]
    pub(crate) eps_surprise_pct: Option<f64>,
}
