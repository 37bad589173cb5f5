use serde::Deserialize;
use serde_json::{Map, Value};

// Wire model for the v7 quote API; each result is kept as a dynamic map.
#[derive(Deserialize)]
pub(crate) struct V7Envelope {
    #[serde(rename = "quoteResponse")]
    pub(crate) quote_response: Option<V7QuoteResponse>,
}

#[derive(Deserialize)]
pub(crate) struct V7QuoteResponse {
    pub(crate) result: Option<Vec<Map<String, Value>>>,
}
