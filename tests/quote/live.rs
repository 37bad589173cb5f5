use httpmock::Method::GET;
use serde_json::json;
use yahoo_fin_rs::YfError;
use yahoo_fin_rs::quote::{
    live_price, market_status, postmarket_price, premarket_price, quote_data,
};

use crate::common;

fn v7_body(fields: serde_json::Value) -> String {
    json!({ "quoteResponse": { "result": [fields], "error": null } }).to_string()
}

#[tokio::test]
async fn quote_data_returns_all_fields() {
    let server = common::setup_server();
    let body = v7_body(json!({
        "symbol": "NFLX",
        "marketState": "PRE",
        "preMarketPrice": 521.5,
        "regularMarketPrice": 519.0
    }));
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v7/finance/quote")
            .query_param("symbols", "NFLX");
        then.status(200)
            .header("content-type", "application/json")
            .body(&body);
    });

    let client = common::client_for(&server);
    let data = quote_data(&client, "NFLX").await.unwrap();
    assert_eq!(data["symbol"], json!("NFLX"));

    assert_eq!(premarket_price(&client, "NFLX").await.unwrap(), 521.5);
    assert_eq!(market_status(&client, "NFLX").await.unwrap(), "PRE");

    let err = postmarket_price(&client, "NFLX").await.unwrap_err();
    assert!(matches!(err, YfError::DataUnavailable(_)), "got {err:?}");

    mock.assert_calls(4);
}

#[tokio::test]
async fn empty_quote_result_is_unavailable() {
    let server = common::setup_server();
    let body = json!({ "quoteResponse": { "result": [], "error": null } }).to_string();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v7/finance/quote");
        then.status(200).body(&body);
    });

    let client = common::client_for(&server);
    let err = quote_data(&client, "XXXX").await.unwrap_err();

    mock.assert();
    assert!(err.is_unavailable(), "got {err:?}");
}

#[tokio::test]
async fn live_price_reads_chart_meta() {
    let server = common::setup_server();
    let body = json!({
        "chart": { "result": [{ "meta": { "regularMarketPrice": 3_186.63 } }], "error": null }
    })
    .to_string();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/AMZN")
            .query_param("range", "1d");
        then.status(200).body(&body);
    });

    let client = common::client_for(&server);
    let price = live_price(&client, "AMZN").await.unwrap();

    mock.assert();
    assert_eq!(price, 3186.63);
}
