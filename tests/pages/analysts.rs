use yahoo_fin_rs::Cell;
use yahoo_fin_rs::analysts::analysts_info;

use crate::common;

#[tokio::test]
async fn analysis_tables_keyed_by_first_header() {
    let server = common::setup_server();
    let page = common::html_page(
        "<table><thead><tr><th>Earnings Estimate</th><th>Current Qtr.</th><th>Next Qtr.</th></tr></thead>\
<tbody><tr><td>No. of Analysts</td><td>28</td><td>26</td></tr>\
<tr><td>Avg. Estimate</td><td>1.01</td><td>0.71</td></tr></tbody></table>\
<table><thead><tr><th>Growth Estimates</th><th>AAPL</th></tr></thead>\
<tbody><tr><td>Current Qtr.</td><td>57.80%</td></tr></tbody></table>\
<table><tbody><tr><td>headless</td></tr></tbody></table>",
    );
    let mock = common::mock_quote_page(&server, "/quote/AAPL/analysis", "AAPL", page);

    let client = common::client_for(&server);
    let out = analysts_info(&client, "AAPL").await.unwrap();

    mock.assert();
    assert_eq!(
        out.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Earnings Estimate", "Growth Estimates"]
    );
    let est = &out["Earnings Estimate"];
    assert_eq!(est.len(), 2);
    assert_eq!(est.get(1, 2), Some(&Cell::Text("0.71".into())));
}
