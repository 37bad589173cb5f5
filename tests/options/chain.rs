use chrono::NaiveDate;
use httpmock::Method::GET;
use yahoo_fin_rs::options::{calls, expiration_dates, option_chain, puts};
use yahoo_fin_rs::{Cell, YfError};

use crate::common;

const HEADER: &str = "<thead><tr><th>Contract Name</th><th>Last Trade Date</th><th>Strike</th>\
<th>Last Price</th><th>Bid</th><th>Ask</th><th>Change</th><th>% Change</th><th>Volume</th>\
<th>Open Interest</th><th>Implied Volatility</th></tr></thead>";

fn chain_page() -> String {
    common::html_page(&format!(
        "<select><option>January 15, 2021</option><option>January 22, 2021</option>\
<option>Expiration</option></select>\
<table>{HEADER}<tbody>\
<tr><td>AAPL210115C00100000</td><td>2021-01-14 3:59PM EST</td><td>100.00</td><td>28.40</td>\
<td>28.10</td><td>28.60</td><td>+1.20</td><td>+4.41%</td><td>1,024</td><td>5,310</td><td>125.00%</td></tr>\
</tbody></table>\
<table>{HEADER}<tbody>\
<tr><td>AAPL210115P00100000</td><td>2021-01-14 3:50PM EST</td><td>100.00</td><td>0.01</td>\
<td>0.00</td><td>0.01</td><td>0.00</td><td>-</td><td>-</td><td>12,075</td><td>109.38%</td></tr>\
</tbody></table>"
    ))
}

#[tokio::test]
async fn chain_is_cleaned_by_default() {
    let server = common::setup_server();
    let mock = common::mock_quote_page(&server, "/quote/AAPL/options", "AAPL", chain_page());

    let client = common::client_for(&server);
    let chain = option_chain(&client, "AAPL", None, false).await.unwrap();

    mock.assert();
    let c = &chain.calls;
    assert_eq!(c.column("Strike").unwrap()[0], &Cell::Number(100.0));
    assert_eq!(c.column("Volume").unwrap()[0], &Cell::Number(1024.0));
    assert_eq!(c.column("Implied Volatility").unwrap()[0], &Cell::Number(1.25));
    assert_eq!(
        c.column("Contract Name").unwrap()[0],
        &Cell::Text("AAPL210115C00100000".into())
    );

    let p = &chain.puts;
    assert_eq!(p.column("% Change").unwrap()[0], &Cell::Missing);
    assert_eq!(p.column("Open Interest").unwrap()[0], &Cell::Number(12075.0));
}

#[tokio::test]
async fn raw_chain_keeps_text() {
    let server = common::setup_server();
    let mock = common::mock_quote_page(&server, "/quote/AAPL/options", "AAPL", chain_page());

    let client = common::client_for(&server);
    let c = calls(&client, "AAPL", None, true).await.unwrap();

    mock.assert();
    assert_eq!(c.column("% Change").unwrap()[0], &Cell::Text("+4.41%".into()));
}

#[tokio::test]
async fn date_is_sent_as_epoch() {
    let server = common::setup_server();
    let body = chain_page();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/quote/AAPL/options")
            .query_param("p", "AAPL")
            .query_param("date", "1610668800");
        then.status(200).body(&body);
    });

    let client = common::client_for(&server);
    let p = puts(
        &client,
        "AAPL",
        NaiveDate::from_ymd_opt(2021, 1, 15),
        false,
    )
    .await
    .unwrap();

    mock.assert();
    assert_eq!(p.len(), 1);
}

#[tokio::test]
async fn single_table_is_unavailable() {
    let server = common::setup_server();
    let page = common::html_page(&format!("<table>{HEADER}<tbody></tbody></table>"));
    let mock = common::mock_quote_page(&server, "/quote/AAPL/options", "AAPL", page);

    let client = common::client_for(&server);
    let err = option_chain(&client, "AAPL", None, false).await.unwrap_err();

    mock.assert();
    assert!(matches!(err, YfError::DataUnavailable(_)), "got {err:?}");
}

#[tokio::test]
async fn expirations_parse_picker_entries() {
    let server = common::setup_server();
    let mock = common::mock_quote_page(&server, "/quote/AAPL/options", "AAPL", chain_page());

    let client = common::client_for(&server);
    let dates = expiration_dates(&client, "AAPL").await.unwrap();

    mock.assert();
    assert_eq!(
        dates,
        vec![
            NaiveDate::from_ymd_opt(2021, 1, 15).unwrap(),
            NaiveDate::from_ymd_opt(2021, 1, 22).unwrap(),
        ]
    );
}

#[tokio::test]
async fn no_expirations_is_unavailable() {
    let server = common::setup_server();
    let mock = common::mock_quote_page(
        &server,
        "/quote/XYZ/options",
        "XYZ",
        common::html_page("<p>no options</p>"),
    );

    let client = common::client_for(&server);
    let err = expiration_dates(&client, "XYZ").await.unwrap_err();

    mock.assert();
    assert!(err.is_unavailable(), "got {err:?}");
}
