use httpmock::Method::GET;
use yahoo_fin_rs::tickers::{nasdaq_listed, nasdaq_symbols, other_listed, other_symbols};

use crate::common;

const NASDAQ: &str = "Symbol|Security Name|Market Category|Test Issue|Financial Status|Round Lot Size|ETF|NextShares\r\n\
AACG|ATA Creativity Global - American Depositary Shares|G|N|N|100|N|N\r\n\
AAPL|Apple Inc. - Common Stock|Q|N|N|100|N|N\r\n\
ZVZZT|NASDAQ TEST STOCK|G|Y|N|100|N|N\r\n\
File Creation Time: 0105202121:32|||||||\r\n";

const OTHER: &str = "ACT Symbol|Security Name|Exchange|CQS Symbol|ETF|Round Lot Size|Test Issue|NASDAQ Symbol\r\n\
A|Agilent Technologies, Inc. Common Stock|N|A|N|100|N|A\r\n\
ZXIET|IEX Test Company|V|ZXIET|N|100|Y|ZXIET\r\n\
BRK.B|Berkshire Hathaway Inc.|N|BRK.B|N|100|N|BRK.B\r\n\
File Creation Time: 0105202121:32|||||||\r\n";

#[tokio::test]
async fn nasdaq_directory_table_and_symbols() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/SymDir/nasdaqlisted.txt");
        then.status(200).body(NASDAQ);
    });

    let client = common::client_for(&server);
    let table = nasdaq_listed(&client).await.unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.columns[3], "Test Issue");

    let symbols = nasdaq_symbols(&client).await.unwrap();
    assert_eq!(symbols, vec!["AACG", "AAPL"]);

    mock.assert_calls(2);
}

#[tokio::test]
async fn other_directory_uses_act_symbol() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/SymDir/otherlisted.txt");
        then.status(200).body(OTHER);
    });

    let client = common::client_for(&server);
    let table = other_listed(&client).await.unwrap();
    assert_eq!(table.columns[0], "ACT Symbol");
    assert_eq!(table.len(), 3);

    let symbols = other_symbols(&client).await.unwrap();
    assert_eq!(symbols, vec!["A", "BRK.B"]);

    mock.assert_calls(2);
}

#[tokio::test]
async fn directory_not_found_is_status_error() {
    let server = common::setup_server();
    let mock = common::mock_status(&server, "/SymDir/nasdaqlisted.txt", 404);

    let client = common::client_for(&server);
    let err = nasdaq_symbols(&client).await.unwrap_err();

    mock.assert();
    assert!(err.is_upstream(), "got {err:?}");
}
