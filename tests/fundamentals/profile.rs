use serde_json::json;
use yahoo_fin_rs::YfError;
use yahoo_fin_rs::fundamentals::company_info;

use crate::common::{self, wrapped};

#[tokio::test]
async fn profile_reads_asset_profile_and_officers() {
    let server = common::setup_server();
    let store = json!({
        "assetProfile": {
            "address1": "One Apple Park Way",
            "city": "Cupertino",
            "state": "CA",
            "zip": "95014",
            "country": "United States",
            "phone": "408 996 1010",
            "website": "http://www.apple.com",
            "industry": "Consumer Electronics",
            "sector": "Technology",
            "longBusinessSummary": "Apple Inc. designs, manufactures, and markets smartphones.",
            "fullTimeEmployees": 147_000,
            "companyOfficers": [
                { "maxAge": 1, "name": "Mr. Timothy D. Cook", "age": 59, "title": "CEO & Director",
                  "yearBorn": 1961, "totalPay": wrapped(14_769_259.0, "14.77M") },
                { "maxAge": 1, "title": "Unnamed" }
            ],
            "maxAge": 86400
        }
    });
    let mock = common::mock_quote_page(
        &server,
        "/quote/AAPL/profile",
        "AAPL",
        common::quote_summary_page(store),
    );

    let client = common::client_for(&server);
    let p = company_info(&client, "AAPL").await.unwrap();

    mock.assert();
    assert_eq!(p.sector.as_deref(), Some("Technology"));
    assert_eq!(p.address.city.as_deref(), Some("Cupertino"));
    assert_eq!(p.full_time_employees, Some(147_000));
    assert_eq!(p.officers.len(), 1);
    assert_eq!(p.officers[0].age, Some(59));
    assert_eq!(p.officers[0].total_pay, Some(14_769_259.0));
}

#[tokio::test]
async fn empty_objects_in_profile_read_as_none() {
    let server = common::setup_server();
    let store = json!({
        "assetProfile": {
            "sector": "Technology",
            "fullTimeEmployees": {},
            "companyOfficers": [
                { "name": "A", "totalPay": {}, "age": 50 }
            ]
        }
    });
    let mock = common::mock_quote_page(
        &server,
        "/quote/AAPL/profile",
        "AAPL",
        common::quote_summary_page(store),
    );

    let client = common::client_for(&server);
    let p = company_info(&client, "AAPL").await.unwrap();

    mock.assert();
    assert_eq!(p.full_time_employees, None);
    assert_eq!(p.officers.len(), 1);
    assert_eq!(p.officers[0].age, Some(50));
    assert_eq!(p.officers[0].total_pay, None);
}

#[tokio::test]
async fn summary_profile_is_fallback() {
    let server = common::setup_server();
    let store = json!({ "summaryProfile": { "sector": "Financial Services", "city": "Omaha" } });
    let mock = common::mock_quote_page(
        &server,
        "/quote/BRK-B/profile",
        "BRK-B",
        common::quote_summary_page(store),
    );

    let client = common::client_for(&server);
    let p = company_info(&client, "BRK-B").await.unwrap();

    mock.assert();
    assert_eq!(p.sector.as_deref(), Some("Financial Services"));
    assert!(p.officers.is_empty());
}

#[tokio::test]
async fn missing_profile_is_unavailable() {
    let server = common::setup_server();
    let mock = common::mock_quote_page(
        &server,
        "/quote/AAPL/profile",
        "AAPL",
        common::quote_summary_page(json!({ "price": {} })),
    );

    let client = common::client_for(&server);
    let err = company_info(&client, "AAPL").await.unwrap_err();

    mock.assert();
    assert!(matches!(err, YfError::DataUnavailable(_)), "got {err:?}");
}
