use chrono::NaiveDate;
use serde_json::json;
use yahoo_fin_rs::YfError;
use yahoo_fin_rs::scrape::{flatten_raw_wrappers, normalize_statements};

#[test]
fn wrappers_flatten_at_any_depth() {
    let v = json!({
        "a": { "raw": 1, "fmt": "1" },
        "b": [ { "c": { "raw": 2.5, "fmt": "2.50", "longFmt": "2.500" } } ],
        "d": { "e": { "f": { "raw": -3, "fmt": "-3" } } }
    });
    assert_eq!(
        flatten_raw_wrappers(v),
        json!({ "a": 1, "b": [ { "c": 2.5 } ], "d": { "e": { "f": -3 } } })
    );
}

#[test]
fn non_wrappers_are_preserved() {
    let v = json!({
        "empty": {},
        "mixed": { "raw": 1, "fmt": "1", "other": true },
        "text": "raw",
        "list": []
    });
    assert_eq!(flatten_raw_wrappers(v.clone()), v);
}

#[test]
fn wrapper_without_raw_becomes_null() {
    let v = json!({ "x": { "fmt": "N/A" } });
    assert_eq!(flatten_raw_wrappers(v), json!({ "x": null }));
}

#[test]
fn single_snapshot_transposes() {
    let snaps = vec![json!({
        "maxAge": 1,
        "endDate": { "raw": 1_609_459_200, "fmt": "2021-01-01" },
        "totalRevenue": { "raw": 1000, "fmt": "1,000" }
    })];
    let t = normalize_statements(&snaps).unwrap();
    let day = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

    assert_eq!(t.periods, vec![day]);
    assert_eq!(t.breakdown(), vec!["totalRevenue"]);
    assert_eq!(t.value("totalRevenue", day), Some(1000.0));
    assert!(t.row("maxAge").is_none());
}

#[test]
fn columns_keep_snapshot_order_and_rows_are_sorted() {
    let snaps = vec![
        json!({ "endDate": 1_609_459_200, "netIncome": 5, "costOfRevenue": {} }),
        json!({ "endDate": 1_577_836_800, "netIncome": null, "grossProfit": 7 }),
    ];
    let t = normalize_statements(&snaps).unwrap();

    assert_eq!(
        t.periods,
        vec![
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        ]
    );
    assert_eq!(t.breakdown(), vec!["costOfRevenue", "grossProfit", "netIncome"]);
    assert_eq!(t.row("costOfRevenue").unwrap().values, vec![None, None]);
    assert_eq!(t.row("grossProfit").unwrap().values, vec![None, Some(7.0)]);
    assert_eq!(t.row("netIncome").unwrap().values, vec![Some(5.0), None]);
}

#[test]
fn empty_list_is_empty_table() {
    let t = normalize_statements(&[]).unwrap();
    assert!(t.is_empty());
}

#[test]
fn missing_end_date_is_parse_error() {
    let err = normalize_statements(&[json!({ "maxAge": 1, "netIncome": 3 })]).unwrap_err();
    assert!(matches!(err, YfError::Parse(_)), "got {err:?}");
}
