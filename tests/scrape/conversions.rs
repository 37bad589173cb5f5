use chrono::NaiveDate;
use yahoo_fin_rs::Cell;
use yahoo_fin_rs::core::conversions::{
    date_to_epoch, epoch_to_date, parse_percent, parse_scaled_number,
};

#[test]
fn suffixes_scale() {
    assert_eq!(parse_scaled_number("1.5B"), Some(1_500_000_000.0));
    assert_eq!(parse_scaled_number("200M"), Some(200_000_000.0));
    assert_eq!(parse_scaled_number("3.2k"), Some(3_200.0));
    assert_eq!(parse_scaled_number("1.1T"), Some(1.1e12));
}

#[test]
fn lowercase_suffixes_scale() {
    assert_eq!(parse_scaled_number("1.5b"), Some(1_500_000_000.0));
    assert_eq!(parse_scaled_number("200m"), Some(200_000_000.0));
    assert_eq!(parse_scaled_number("2t"), Some(2e12));
}

#[test]
fn separators_and_signs_are_stripped() {
    assert_eq!(parse_scaled_number("1,234.5"), Some(1234.5));
    assert_eq!(parse_scaled_number("+3.25"), Some(3.25));
    assert_eq!(parse_scaled_number("-0.40"), Some(-0.4));
}

#[test]
fn placeholders_are_missing() {
    for s in ["N/A", "-", "--", "", "   "] {
        assert_eq!(parse_scaled_number(s), None, "{s:?}");
    }
    assert_eq!(Cell::from_text("N/A").to_number(), Cell::Missing);
    assert_eq!(Cell::from_text("").to_number(), Cell::Missing);
}

#[test]
fn percent_becomes_fraction() {
    assert_eq!(parse_percent("12.5%"), Some(0.125));
    assert_eq!(Cell::from_text("50.00%").to_fraction(), Cell::Number(0.5));
}

#[test]
fn unparsable_text_is_kept() {
    assert_eq!(
        Cell::from_text("AAPL210115C00100000").to_number(),
        Cell::Text("AAPL210115C00100000".into())
    );
}

#[test]
fn epoch_round_trip_on_midnight() {
    let d = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    assert_eq!(date_to_epoch(d), 1_609_459_200);
    assert_eq!(epoch_to_date(1_609_459_200), Some(d));
}
