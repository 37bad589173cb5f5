use yahoo_fin_rs::{Interval, YfError};

#[test]
fn intervals_round_trip_their_wire_names() {
    for (s, iv) in [
        ("1d", Interval::D1),
        ("1wk", Interval::W1),
        ("1mo", Interval::M1),
        ("1m", Interval::I1m),
    ] {
        assert_eq!(s.parse::<Interval>().unwrap(), iv);
        assert_eq!(iv.to_string(), s);
    }
}

#[test]
fn default_interval_is_daily() {
    assert_eq!(Interval::default(), Interval::D1);
    assert!(Interval::I1m.is_intraday());
    assert!(!Interval::D1.is_intraday());
}

#[test]
fn unknown_interval_is_rejected() {
    assert!(matches!("3h".parse::<Interval>(), Err(YfError::Parse(_))));
}
