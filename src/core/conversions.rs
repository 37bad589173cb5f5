//! Small conversions shared by the page parsers: epoch seconds <-> dates and
//! display-string cleanup for scraped numeric cells.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Cell texts Yahoo uses for "no value".
const MISSING_TOKENS: &[&str] = &["N/A", "-", "--", "NaN", "null"];

/// Epoch seconds (UTC) to a calendar date.
#[must_use]
pub fn epoch_to_date(secs: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}

/// Epoch seconds (UTC) to a timestamp.
#[must_use]
pub fn epoch_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Midnight UTC of `date` as epoch seconds.
#[must_use]
pub fn date_to_epoch(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Parse a display number such as `"1,234.5"`, `"+3.2%"`, `"1.5B"` or `"200M"`.
///
/// Thousands separators, `%` and a leading `+` are stripped; a trailing `K`, `M`,
/// `B` or `T` (either case) scales the value. Empty cells and Yahoo's placeholders (`N/A`, `-`)
/// yield `None`.
#[must_use]
pub fn parse_scaled_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() || MISSING_TOKENS.contains(&t) {
        return None;
    }

    let cleaned: String = t
        .chars()
        .filter(|c| !matches!(c, ',' | '%' | '+') && !c.is_whitespace())
        .collect();

    let (digits, scale) = match cleaned.chars().last()? {
        'k' | 'K' => (&cleaned[..cleaned.len() - 1], 1e3),
        'm' | 'M' => (&cleaned[..cleaned.len() - 1], 1e6),
        'b' | 'B' => (&cleaned[..cleaned.len() - 1], 1e9),
        't' | 'T' => (&cleaned[..cleaned.len() - 1], 1e12),
        _ => (cleaned.as_str(), 1.0),
    };

    let v = digits.parse::<f64>().ok()?;
    v.is_finite().then_some(v * scale)
}

/// Parse a percentage cell (`"12.5%"`, `"-0.40%"`) into a fraction (`0.125`, `-0.004`).
#[must_use]
pub fn parse_percent(s: &str) -> Option<f64> {
    parse_scaled_number(s).map(|v| v / 100.0)
}
