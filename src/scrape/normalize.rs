//! Reshape extracted page JSON: collapse `{raw, fmt}` wrappers and transpose
//! period snapshots into statement tables.

use std::collections::{BTreeMap, BTreeSet};

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::{Map, Value};

use crate::core::conversions::epoch_to_date;
use crate::core::{StatementRow, StatementTable, YfError};

/// Replace every `{raw, fmt, longFmt?}` wrapper in the tree with its `raw` value.
///
/// A wrapper is a non-empty object whose keys are all drawn from `raw`, `fmt` and
/// `longFmt`, with at least one of `raw`/`fmt`. A wrapper without `raw` becomes
/// `null`. Everything else, including `{}`, is rebuilt unchanged.
#[must_use]
pub fn flatten_raw_wrappers(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            if is_raw_wrapper(&map) {
                return map.remove("raw").unwrap_or(Value::Null);
            }
            Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, flatten_raw_wrappers(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(flatten_raw_wrappers).collect()),
        other => other,
    }
}

/// Field deserializer for flattened store numbers: anything that is not a number
/// of the target type (`null`, `{}`, strings) reads as `None`.
pub(crate) fn de_opt_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(v @ Value::Number(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

/// Field deserializer for flattened store text; non-strings read as `None`.
pub(crate) fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn is_raw_wrapper(map: &Map<String, Value>) -> bool {
    !map.is_empty()
        && (map.contains_key("raw") || map.contains_key("fmt"))
        && map
            .keys()
            .all(|k| matches!(k.as_str(), "raw" | "fmt" | "longFmt"))
}

/// Transpose per-period snapshots into a table with one column per `endDate`.
///
/// Each snapshot is an object carrying `maxAge` (cache metadata, dropped), an
/// `endDate` in epoch seconds (raw or wrapped) and any number of metrics. Metric
/// names become the rows, in sorted order; values that are not numbers read as
/// `None`. Columns keep the snapshot order.
///
/// # Errors
///
/// Returns [`YfError::Parse`] if a snapshot is not an object or lacks a numeric `endDate`.
pub fn normalize_statements(snapshots: &[Value]) -> Result<StatementTable, YfError> {
    let mut periods = Vec::with_capacity(snapshots.len());
    let mut columns: Vec<BTreeMap<String, Option<f64>>> = Vec::with_capacity(snapshots.len());
    let mut names = BTreeSet::new();

    for snap in snapshots {
        let Value::Object(mut obj) = flatten_raw_wrappers(snap.clone()) else {
            return Err(YfError::Parse("statement snapshot is not an object".into()));
        };
        obj.remove("maxAge");

        let end = obj
            .remove("endDate")
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .ok_or_else(|| YfError::Parse("statement snapshot has no numeric endDate".into()))?;
        let period = epoch_to_date(end)
            .ok_or_else(|| YfError::Parse(format!("endDate {end} out of range")))?;

        let metrics = obj
            .into_iter()
            .map(|(name, v)| {
                names.insert(name.clone());
                (name, v.as_f64())
            })
            .collect();

        periods.push(period);
        columns.push(metrics);
    }

    let rows = names
        .into_iter()
        .map(|name| {
            let values = columns
                .iter()
                .map(|col| col.get(&name).copied().flatten())
                .collect();
            StatementRow {
                breakdown: name,
                values,
            }
        })
        .collect();

    Ok(StatementTable { periods, rows })
}
