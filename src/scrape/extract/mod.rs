//! Locate and decode the JSON state Yahoo inlines into its HTML pages.
//!
//! The page hydrates its client-side view from an object literal assigned in a
//! script (`root.App.main = {...};`). The literal is isolated with a string-aware
//! bracket scan rather than by splitting on whatever text happens to follow it,
//! then the requested store is pulled from `context.dispatcher.stores`.

mod strategies;

use serde_json::Value;

use crate::core::YfError;
use crate::scrape::normalize::flatten_raw_wrappers;
use crate::scrape::utils::find_matching_bracket;

/// Assignment prefix of the hydration payload.
pub const APP_MAIN_MARKER: &str = "root.App.main";

/// Key path from the hydration root to the named stores.
pub const STORES_PATH: &[&str] = &["context", "dispatcher", "stores"];

/// Quote summary store: statements, earnings, profile and price modules.
pub const QUOTE_SUMMARY_STORE: &str = "QuoteSummaryStore";

/// Screener results store: earnings calendar rows.
pub const SCREENER_RESULTS_STORE: &str = "ScreenerResultsStore";

/// Parse the JSON object literal that follows `marker` in `body`.
///
/// The marker may be followed by `=`; the literal runs from the first `{` to its
/// syntactically matching `}`. Occurrences of the marker that are not followed by
/// an object literal are skipped.
///
/// # Errors
///
/// Returns [`YfError::Parse`] if no occurrence of `marker` is followed by a complete,
/// valid JSON object.
pub fn extract_embedded_json(body: &str, marker: &str) -> Result<Value, YfError> {
    let mut last_err = None;

    for (pos, _) in body.match_indices(marker) {
        let rest = body[pos + marker.len()..].trim_start();
        let rest = rest.strip_prefix('=').unwrap_or(rest).trim_start();
        if !rest.starts_with('{') {
            continue;
        }
        let open = body.len() - rest.len();
        let Some(close) = find_matching_bracket(body, open) else {
            last_err = Some(YfError::Parse(format!(
                "unterminated JSON literal after `{marker}`"
            )));
            continue;
        };

        match serde_json::from_str::<Value>(&body[open..=close]) {
            Ok(v) => return Ok(v),
            Err(e) => {
                last_err = Some(YfError::Parse(format!(
                    "invalid JSON literal after `{marker}`: {e}"
                )));
            }
        }
    }

    Err(last_err.unwrap_or_else(|| YfError::Parse(format!("marker `{marker}` not found"))))
}

/// Walk `path` from `value`.
///
/// # Errors
///
/// Returns [`YfError::Parse`] naming the first key that is missing.
pub fn descend<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, YfError> {
    path.iter().try_fold(value, |node, key| {
        node.get(*key)
            .ok_or_else(|| YfError::Parse(format!("key `{key}` missing from embedded JSON")))
    })
}

/// Extract the named store from a page and collapse its `{raw, fmt}` wrappers.
///
/// Tries the `root.App.main` hydration payload first, then a bare
/// `"<store>": {...}` literal, then every `application/json` script block.
///
/// # Errors
///
/// Returns [`YfError::Parse`] when no strategy finds the store; the error from the
/// primary strategy is reported since it names the missing marker or key.
pub fn extract_store(body: &str, store: &str) -> Result<Value, YfError> {
    let primary_err = match strategies::from_app_main(body, store) {
        Ok(v) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(store, strategy = "app_main", "embedded store found");
            return Ok(flatten_raw_wrappers(v));
        }
        Err(e) => e,
    };

    if let Some(v) = strategies::from_store_literal(body, store) {
        #[cfg(feature = "tracing")]
        tracing::debug!(store, strategy = "literal", "embedded store found");
        return Ok(flatten_raw_wrappers(v));
    }

    if let Some(v) = strategies::from_json_scripts(body, store) {
        #[cfg(feature = "tracing")]
        tracing::debug!(store, strategy = "json_script", "embedded store found");
        return Ok(flatten_raw_wrappers(v));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(store, error = %primary_err, "all extraction strategies exhausted");

    Err(match primary_err {
        YfError::Parse(msg) => YfError::Parse(format!("{store} not found ({msg})")),
        other => other,
    })
}
