use serde_json::Value;

use crate::core::YfError;
#[cfg(feature = "tracing")]
use crate::scrape::utils::truncate;
use crate::scrape::utils::{find_matching_bracket, iter_json_scripts};

use super::{STORES_PATH, descend};

/// Strategy A: `root.App.main = {...};` then `context.dispatcher.stores.<store>`.
pub(crate) fn from_app_main(body: &str, store: &str) -> Result<Value, YfError> {
    let root = super::extract_embedded_json(body, super::APP_MAIN_MARKER)?;
    let mut path: Vec<&str> = STORES_PATH.to_vec();
    path.push(store);
    descend(&root, &path).cloned()
}

/// Strategy B: a literal `"<store>": { ... }` object anywhere in the page.
pub(crate) fn from_store_literal(body: &str, store: &str) -> Option<Value> {
    let key = format!("\"{store}\"");
    for (pos, _) in body.match_indices(&key) {
        let after = body[pos + key.len()..].trim_start();
        let Some(rest) = after.strip_prefix(':') else {
            continue;
        };
        let rest = rest.trim_start();
        if !rest.starts_with('{') {
            continue;
        }
        let obj_start = body.len() - rest.len();
        let Some(obj_end) = find_matching_bracket(body, obj_start) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(store, "store literal found but closing brace never matched");
            continue;
        };
        match serde_json::from_str::<Value>(&body[obj_start..=obj_end]) {
            Ok(v) => return Some(v),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    store,
                    error = %_e,
                    preview = %truncate(&body[obj_start..=obj_end], 160),
                    "store literal is not valid JSON"
                );
            }
        }
    }
    None
}

/// Strategy C: any `application/json` script (SvelteKit fetched blobs included)
/// whose payload, or whose `body` string re-parsed as JSON, contains `<store>`.
pub(crate) fn from_json_scripts(body: &str, store: &str) -> Option<Value> {
    for (_attrs, inner) in iter_json_scripts(body) {
        let val = match serde_json::from_str::<Value>(inner) {
            Ok(v) => v,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(error = %_e, preview = %truncate(inner, 120), "json script parse failed");
                continue;
            }
        };

        if let Some(found) = find_key_in_value(&val, store) {
            return Some(found.clone());
        }

        if let Some(Value::String(s)) = val.get("body")
            && let Ok(payload) = serde_json::from_str::<Value>(s)
            && let Some(found) = find_key_in_value(&payload, store)
        {
            return Some(found.clone());
        }
    }
    None
}

/// Depth-first search for an object-valued `key`.
pub(crate) fn find_key_in_value<'a>(v: &'a Value, key: &str) -> Option<&'a Value> {
    match v {
        Value::Object(map) => {
            if let Some(hit) = map.get(key)
                && hit.is_object()
            {
                return Some(hit);
            }
            map.values().find_map(|child| find_key_in_value(child, key))
        }
        Value::Array(arr) => arr.iter().find_map(|child| find_key_in_value(child, key)),
        _ => None,
    }
}
