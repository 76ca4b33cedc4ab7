//! Recursive deep-merge over JSON documents.

use serde_json::{Map, Value};

/// Merge `patch` onto `base`, returning the merged document.
///
/// Rules, applied per key of `patch`:
///
/// - objects merge key-wise recursively; keys present only in `base`
///   are retained unchanged;
/// - arrays, scalars, and `null` replace the base value wholesale.
///
/// The asymmetric array-replace rule is load-bearing: editors always
/// resend full lists (hero slides, service cards), so merging arrays
/// element-wise would resurrect deleted entries. A non-object `patch`
/// replaces `base` entirely.
pub fn deep_merge(base: Value, patch: Value) -> Value {
    let Value::Object(patch_map) = patch else {
        return patch;
    };
    let mut merged = match base {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    for (key, patch_value) in patch_map {
        if patch_value.is_object() {
            let base_value = merged.remove(&key).unwrap_or(Value::Object(Map::new()));
            merged.insert(key, deep_merge(base_value, patch_value));
        } else {
            merged.insert(key, patch_value);
        }
    }
    Value::Object(merged)
}
