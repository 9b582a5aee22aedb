//! Pure JSON-to-text formatters, one module per PokeAPI resource kind.
//!
//! Every field access is get-or-default: a missing or differently-typed field
//! renders as a placeholder (or the section is skipped) instead of failing.

pub mod evolution;
pub mod listing;
pub mod machine;
pub mod pokedex;
pub mod pokemon;
pub mod species;
pub mod type_data;

use serde_json::Value;

/// How many entries list-valued preview fields show before truncating.
pub const PREVIEW_LIMIT: usize = 10;

pub(crate) fn str_or<'a>(value: &'a Value, key: &str, default: &'a str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or(default)
}

pub(crate) fn u64_or(value: &Value, key: &str, default: u64) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(default)
}

pub(crate) fn array_or<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

/// Capitalize alphabetic runs, matching how PokeAPI slugs are usually shown
/// (`mr-mime` becomes `Mr-Mime`, `great ball` becomes `Great Ball`).
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}

/// Source units are decimeters/hectograms; display units are m/kg.
pub(crate) fn scale_tenths(raw: u64) -> String {
    format!("{:.1}", raw as f64 / 10.0)
}
