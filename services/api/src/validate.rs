//! Field extractors shared by the request decoders.
//!
//! Each helper answers "is this field present, of the right JSON type, and
//! well-formed?" and returns the trimmed, typed value or `None`.

use serde_json::Value;

use restful_core::extract::Fields;

use crate::domain::types::{Phone, TokenId};

fn string<'a>(fields: &'a Fields, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// A string that is non-empty after trimming.
pub fn text(fields: &Fields, key: &str) -> Option<String> {
    string(fields, key)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

pub fn phone(fields: &Fields, key: &str) -> Option<Phone> {
    string(fields, key).and_then(Phone::parse)
}

pub fn token_id(fields: &Fields, key: &str) -> Option<TokenId> {
    string(fields, key).and_then(TokenId::parse)
}

/// Only a JSON `true` counts; `"true"` and `1` do not.
pub fn is_true(fields: &Fields, key: &str) -> bool {
    matches!(fields.get(key), Some(Value::Bool(true)))
}
