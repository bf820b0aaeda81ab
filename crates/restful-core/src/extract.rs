//! Lenient request extractors.
//!
//! Neither extractor ever rejects a request: malformed input degrades to an
//! empty field set and the handler's own validation reports what is missing.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::Uri;
use axum::http::request::Parts;
use serde_json::{Map, Value};

/// Decoded request fields, keyed by name.
pub type Fields = Map<String, Value>;

/// Request body parsed as a JSON object.
///
/// Anything that is not a JSON object (invalid JSON, arrays, scalars, an empty
/// body) yields an empty field set.
#[derive(Debug, Clone, Default)]
pub struct JsonPayload(pub Fields);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.unwrap_or_default();
        Ok(Self(parse_object(&bytes)))
    }
}

pub fn parse_object(bytes: &[u8]) -> Fields {
    match serde_json::from_slice(bytes) {
        Ok(Value::Object(fields)) => fields,
        _ => Fields::new(),
    }
}

/// Query string parsed into string fields.
///
/// A key given more than once becomes an array of its values.
#[derive(Debug, Clone, Default)]
pub struct QueryFields(pub Fields);

impl<S> FromRequestParts<S> for QueryFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let fields = parse_query(&parts.uri);
        async move { Ok(Self(fields)) }
    }
}

pub fn parse_query(uri: &Uri) -> Fields {
    let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(uri) else {
        return Fields::new();
    };

    let mut fields = Fields::new();
    for (key, value) in pairs {
        match fields.get_mut(&key) {
            Some(Value::Array(values)) => values.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                fields.insert(key, Value::String(value));
            }
        }
    }
    fields
}
