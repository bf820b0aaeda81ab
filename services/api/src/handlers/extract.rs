//! `token` request header extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub const TOKEN_HEADER: &str = "token";

/// Raw value of the `token` header, if present and readable. Never rejects;
/// a missing token is the authorization gate's call.
#[derive(Debug, Clone, Default)]
pub struct TokenHeader(pub Option<String>);

impl TokenHeader {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for TokenHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = parts
            .headers
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        async move { Ok(Self(token)) }
    }
}
