use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Serializes as `{}`. Every response carries a JSON object body, even when
/// there is nothing to say.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}

/// Router fallback for unregistered paths.
pub async fn not_found() -> (StatusCode, Json<EmptyBody>) {
    (StatusCode::NOT_FOUND, Json(EmptyBody {}))
}

/// Method fallback for resource routes.
pub async fn method_not_allowed() -> (StatusCode, Json<EmptyBody>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(EmptyBody {}))
}
