use axum::{
    Router,
    routing::{any, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use restful_core::health::ping;
use restful_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};
use restful_core::response::{method_not_allowed, not_found};

use crate::handlers::{
    diagnostics::hello,
    tokens::{create_token, delete_token, extend_token, get_token},
    users::{create_user, delete_user, get_user, update_user},
};
use crate::state::AppState;

/// The full service. Leading and trailing slashes are stripped before routing,
/// so `/users/` and `//users` both reach the users resource.
///
/// Resource routes answer POST, GET, PUT and DELETE only; HEAD needs its own
/// 405 binding or axum serves it from the GET handler.
pub type App = NormalizePath<Router>;

pub fn build_router(state: AppState) -> App {
    let router = Router::new()
        // Diagnostics
        .route("/ping", any(ping))
        .route("/hello", any(hello))
        // Users
        .route(
            "/users",
            post(create_user)
                .get(get_user)
                .head(method_not_allowed)
                .put(update_user)
                .delete(delete_user)
                .fallback(method_not_allowed),
        )
        // Tokens
        .route(
            "/tokens",
            post(create_token)
                .get(get_token)
                .head(method_not_allowed)
                .put(extend_token)
                .delete(delete_token)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(propagate_request_id_layer())
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
