use axum::Json;

use crate::response::EmptyBody;

/// Handler for `/ping`, any method. Liveness probe.
pub async fn ping() -> Json<EmptyBody> {
    Json(EmptyBody {})
}
