use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Handler for `/hello`, any method.
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World!",
    })
}
