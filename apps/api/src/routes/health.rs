use axum::Json;
use serde_json::{json, Value};

/// GET /api/test
/// Liveness probe for the web client.
pub async fn api_test_handler() -> Json<Value> {
    Json(json!({
        "message": "Hello from the career backend!",
        "status": "success",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /
pub async fn root_handler() -> &'static str {
    "Hello, this is the career backend!"
}
