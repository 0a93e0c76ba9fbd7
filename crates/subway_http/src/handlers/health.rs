use axum::Json;
use serde_json::{json, Value};

pub(crate) async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": subway_core::core_version(),
    }))
}
