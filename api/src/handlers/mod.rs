pub mod admin;
pub mod analyses;
pub mod analyze;
pub mod auth;
pub mod testimonials;

use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
