//! Testimonials: one per author, newest first.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_testimonials(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let testimonials = state.testimonials.list_all().await?;
    Ok(Json(json!({ "testimonials": testimonials })))
}

#[derive(Debug, Deserialize)]
pub struct SubmitTestimonialRequest {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_rating")]
    pub rating: i16,
}

fn default_rating() -> i16 {
    5
}

pub async fn submit_testimonial(
    State(state): State<AppState>,
    Json(req): Json<SubmitTestimonialRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.author.trim().is_empty() {
        return Err(ApiError::Validation("Author dibutuhkan.".to_string()));
    }
    if req.text.trim().is_empty() {
        return Err(ApiError::Validation("Isi dulu testimoninya.".to_string()));
    }
    if !(1..=5).contains(&req.rating) {
        return Err(ApiError::Validation("Rating harus antara 1 dan 5.".to_string()));
    }
    if state.testimonials.exists_by_author(req.author.trim()).await? {
        return Err(ApiError::Validation("Testimoni sudah pernah dikirim.".to_string()));
    }

    let record = state
        .testimonials
        .insert(req.author.trim().to_string(), req.text.trim().to_string(), req.rating)
        .await?;

    Ok(Json(json!({ "message": "Testimoni berhasil dikirim!", "testimonial": record })))
}
