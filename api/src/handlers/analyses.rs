//! Analysis history: save, list, delete.
//!
//! The stored `parsed_json` blob is the serialized `Analysis` exactly as the
//! analyze endpoint produced it. Redisplaying history re-reads the blob; the
//! extractor is never re-run on stored text.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveAnalysisRequest {
    pub user_uid: Uuid,
    #[serde(default)]
    pub pair: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub ai_text: String,
    #[serde(default)]
    pub parsed_json: Value,
}

pub async fn save_analysis(
    State(state): State<AppState>,
    Json(req): Json<SaveAnalysisRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.pair.trim().is_empty()
        || req.timeframe.trim().is_empty()
        || req.risk.trim().is_empty()
        || req.ai_text.trim().is_empty()
    {
        return Err(ApiError::Validation("Missing required fields.".to_string()));
    }

    let record = state
        .analyses
        .insert(req.user_uid, req.pair, req.timeframe, req.risk, req.ai_text, req.parsed_json)
        .await?;

    info!(user_uid = %req.user_uid, analysis_id = %record.id, "analysis saved");
    Ok(Json(json!({ "success": true, "id": record.id })))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub user_uid: Uuid,
}

pub async fn list_analyses(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Value>, ApiError> {
    let records = state.analyses.list_by_user(query.user_uid).await?;
    Ok(Json(json!({ "analyses": records })))
}

pub async fn delete_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.analyses.delete_by_id(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Analisa tidak ditemukan.".to_string()));
    }
    Ok(Json(json!({ "message": "Deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_uses_snake_case_wire_format() {
        let body = r#"{
            "user_uid": "4ba0d7e4-9c3f-4f45-8f2e-0a4a5b6c7d8e",
            "pair": "XAUUSD",
            "timeframe": "H4",
            "risk": "Medium",
            "ai_text": "Trend Utama: Bullish",
            "parsed_json": {"trend": "Bullish"}
        }"#;
        let req: SaveAnalysisRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.pair, "XAUUSD");
        assert_eq!(req.parsed_json["trend"], "Bullish");
    }

    #[test]
    fn test_save_request_parsed_json_defaults_to_null() {
        let body = r#"{"user_uid": "4ba0d7e4-9c3f-4f45-8f2e-0a4a5b6c7d8e"}"#;
        let req: SaveAnalysisRequest = serde_json::from_str(body).unwrap();
        assert!(req.parsed_json.is_null());
    }
}
