//! The one operation this service exists for: image in, typed analysis out.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use shared::analysis::{parse_analysis_text_with, ParserOptions};
use shared::models::{Analysis, RiskProfile};
use shared::prompt::build_analysis_prompt;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub image_base64: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub pair: String,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub risk: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: Analysis,
    /// Raw model output, returned so the client can persist it verbatim
    /// alongside the parsed record.
    pub ai_text: String,
}

/// Validate input, run the Gemini round-trip, then the extractor. The
/// extractor runs exactly once per request; a parse failure is returned to
/// the caller, who decides whether to re-ask the AI.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if req.image_base64.trim().is_empty()
        || req.mime_type.trim().is_empty()
        || req.pair.trim().is_empty()
        || req.timeframe.trim().is_empty()
        || req.risk.trim().is_empty()
    {
        return Err(ApiError::Validation("Missing required fields.".to_string()));
    }
    let risk: RiskProfile = req.risk.parse().map_err(ApiError::Validation)?;

    info!(pair = %req.pair, timeframe = %req.timeframe, risk = %risk, "analyze request");

    let prompt = build_analysis_prompt(&req.pair, &req.timeframe, risk);
    let ai_text = state
        .gemini
        .analyze_chart(&prompt, &req.image_base64, &req.mime_type)
        .await?;

    let options = ParserOptions {
        degraded_action_scan: state.config.enable_degraded_action_scan,
    };
    let analysis = parse_analysis_text_with(&ai_text, risk, options)?;

    Ok(Json(AnalyzeResponse { analysis, ai_text }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_browser_payload_shape() {
        let body = r#"{
            "imageBase64": "data:image/png;base64,AAAA",
            "mimeType": "image/png",
            "pair": "XAUUSD",
            "timeframe": "H1",
            "risk": "Low"
        }"#;
        let req: AnalyzeRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.pair, "XAUUSD");
        assert_eq!(req.mime_type, "image/png");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.image_base64.is_empty());
        assert!(req.risk.is_empty());
    }
}
