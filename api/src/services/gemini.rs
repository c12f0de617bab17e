//! Gemini AI service for chart analysis.
//!
//! Sends the prompt plus the uploaded chart image to the Gemini
//! generateContent endpoint. Multiple API keys are tried sequentially with a
//! small delay between attempts; the extractor downstream only ever sees the
//! raw text of the first successful attempt.

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use shared::Config;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Gambar tidak valid.")]
    InvalidImage,
    #[error("Ukuran gambar terlalu besar (>25MB).")]
    ImageTooLarge,
    #[error("Gemini API error ({status}): {body}")]
    Api { status: reqwest::StatusCode, body: String },
    #[error("Empty Gemini response")]
    EmptyResponse,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("All Gemini API keys failed, last error: {last}")]
    AllKeysFailed { last: String },
}

#[derive(Debug, Clone)]
pub struct GeminiService {
    api_keys: Vec<String>,
    model_name: String,
    base_url: String,
    retry_delay_ms: u64,
    max_image_bytes: usize,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

/// Drop the `data:<mime>;base64,` prefix browsers prepend to file reads.
fn strip_data_url(image_base64: &str) -> &str {
    match image_base64.split_once(',') {
        Some((_, data)) => data,
        None => image_base64,
    }
}

impl GeminiService {
    pub fn from_config(config: &Config) -> Self {
        Self::with_config(
            config.gemini_api_keys.clone(),
            config.gemini_model_name.clone(),
            config.gemini_base_url.clone(),
            config.gemini_timeout_secs,
            config.gemini_retry_delay_ms,
            config.max_image_bytes,
        )
    }

    pub fn with_config(
        api_keys: Vec<String>,
        model_name: String,
        base_url: String,
        timeout_secs: u64,
        retry_delay_ms: u64,
        max_image_bytes: usize,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_keys,
            model_name,
            base_url,
            retry_delay_ms,
            max_image_bytes,
            client,
        }
    }

    /// Build the API URL for Gemini requests.
    ///
    /// Supports two formats:
    /// 1. If GEMINI_MODEL_URL env var is set, use it directly (can contain {key} placeholder)
    /// 2. Otherwise, build from base_url, model_name, and the given api key
    fn build_api_url(&self, api_key: &str) -> String {
        if let Ok(custom_url) = std::env::var("GEMINI_MODEL_URL") {
            if !custom_url.trim().is_empty() {
                return if custom_url.contains("{key}") {
                    custom_url.replace("{key}", api_key)
                } else {
                    custom_url
                };
            }
        }
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model_name,
            api_key
        )
    }

    /// Analyze a chart image with the given prompt, falling back through the
    /// configured API keys. Returns the raw response text; parsing it is the
    /// caller's business.
    pub async fn analyze_chart(
        &self,
        prompt: &str,
        image_base64: &str,
        mime_type: &str,
    ) -> Result<String, ProviderError> {
        let image_data = strip_data_url(image_base64);
        if image_data.trim().is_empty() {
            return Err(ProviderError::InvalidImage);
        }
        if image_data.len() > self.max_image_bytes {
            return Err(ProviderError::ImageTooLarge);
        }
        // Reject payloads that are not actually base64 before spending a
        // round-trip on them.
        general_purpose::STANDARD
            .decode(image_data)
            .map_err(|_| ProviderError::InvalidImage)?;

        let mut last_error: Option<ProviderError> = None;

        for (i, key) in self.api_keys.iter().enumerate() {
            match self.generate_once(key, prompt, image_data, mime_type).await {
                Ok(text) if !text.trim().is_empty() => {
                    info!(key_index = i + 1, "Gemini analysis succeeded");
                    return Ok(text);
                }
                Ok(_) => {
                    warn!(key_index = i + 1, "Empty Gemini response");
                    last_error = Some(ProviderError::EmptyResponse);
                }
                Err(e) => {
                    warn!(key_index = i + 1, error = %e, "Gemini key attempt failed");
                    last_error = Some(e);
                }
            }
            if i + 1 < self.api_keys.len() {
                tokio::time::sleep(Duration::from_millis(self.retry_delay_ms)).await;
            }
        }

        Err(ProviderError::AllKeysFailed {
            last: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no API keys configured".to_string()),
        })
    }

    async fn generate_once(
        &self,
        api_key: &str,
        prompt: &str,
        image_data: &str,
        mime_type: &str,
    ) -> Result<String, ProviderError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part { text: Some(prompt.to_string()), inline_data: None },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: mime_type.to_string(),
                            data: image_data.to_string(),
                        }),
                    },
                ],
            }],
        };

        let url = self.build_api_url(api_key);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::Api { status, body });
        }

        let gemini_response: GeminiResponse = response.json().await?;
        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(ProviderError::EmptyResponse)
    }
}
