// src/integrations/gemini/client.rs
//
// Gemini API Integration
//
// ARCHITECTURE:
// - REST client for the generateContent endpoint
// - Sends one image + the fixed instruction, asks for a JSON triple
// - Returns the answer text; never creates or modifies garments
//
// CRITICAL RULES:
// - Single attempt, no retry
// - Every failure is an AppError::Classification

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::infrastructure::ImagePayload;
use crate::integrations::classifier::{ImageClassifier, CLASSIFICATION_PROMPT};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the Gemini API
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: DEFAULT_GEMINI_TIMEOUT,
        }
    }
}

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ============================================================================
// CLIENT
// ============================================================================

/// Gemini API Client
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn build_request(image: &ImagePayload) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        inline_data: Some(InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.base64_data.clone(),
                        }),
                        text: None,
                    },
                    Part {
                        inline_data: None,
                        text: Some(CLASSIFICATION_PROMPT.to_string()),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "color": { "type": "STRING" },
                        "occasion": { "type": "STRING" }
                    },
                    "required": ["category", "color", "occasion"]
                }),
            },
        }
    }

    /// Concatenated text of the first candidate
    fn extract_text(response: GenerateContentResponse) -> AppResult<String> {
        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::Classification(
                "Gemini returned no text".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl ImageClassifier for GeminiClient {
    async fn classify_image(&self, image: &ImagePayload) -> AppResult<String> {
        let body = Self::build_request(image);

        let response = self
            .http_client
            .post(self.endpoint())
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Classification(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Classification(format!(
                "Gemini returned status: {}",
                response.status()
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Classification(format!("Failed to parse Gemini response: {}", e)))?;

        Self::extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(GeminiConfig::new("key".to_string())).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let mut config = GeminiConfig::new("key".to_string());
        config.base_url = "http://localhost:8080/v1/".to_string();
        config.model = "test-model".to_string();
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:8080/v1/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let image = ImagePayload::parse("data:image/png;base64,AAAA");
        let body = serde_json::to_value(GeminiClient::build_request(&image)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "AAAA");
        assert!(parts[0].get("text").is_none());
        assert_eq!(parts[1]["text"], CLASSIFICATION_PROMPT);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["category", "color", "occasion"])
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"category\":" }, { "text": "\"Dress\"}" }] }
            }]
        }))
        .unwrap();

        assert_eq!(
            GeminiClient::extract_text(response).unwrap(),
            "{\"category\":\"Dress\"}"
        );
    }

    #[test]
    fn test_extract_text_empty_is_error() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(GeminiClient::extract_text(response).is_err());

        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(GeminiClient::extract_text(response).is_err());
    }
}
