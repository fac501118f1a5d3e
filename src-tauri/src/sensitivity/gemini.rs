use std::future::Future;
use std::time::Duration;

use tracing::{error, info};

use crate::config::GeneratorConfig;
use crate::error::{CobraError, GenerationError};

/// A text-completion backend that can be asked for schema-constrained JSON.
pub trait CompletionClient {
    /// Send one prompt and return the raw response text.
    fn complete(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Gemini `generateContent` client. Built once at startup.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeneratorConfig,
}

impl GeminiClient {
    pub fn new(config: GeneratorConfig) -> Result<Self, CobraError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CobraError::HttpClient(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }
}

impl CompletionClient for GeminiClient {
    async fn complete(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, GenerationError> {
        let body = build_request_body(prompt, schema);
        info!("Calling Gemini model '{}'", self.config.model);

        // An empty key is sent as-is; the API rejects it and we fall back.
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout(self.config.timeout_secs)
                } else {
                    GenerationError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Gemini API error: {} - {}", status, truncate(&body, 1024));
            if !self.config.has_api_key() {
                return Err(GenerationError::MissingCredential);
            }
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body: truncate(&body, 1024),
            });
        }

        let body_text = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(format!("Failed to read response body: {}", e)))?;

        extract_candidate_text(&body_text)
    }
}

/// Build the `generateContent` request body with JSON output mode.
pub fn build_request_body(prompt: &str, schema: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            { "role": "user", "parts": [{ "text": prompt }] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

/// Pull the answer text out of a `generateContent` response.
///
/// Text parts of the first candidate are concatenated. A response with no
/// candidates, no text parts, or only whitespace counts as empty.
pub fn extract_candidate_text(body: &str) -> Result<String, GenerationError> {
    let resp_json: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        GenerationError::MalformedJson(format!("Gemini response wrapper: {}", e))
    })?;

    let text: String = resp_json["candidates"][0]["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
