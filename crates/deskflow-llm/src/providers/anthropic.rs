use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use deskflow_core::config::ModelConfig;
use deskflow_core::error::{DeskflowError, Result};
use deskflow_core::traits::Classifier;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClassifier {
    http: Client,
    config: ModelConfig,
}

impl AnthropicClassifier {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

// Anthropic API request types
#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    messages: Vec<ApiMessage>,
}

#[derive(Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

// Anthropic API response types
#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ResponseBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

impl Classifier for AnthropicClassifier {
    fn classify(&self, prompt: String) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            let api_key = self
                .config
                .api_key
                .as_deref()
                .ok_or_else(|| DeskflowError::Config("Anthropic API key not set".into()))?;

            let base_url = self.config.base_url.as_deref().unwrap_or(ANTHROPIC_API_URL);

            let body = AnthropicRequest {
                model: self.config.model_id.clone(),
                max_tokens: self.config.max_tokens,
                temperature: if self.config.temperature > 0.0 {
                    Some(self.config.temperature)
                } else {
                    None
                },
                messages: vec![ApiMessage {
                    role: "user".to_string(),
                    content: prompt,
                }],
            };

            debug!(model = %self.config.model_id, url = base_url, "sending classify request");
            let response = self
                .http
                .post(base_url)
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&body)
                .send()
                .await
                .map_err(|e| DeskflowError::ClassifierRequest(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(DeskflowError::ClassifierRequest(format!(
                    "HTTP {}: {}",
                    status, body
                )));
            }

            let parsed: AnthropicResponse = response
                .json()
                .await
                .map_err(|e| DeskflowError::ClassifierParse(e.to_string()))?;

            let text: String = parsed
                .content
                .into_iter()
                .filter_map(|block| match block {
                    ResponseBlock::Text { text } => Some(text),
                    ResponseBlock::Other => None,
                })
                .collect::<Vec<_>>()
                .join("");

            if text.is_empty() {
                return Err(DeskflowError::ClassifierParse(
                    "response contained no text blocks".into(),
                ));
            }
            Ok(text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let body = AnthropicRequest {
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 1024,
            temperature: Some(0.2),
            messages: vec![ApiMessage {
                role: "user".into(),
                content: "Analyze the sentiment.".into(),
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "claude-sonnet-4-20250514");
        assert_eq!(json["max_tokens"], 1024);
        assert_eq!(json["messages"][0]["content"], "Analyze the sentiment.");
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{"content":[{"type":"text","text":"Negative"}]}"#;
        let parsed: AnthropicResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .content
            .into_iter()
            .filter_map(|b| match b {
                ResponseBlock::Text { text } => Some(text),
                ResponseBlock::Other => None,
            })
            .collect();
        assert_eq!(text, "Negative");
    }

    #[test]
    fn test_response_skips_non_text_blocks() {
        let raw = r#"{"content":[{"type":"thinking"},{"type":"text","text":"General"}]}"#;
        let parsed: AnthropicResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed
            .content
            .into_iter()
            .filter_map(|b| match b {
                ResponseBlock::Text { text } => Some(text),
                ResponseBlock::Other => None,
            })
            .collect();
        assert_eq!(text, "General");
    }
}
