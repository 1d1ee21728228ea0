use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use deskflow_core::config::ModelConfig;
use deskflow_core::error::{DeskflowError, Result};
use deskflow_core::traits::Classifier;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible classifier. Works with OpenAI, Ollama, vLLM, Groq,
/// OpenRouter, etc.
pub struct OpenAiClassifier {
    http: Client,
    config: ModelConfig,
}

impl OpenAiClassifier {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

// Request types
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<OaiMessage>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct OaiMessage {
    role: String,
    content: String,
}

// Response types
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<OaiChoice>,
}

#[derive(Deserialize)]
struct OaiChoice {
    message: OaiResponseMessage,
}

#[derive(Deserialize)]
struct OaiResponseMessage {
    content: Option<String>,
}

impl Classifier for OpenAiClassifier {
    fn classify(&self, prompt: String) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            let api_key = self
                .config
                .api_key
                .as_deref()
                .ok_or_else(|| DeskflowError::Config("OpenAI API key not set".into()))?;

            let base_url = self.config.base_url.as_deref().unwrap_or(OPENAI_API_URL);

            let body = ChatRequest {
                model: self.config.model_id.clone(),
                messages: vec![OaiMessage {
                    role: "user".to_string(),
                    content: prompt,
                }],
                max_tokens: self.config.max_tokens,
                temperature: if self.config.temperature > 0.0 {
                    Some(self.config.temperature)
                } else {
                    None
                },
            };

            debug!(model = %self.config.model_id, url = base_url, "sending classify request");
            let response = self
                .http
                .post(base_url)
                .bearer_auth(api_key)
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

            let parsed: ChatResponse = response
                .json()
                .await
                .map_err(|e| DeskflowError::ClassifierParse(e.to_string()))?;

            parsed
                .choices
                .into_iter()
                .next()
                .and_then(|c| c.message.content)
                .ok_or_else(|| {
                    DeskflowError::ClassifierParse("response contained no message content".into())
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let body = ChatRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![OaiMessage {
                role: "user".into(),
                content: "Classify this.".into(),
            }],
            max_tokens: 1024,
            temperature: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        // Zero temperature is omitted entirely
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_response_content_extraction() {
        let raw = r#"{"choices":[{"message":{"content":"Billing"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(content.as_deref(), Some("Billing"));
    }

    #[test]
    fn test_response_missing_content() {
        let raw = r#"{"choices":[{"message":{}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert!(content.is_none());
    }
}
