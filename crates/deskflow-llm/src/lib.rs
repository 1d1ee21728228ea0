pub mod mock;
pub mod providers;

use std::sync::Arc;

use deskflow_core::config::ModelConfig;
use deskflow_core::traits::Classifier;

pub use mock::MockClassifier;
pub use providers::anthropic::AnthropicClassifier;
pub use providers::openai::OpenAiClassifier;

/// Create a classifier based on the provider name.
pub fn create_classifier(config: &ModelConfig) -> Arc<dyn Classifier> {
    match config.provider.as_str() {
        "anthropic" | "claude" => Arc::new(AnthropicClassifier::new(config.clone())),
        // Everything else uses the OpenAI-compatible adapter
        _ => Arc::new(OpenAiClassifier::new(config.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> ModelConfig {
        ModelConfig {
            provider: provider.to_string(),
            model_id: "test-model".to_string(),
            api_key: Some("test-key".to_string()),
            base_url: None,
            max_tokens: 1024,
            temperature: 0.0,
        }
    }

    #[test]
    fn test_create_classifier_accepts_known_providers() {
        // Factory must not panic for any provider string; unknown names fall
        // back to the OpenAI-compatible adapter.
        for provider in ["anthropic", "claude", "openai", "groq", "ollama", ""] {
            let _ = create_classifier(&config(provider));
        }
    }
}
