pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicClassifier;
pub use openai::OpenAiClassifier;
