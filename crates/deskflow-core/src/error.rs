use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskflowError {
    // Input errors
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Classifier errors
    #[error("classifier request failed: {0}")]
    ClassifierRequest(String),

    #[error("classifier response parse error: {0}")]
    ClassifierParse(String),

    // State errors
    #[error("state field not set: {0}")]
    FieldNotSet(&'static str),

    // Graph errors
    #[error("node '{0}' not found in graph")]
    NodeNotFound(String),

    #[error("no route out of node '{0}'")]
    UnreachableRoute(String),

    #[error("graph exceeded max steps ({0})")]
    MaxStepsExceeded(usize),

    // Config errors
    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeskflowError>;
