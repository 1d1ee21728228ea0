use serde::{Deserialize, Serialize};

use crate::error::{DeskflowError, Result};

/// The state record threaded through one workflow invocation.
///
/// Created fresh per query and owned exclusively by that invocation.
/// Fields are populated in order: `category`, then `sentiment`, then
/// `response`. Classifier output is stored verbatim; labels are open text,
/// not a closed enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketState {
    query: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sentiment: Option<String>,
    #[serde(default)]
    response: Option<String>,
}

impl TicketState {
    /// Initialize with the customer query only.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
            sentiment: None,
            response: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Topic label, if the categorize node has run.
    pub fn category(&self) -> Result<&str> {
        self.category
            .as_deref()
            .ok_or(DeskflowError::FieldNotSet("category"))
    }

    /// Sentiment label, if the sentiment node has run.
    pub fn sentiment(&self) -> Result<&str> {
        self.sentiment
            .as_deref()
            .ok_or(DeskflowError::FieldNotSet("sentiment"))
    }

    /// Final response text, if a terminal node has run.
    pub fn response(&self) -> Result<&str> {
        self.response
            .as_deref()
            .ok_or(DeskflowError::FieldNotSet("response"))
    }

    /// Merge a partial update into this state.
    ///
    /// Fields present in the update overwrite; absent fields are untouched.
    pub fn apply(&mut self, update: StateUpdate) {
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        if let Some(sentiment) = update.sentiment {
            self.sentiment = Some(sentiment);
        }
        if let Some(response) = update.response {
            self.response = Some(response);
        }
    }
}

/// The partial record a node returns: only the fields it changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateUpdate {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sentiment: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl StateUpdate {
    pub fn category(label: impl Into<String>) -> Self {
        Self {
            category: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn sentiment(label: impl Into<String>) -> Self {
        Self {
            sentiment: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            ..Self::default()
        }
    }
}
