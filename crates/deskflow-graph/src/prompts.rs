//! Prompt templates for the classifier-backed nodes.
//!
//! Each template takes a single `{query}` variable. The classification
//! prompts ask for exactly one label, but whatever text comes back is stored
//! verbatim; downstream routing matches literally.

use deskflow_core::prompt::PromptTemplate;

pub const CATEGORIZE: PromptTemplate = PromptTemplate::new(
    "Classify the following customer query into one of these categories: \
     Technical, Billing, General.\n\nQuery: {query}\n\nRespond with only the category name.",
);

pub const SENTIMENT: PromptTemplate = PromptTemplate::new(
    "Analyze the sentiment of the following customer query. Respond with only \
     one word: Positive, Neutral, or Negative.\n\nQuery: {query}",
);

pub const TECHNICAL_RESPONSE: PromptTemplate = PromptTemplate::new(
    "Provide a technical support response to the following query:\n\n{query}",
);

pub const BILLING_RESPONSE: PromptTemplate = PromptTemplate::new(
    "Provide a billing support response to the following query:\n\n{query}",
);

pub const GENERAL_RESPONSE: PromptTemplate = PromptTemplate::new(
    "Provide a general support response to the following query:\n\n{query}",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_take_query_variable() {
        for template in [
            CATEGORIZE,
            SENTIMENT,
            TECHNICAL_RESPONSE,
            BILLING_RESPONSE,
            GENERAL_RESPONSE,
        ] {
            let rendered = template.render(&[("query", "my router is on fire")]);
            assert!(rendered.contains("my router is on fire"));
            assert!(!rendered.contains("{query}"));
        }
    }
}
