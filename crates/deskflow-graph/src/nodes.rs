//! The concrete workflow steps.
//!
//! Four nodes call the classifier port with one prompt each; `EscalateNode`
//! is pure. Every node returns only the field it populated; the executor
//! merges updates into the shared state.

use std::sync::Arc;

use futures::future::BoxFuture;

use deskflow_core::error::Result;
use deskflow_core::prompt::PromptTemplate;
use deskflow_core::state::{StateUpdate, TicketState};
use deskflow_core::traits::Classifier;

use crate::node::{Node, NodeId};
use crate::prompts;

/// Fixed response returned by the escalate node, independent of the query.
pub const ESCALATION_NOTICE: &str =
    "This query has been escalated to a human agent due to its negative sentiment.";

/// Classifies the query topic. The raw classifier text is stored as the
/// category, with no validation against the nominal label set.
pub struct CategorizeNode {
    classifier: Arc<dyn Classifier>,
}

impl CategorizeNode {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}

impl Node for CategorizeNode {
    fn id(&self) -> NodeId {
        NodeId::Categorize
    }

    fn run<'a>(&'a self, state: &'a TicketState) -> BoxFuture<'a, Result<StateUpdate>> {
        Box::pin(async move {
            let prompt = prompts::CATEGORIZE.render(&[("query", state.query())]);
            let label = self.classifier.classify(prompt).await?;
            Ok(StateUpdate::category(label))
        })
    }
}

/// Classifies the query sentiment, stored verbatim like the category.
pub struct SentimentNode {
    classifier: Arc<dyn Classifier>,
}

impl SentimentNode {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}

impl Node for SentimentNode {
    fn id(&self) -> NodeId {
        NodeId::AnalyzeSentiment
    }

    fn run<'a>(&'a self, state: &'a TicketState) -> BoxFuture<'a, Result<StateUpdate>> {
        Box::pin(async move {
            let prompt = prompts::SENTIMENT.render(&[("query", state.query())]);
            let label = self.classifier.classify(prompt).await?;
            Ok(StateUpdate::sentiment(label))
        })
    }
}

/// Which handler branch a `RespondNode` serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Technical,
    Billing,
    General,
}

impl HandlerKind {
    fn node_id(&self) -> NodeId {
        match self {
            HandlerKind::Technical => NodeId::HandleTechnical,
            HandlerKind::Billing => NodeId::HandleBilling,
            HandlerKind::General => NodeId::HandleGeneral,
        }
    }

    fn template(&self) -> PromptTemplate {
        match self {
            HandlerKind::Technical => prompts::TECHNICAL_RESPONSE,
            HandlerKind::Billing => prompts::BILLING_RESPONSE,
            HandlerKind::General => prompts::GENERAL_RESPONSE,
        }
    }
}

/// Produces the final response for one of the three handler branches.
pub struct RespondNode {
    kind: HandlerKind,
    classifier: Arc<dyn Classifier>,
}

impl RespondNode {
    pub fn new(kind: HandlerKind, classifier: Arc<dyn Classifier>) -> Self {
        Self { kind, classifier }
    }
}

impl Node for RespondNode {
    fn id(&self) -> NodeId {
        self.kind.node_id()
    }

    fn run<'a>(&'a self, state: &'a TicketState) -> BoxFuture<'a, Result<StateUpdate>> {
        Box::pin(async move {
            let prompt = self.kind.template().render(&[("query", state.query())]);
            let text = self.classifier.classify(prompt).await?;
            Ok(StateUpdate::response(text))
        })
    }
}

/// Hands the query off to a human. Pure: no classifier call, and the
/// response is a fixed literal.
pub struct EscalateNode;

impl Node for EscalateNode {
    fn id(&self) -> NodeId {
        NodeId::Escalate
    }

    fn run<'a>(&'a self, _state: &'a TicketState) -> BoxFuture<'a, Result<StateUpdate>> {
        Box::pin(async move { Ok(StateUpdate::response(ESCALATION_NOTICE)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use deskflow_core::error::DeskflowError;
    use deskflow_llm::MockClassifier;

    #[tokio::test]
    async fn test_categorize_stores_raw_label() {
        let mock = Arc::new(MockClassifier::new().reply("Technical"));
        let node = CategorizeNode::new(mock);
        let state = TicketState::new("my screen is blank");

        let update = node.run(&state).await.unwrap();
        assert_eq!(update.category.as_deref(), Some("Technical"));
        assert!(update.sentiment.is_none());
        assert!(update.response.is_none());
    }

    #[tokio::test]
    async fn test_categorize_keeps_unexpected_label_text() {
        let mock = Arc::new(MockClassifier::new().reply("probably a billing issue"));
        let node = CategorizeNode::new(mock);
        let state = TicketState::new("q");

        let update = node.run(&state).await.unwrap();
        assert_eq!(update.category.as_deref(), Some("probably a billing issue"));
    }

    #[tokio::test]
    async fn test_sentiment_node_sets_sentiment_only() {
        let mock = Arc::new(MockClassifier::new().reply("Negative"));
        let node = SentimentNode::new(mock);
        let state = TicketState::new("this is unacceptable");

        let update = node.run(&state).await.unwrap();
        assert_eq!(update.sentiment.as_deref(), Some("Negative"));
        assert!(update.category.is_none());
    }

    #[tokio::test]
    async fn test_respond_node_kinds() {
        for (kind, id) in [
            (HandlerKind::Technical, NodeId::HandleTechnical),
            (HandlerKind::Billing, NodeId::HandleBilling),
            (HandlerKind::General, NodeId::HandleGeneral),
        ] {
            let mock = Arc::new(MockClassifier::new().reply("here is some help"));
            let node = RespondNode::new(kind, mock);
            assert_eq!(node.id(), id);

            let state = TicketState::new("q");
            let update = node.run(&state).await.unwrap();
            assert_eq!(update.response.as_deref(), Some("here is some help"));
        }
    }

    #[tokio::test]
    async fn test_escalate_is_fixed_literal() {
        let node = EscalateNode;
        for query in ["why is my bill so high?!", "other text entirely"] {
            let state = TicketState::new(query);
            let update = node.run(&state).await.unwrap();
            assert_eq!(update.response.as_deref(), Some(ESCALATION_NOTICE));
        }
    }

    #[tokio::test]
    async fn test_classifier_failure_propagates() {
        let mock = Arc::new(MockClassifier::new().failure("boom"));
        let node = CategorizeNode::new(mock);
        let state = TicketState::new("q");

        let err = node.run(&state).await.unwrap_err();
        assert!(matches!(err, DeskflowError::ClassifierRequest(_)));
    }
}
