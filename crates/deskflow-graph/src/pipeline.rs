//! The support pipeline: fixed topology plus the public entry point.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use deskflow_core::error::{DeskflowError, Result};
use deskflow_core::state::TicketState;
use deskflow_core::traits::Classifier;

use crate::graph::{Graph, GraphBuilder};
use crate::node::NodeId;
use crate::nodes::{CategorizeNode, EscalateNode, HandlerKind, RespondNode, SentimentNode};
use crate::router::{
    route_query, ROUTE_BILLING, ROUTE_ESCALATE, ROUTE_GENERAL, ROUTE_TECHNICAL,
};

/// Result of one pipeline invocation. All three fields are populated on
/// every successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportOutcome {
    pub category: String,
    pub sentiment: String,
    pub response: String,
}

/// One compiled support workflow: categorize → analyze_sentiment → one of
/// four handlers → end.
///
/// Build once, share via `Arc`, and call [`run`](Self::run) per query;
/// invocations are fully independent.
pub struct SupportPipeline {
    graph: Graph,
}

impl SupportPipeline {
    /// Wire the fixed topology around the given classifier and compile it.
    pub fn new(classifier: Arc<dyn Classifier>) -> Result<Self> {
        let mut targets = HashMap::new();
        targets.insert(ROUTE_ESCALATE, NodeId::Escalate);
        targets.insert(ROUTE_TECHNICAL, NodeId::HandleTechnical);
        targets.insert(ROUTE_BILLING, NodeId::HandleBilling);
        targets.insert(ROUTE_GENERAL, NodeId::HandleGeneral);

        let graph = GraphBuilder::new()
            .add_node(Box::new(CategorizeNode::new(classifier.clone())))
            .add_node(Box::new(SentimentNode::new(classifier.clone())))
            .add_node(Box::new(RespondNode::new(
                HandlerKind::Technical,
                classifier.clone(),
            )))
            .add_node(Box::new(RespondNode::new(
                HandlerKind::Billing,
                classifier.clone(),
            )))
            .add_node(Box::new(RespondNode::new(HandlerKind::General, classifier)))
            .add_node(Box::new(EscalateNode))
            .entry(NodeId::Categorize)
            .add_edge(NodeId::Categorize, NodeId::AnalyzeSentiment)
            .add_conditional_edge(NodeId::AnalyzeSentiment, route_query, targets)
            .add_edge(NodeId::HandleTechnical, NodeId::End)
            .add_edge(NodeId::HandleBilling, NodeId::End)
            .add_edge(NodeId::HandleGeneral, NodeId::End)
            .add_edge(NodeId::Escalate, NodeId::End)
            .compile()?;

        Ok(Self { graph })
    }

    /// Run one query end to end.
    ///
    /// The query must be non-empty; validation happens before any node runs.
    pub async fn run(&self, query: &str) -> Result<SupportOutcome> {
        if query.is_empty() {
            return Err(DeskflowError::InvalidInput("query must be non-empty".into()));
        }

        info!(query_len = query.len(), "processing support query");
        let state = self.graph.execute(TicketState::new(query)).await?;

        let outcome = SupportOutcome {
            category: state.category()?.to_string(),
            sentiment: state.sentiment()?.to_string(),
            response: state.response()?.to_string(),
        };
        info!(
            category = %outcome.category,
            sentiment = %outcome.sentiment,
            "support query resolved"
        );
        Ok(outcome)
    }
}
