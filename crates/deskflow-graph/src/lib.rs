//! Support-query workflow engine.
//!
//! A query flows through a fixed directed graph: classify its topic,
//! classify its sentiment, then answer via one of four handlers picked by a
//! routing rule. The graph is compiled once and shared; each invocation
//! owns its own state.

mod executor;

pub mod graph;
pub mod node;
pub mod nodes;
pub mod pipeline;
pub mod prompts;
pub mod router;

pub use graph::{Graph, GraphBuilder, Router, Transition};
pub use node::{Node, NodeId};
pub use nodes::{
    CategorizeNode, EscalateNode, HandlerKind, RespondNode, SentimentNode, ESCALATION_NOTICE,
};
pub use pipeline::{SupportOutcome, SupportPipeline};
pub use router::route_query;
