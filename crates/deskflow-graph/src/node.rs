use std::fmt;

use futures::future::BoxFuture;

use deskflow_core::error::Result;
use deskflow_core::state::{StateUpdate, TicketState};

/// Identifier of a step in the workflow graph.
///
/// The variant set is the full state space of one invocation: the two
/// classification steps, the four terminal handlers, and the `End` marker
/// that stops execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Categorize,
    AnalyzeSentiment,
    HandleTechnical,
    HandleBilling,
    HandleGeneral,
    Escalate,
    /// Terminal marker; reaching it ends the invocation.
    End,
}

impl NodeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeId::Categorize => "categorize",
            NodeId::AnalyzeSentiment => "analyze_sentiment",
            NodeId::HandleTechnical => "handle_technical",
            NodeId::HandleBilling => "handle_billing",
            NodeId::HandleGeneral => "handle_general",
            NodeId::Escalate => "escalate",
            NodeId::End => "end",
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step in the workflow graph.
///
/// Each node reads the current state and returns the partial update it
/// produced. Nodes may call the classifier port but must not mutate graph
/// topology; the executor owns the walk.
pub trait Node: Send + Sync {
    fn id(&self) -> NodeId;

    fn run<'a>(&'a self, state: &'a TicketState) -> BoxFuture<'a, Result<StateUpdate>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_names() {
        assert_eq!(NodeId::Categorize.to_string(), "categorize");
        assert_eq!(NodeId::AnalyzeSentiment.to_string(), "analyze_sentiment");
        assert_eq!(NodeId::Escalate.to_string(), "escalate");
        assert_eq!(NodeId::End.to_string(), "end");
    }
}
