//! Graph definition: node set, transition table, entry point.
//!
//! The topology is plain data (a map from node id to its outgoing
//! transition) rather than live closures, so a compiled graph can be
//! inspected and is trivially shareable. Build with `GraphBuilder`, then
//! `compile()`; the result is immutable and reused across invocations.

use std::collections::HashMap;

use deskflow_core::error::{DeskflowError, Result};
use deskflow_core::state::TicketState;

use crate::node::{Node, NodeId};

/// Pure decision function consulted at a conditional fan-out.
pub type Router = fn(&TicketState) -> &'static str;

/// Outgoing edge of a node.
pub enum Transition {
    /// Unconditional edge to a fixed next node.
    To(NodeId),
    /// Conditional fan-out: the router names a label, the map resolves it
    /// to the next node.
    Routed {
        router: Router,
        targets: HashMap<&'static str, NodeId>,
    },
}

/// Compiled workflow graph: immutable node set, transition table, and entry
/// point. Holds no invocation state — one instance serves any number of
/// concurrent invocations.
pub struct Graph {
    pub(crate) nodes: HashMap<NodeId, Box<dyn Node>>,
    pub(crate) transitions: HashMap<NodeId, Transition>,
    pub(crate) entry: NodeId,
}

/// Builder for [`Graph`]. Register nodes, wire edges, pick the entry point,
/// then `compile()`.
pub struct GraphBuilder {
    nodes: HashMap<NodeId, Box<dyn Node>>,
    transitions: HashMap<NodeId, Transition>,
    entry: Option<NodeId>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            transitions: HashMap::new(),
            entry: None,
        }
    }

    /// Register a node; its id must be unique. Replaces if same id.
    pub fn add_node(mut self, node: Box<dyn Node>) -> Self {
        self.nodes.insert(node.id(), node);
        self
    }

    /// Add an unconditional edge.
    pub fn add_edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.transitions.insert(from, Transition::To(to));
        self
    }

    /// Add the conditional fan-out: `router` picks a label, `targets` maps
    /// each label to the next node.
    pub fn add_conditional_edge(
        mut self,
        from: NodeId,
        router: Router,
        targets: HashMap<&'static str, NodeId>,
    ) -> Self {
        self.transitions
            .insert(from, Transition::Routed { router, targets });
        self
    }

    /// Set the entry node.
    pub fn entry(mut self, entry: NodeId) -> Self {
        self.entry = Some(entry);
        self
    }

    /// Validate the topology and produce the immutable graph.
    ///
    /// Every edge source and target (other than `End`) must be a registered
    /// node, and the entry must be set and registered.
    pub fn compile(self) -> Result<Graph> {
        let entry = self
            .entry
            .ok_or_else(|| DeskflowError::NodeNotFound("<entry not set>".into()))?;
        if !self.nodes.contains_key(&entry) {
            return Err(DeskflowError::NodeNotFound(entry.to_string()));
        }

        for (from, transition) in &self.transitions {
            if !self.nodes.contains_key(from) {
                return Err(DeskflowError::NodeNotFound(from.to_string()));
            }
            match transition {
                Transition::To(to) => self.check_target(*to)?,
                Transition::Routed { targets, .. } => {
                    for to in targets.values() {
                        self.check_target(*to)?;
                    }
                }
            }
        }

        Ok(Graph {
            nodes: self.nodes,
            transitions: self.transitions,
            entry,
        })
    }

    fn check_target(&self, to: NodeId) -> Result<()> {
        if to != NodeId::End && !self.nodes.contains_key(&to) {
            return Err(DeskflowError::NodeNotFound(to.to_string()));
        }
        Ok(())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn entry(&self) -> NodeId {
        self.entry
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.keys().collect::<Vec<_>>())
            .field("transitions", &self.transitions.keys().collect::<Vec<_>>())
            .field("entry", &self.entry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use futures::future::BoxFuture;

    use deskflow_core::state::StateUpdate;

    /// Minimal node that stamps a fixed category.
    struct StaticNode(NodeId);

    impl Node for StaticNode {
        fn id(&self) -> NodeId {
            self.0
        }

        fn run<'a>(&'a self, _state: &'a TicketState) -> BoxFuture<'a, Result<StateUpdate>> {
            Box::pin(async move { Ok(StateUpdate::category("General")) })
        }
    }

    #[test]
    fn test_compile_valid_graph() {
        let graph = GraphBuilder::new()
            .add_node(Box::new(StaticNode(NodeId::Categorize)))
            .add_edge(NodeId::Categorize, NodeId::End)
            .entry(NodeId::Categorize)
            .compile()
            .unwrap();
        assert_eq!(graph.entry(), NodeId::Categorize);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_compile_rejects_missing_entry() {
        let err = GraphBuilder::new()
            .add_node(Box::new(StaticNode(NodeId::Categorize)))
            .compile()
            .unwrap_err();
        assert!(matches!(err, DeskflowError::NodeNotFound(_)));
    }

    #[test]
    fn test_compile_rejects_unregistered_edge_target() {
        let err = GraphBuilder::new()
            .add_node(Box::new(StaticNode(NodeId::Categorize)))
            .add_edge(NodeId::Categorize, NodeId::Escalate)
            .entry(NodeId::Categorize)
            .compile()
            .unwrap_err();
        assert!(matches!(err, DeskflowError::NodeNotFound(name) if name == "escalate"));
    }

    #[test]
    fn test_compile_rejects_unregistered_conditional_target() {
        let mut targets = HashMap::new();
        targets.insert("somewhere", NodeId::HandleGeneral);

        let err = GraphBuilder::new()
            .add_node(Box::new(StaticNode(NodeId::Categorize)))
            .add_conditional_edge(NodeId::Categorize, |_| "somewhere", targets)
            .entry(NodeId::Categorize)
            .compile()
            .unwrap_err();
        assert!(matches!(err, DeskflowError::NodeNotFound(name) if name == "handle_general"));
    }

    #[test]
    fn test_end_is_always_a_valid_target() {
        let graph = GraphBuilder::new()
            .add_node(Box::new(StaticNode(NodeId::Escalate)))
            .add_edge(NodeId::Escalate, NodeId::End)
            .entry(NodeId::Escalate)
            .compile();
        assert!(graph.is_ok());
    }
}
