//! Graph walk: run nodes, merge updates, follow transitions until `End`.

use tracing::{debug, info};

use deskflow_core::error::{DeskflowError, Result};
use deskflow_core::state::TicketState;

use crate::graph::{Graph, Transition};
use crate::node::NodeId;

impl Graph {
    /// Execute one invocation: walk from the entry node to `End`, threading
    /// the state through each node.
    ///
    /// Any node failure aborts the walk immediately; no partial state is
    /// returned. Takes `&self` and carries no invocation state, so a shared
    /// instance can execute any number of invocations concurrently.
    pub async fn execute(&self, mut state: TicketState) -> Result<TicketState> {
        // The topology is acyclic, so a walk can never visit more nodes than
        // the graph holds. The guard trips on a malformed transition table.
        let max_steps = self.node_count() + 1;
        let mut current = self.entry;
        let mut steps = 0usize;

        while current != NodeId::End {
            if steps >= max_steps {
                return Err(DeskflowError::MaxStepsExceeded(max_steps));
            }
            steps += 1;

            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| DeskflowError::NodeNotFound(current.to_string()))?;

            debug!(node = %current, "running workflow node");
            let update = node.run(&state).await?;
            state.apply(update);

            current = match self.transitions.get(&current) {
                Some(Transition::To(next)) => *next,
                Some(Transition::Routed { router, targets }) => {
                    let label = router(&state);
                    let next = targets.get(label).copied().ok_or_else(|| {
                        DeskflowError::UnreachableRoute(format!(
                            "label '{label}' from node '{current}' has no target"
                        ))
                    })?;
                    info!(node = %current, label, next = %next, "routed");
                    next
                }
                None => {
                    return Err(DeskflowError::UnreachableRoute(format!(
                        "node '{current}' has no outgoing edge"
                    )))
                }
            };
        }

        Ok(state)
    }
}
