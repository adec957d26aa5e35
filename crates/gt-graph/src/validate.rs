//! Graph validation logic.

use std::collections::HashSet;

use gt_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Check that `from -> to` may be added to `graph`.
pub(crate) fn check_new_edge(graph: &Graph, from: NodeId, to: NodeId) -> GraphResult<()> {
    for node in [from, to] {
        if !graph.contains(node) {
            return Err(GraphError::UnknownNode { node });
        }
    }

    if from == to {
        return Err(GraphError::SelfLoop { node: from });
    }

    if graph.edge_exists(from, to) {
        return Err(GraphError::DuplicateEdge { from, to });
    }

    Ok(())
}

/// Validate the whole graph: ids match their slots, every edge references
/// existing nodes, and there are no self-loops or duplicate pairs.
pub fn validate_graph(graph: &Graph) -> GraphResult<()> {
    for (slot, node) in graph.nodes().iter().enumerate() {
        if node.id.index() as usize != slot {
            return Err(GraphError::MisplacedNode {
                node: node.id,
                slot,
            });
        }
    }

    let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
    for edge in graph.edges() {
        for node in [edge.from, edge.to] {
            if !graph.contains(node) {
                return Err(GraphError::UnknownNode { node });
            }
        }

        if edge.from == edge.to {
            return Err(GraphError::SelfLoop { node: edge.from });
        }

        // Normalise so (a, b) and (b, a) collide
        let key = (edge.from.min(edge.to), edge.from.max(edge.to));
        if !seen.insert(key) {
            return Err(GraphError::DuplicateEdge {
                from: edge.from,
                to: edge.to,
            });
        }
    }

    Ok(())
}
