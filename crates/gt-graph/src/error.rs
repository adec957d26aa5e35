//! Graph-specific error types.

use gt_core::NodeId;
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Graph mutation and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge would connect a node to itself.
    #[error("Edge {node} -> {node} would be a self-loop")]
    SelfLoop { node: NodeId },

    /// The pair is already connected, in either direction.
    #[error("Nodes {from} and {to} are already connected")]
    DuplicateEdge { from: NodeId, to: NodeId },

    /// An edge refers to a node that doesn't exist.
    #[error("Node {node} does not exist")]
    UnknownNode { node: NodeId },

    /// A node is not stored at the slot matching its id.
    #[error("Node {node} is stored at slot {slot}")]
    MisplacedNode { node: NodeId, slot: usize },
}
