//! Error types for traversal operations.

use gt_core::NodeId;
use thiserror::Error;

use crate::state::RunState;

/// Errors reported by the traversal engine. None of them disturb a run
/// already in progress.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    #[error("Graph is empty")]
    EmptyGraph,

    #[error("Invalid start node {node} (assigned ids: 0..{assigned})")]
    InvalidStartNode { node: NodeId, assigned: u32 },

    #[error("No traversal is running (state: {state})")]
    NotRunning { state: RunState },

    #[error("Traversal is not paused (state: {state})")]
    NotPaused { state: RunState },

    #[error("Unknown algorithm {input:?}: expected bfs or dfs")]
    UnknownAlgorithm { input: String },
}

pub type TraverseResult<T> = Result<T, TraverseError>;
