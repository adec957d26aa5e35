//! Error types for the gt-app service layer.

use std::path::PathBuf;

use gt_core::NodeId;
use gt_graph::GraphError;
use gt_traverse::TraverseError;

/// Application error type. Every variant is a recoverable, user-facing
/// warning; none of them leave the session in a half-updated state.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid start node: {0}")]
    InvalidStartNode(String),

    #[error("Graph is empty")]
    EmptyGraph,

    #[error("Edge already exists or invalid connection: {from} → {to}")]
    DuplicateOrSelfEdge { from: NodeId, to: NodeId },

    #[error("Need at least 2 nodes to add edges (graph has {count})")]
    InsufficientNodes { count: usize },

    #[error("A traversal is running; stop it before editing the graph")]
    RunActive,

    #[error("No traversal is waiting for a step")]
    NoActiveRun,

    #[error("Traversal is playing automatically; turn step mode on to advance by hand")]
    NotPaused,

    #[error("Edge mode is off")]
    EdgeModeInactive,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Player thread is no longer running")]
    PlayerGone,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gt-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<TraverseError> for AppError {
    fn from(err: TraverseError) -> Self {
        match err {
            TraverseError::EmptyGraph => AppError::EmptyGraph,
            TraverseError::InvalidStartNode { .. } => AppError::InvalidStartNode(err.to_string()),
            TraverseError::NotRunning { .. } => AppError::NoActiveRun,
            TraverseError::NotPaused { state } if state.is_active() => AppError::NotPaused,
            TraverseError::NotPaused { .. } => AppError::NoActiveRun,
            TraverseError::UnknownAlgorithm { .. } => AppError::InvalidInput(err.to_string()),
        }
    }
}

impl From<GraphError> for AppError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::SelfLoop { node } => AppError::DuplicateOrSelfEdge {
                from: node,
                to: node,
            },
            GraphError::DuplicateEdge { from, to } => AppError::DuplicateOrSelfEdge { from, to },
            GraphError::UnknownNode { .. } | GraphError::MisplacedNode { .. } => {
                AppError::InvalidInput(err.to_string())
            }
        }
    }
}
