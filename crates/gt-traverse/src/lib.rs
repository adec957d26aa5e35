//! Step-wise graph traversal for graphtour.
//!
//! Provides:
//! - `TraversalEngine`: BFS/DFS as a pausable state machine advanced one step at a time
//! - `Frontier`: the shared queue/stack both algorithms run on
//! - `Snapshot` / `RunSummary`: what each step and each run report to renderers
//! - Whole-graph reference traversals (`bfs_order`, `dfs_order`)

pub mod algorithm;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod reference;
pub mod snapshot;
pub mod state;

pub use algorithm::Algorithm;
pub use engine::{DEFAULT_DELAY, StepOutcome, TraversalEngine};
pub use error::{TraverseError, TraverseResult};
pub use frontier::Frontier;
pub use reference::{bfs_order, dfs_order, traversal_order};
pub use snapshot::{Outcome, RunSummary, Snapshot};
pub use state::{Pending, RunState, Ticket};
