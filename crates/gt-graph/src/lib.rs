//! gt-graph: graph store for graphtour.
//!
//! Provides:
//! - Mutable graph store (Node, Edge, Graph) with self-loop and duplicate rejection
//! - Immutable adjacency snapshots for traversal
//! - Per-run node flag table (visited / current)
//! - Validating graph builder
//!
//! # Example
//!
//! ```
//! use gt_graph::GraphBuilder;
//!
//! let graph = GraphBuilder::with_nodes(3)
//!     .edge(0, 1)
//!     .edge(1, 2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod flags;
pub mod graph;
mod validate;

pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use flags::{FlagTable, NodeFlags};
pub use graph::{Adjacency, Edge, Graph, Node};
pub use validate::validate_graph;
