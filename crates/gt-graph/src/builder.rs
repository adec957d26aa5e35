//! Graph builder for fixtures and command-line graphs.

use gt_core::{NodeId, Position};

use crate::error::GraphResult;
use crate::graph::Graph;
use crate::validate;

/// Builder for describing a graph up front.
///
/// Nodes and edges are recorded as given; `build()` replays them through the
/// checked graph API so the first bad edge is reported instead of silently
/// dropped.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    positions: Vec<Position>,
    edges: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `count` nodes at the origin.
    pub fn with_nodes(count: u32) -> Self {
        Self {
            positions: vec![Position::default(); count as usize],
            edges: Vec::new(),
        }
    }

    /// Add a node and return the id it will receive.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = NodeId::from_index(u32::try_from(self.positions.len()).unwrap_or(u32::MAX));
        self.positions.push(position);
        id
    }

    /// Record an edge between two node ids.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push((from, to));
    }

    /// Chaining form of [`GraphBuilder::add_edge`] taking raw indices.
    pub fn edge(mut self, from: u32, to: u32) -> Self {
        self.add_edge(NodeId::from_index(from), NodeId::from_index(to));
        self
    }

    /// Build and validate the graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for position in self.positions {
            graph.add_node(position);
        }
        for (from, to) in self.edges {
            graph.try_add_edge(from, to)?;
        }

        validate::validate_graph(&graph)?;
        Ok(graph)
    }
}
