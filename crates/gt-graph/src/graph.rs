//! Core graph data structures.

use gt_core::{NodeId, Position};

use crate::error::GraphResult;
use crate::validate;

/// A node the user placed on the canvas.
///
/// Nodes carry identity and a position; traversal flags live in
/// [`FlagTable`](crate::FlagTable), not here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
}

/// A connection between two nodes.
///
/// The direction is recorded so renderers can draw an arrowhead, but adjacency
/// treats every edge as undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
}

impl Edge {
    /// True if this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint opposite `id`, or `None` if `id` is not an endpoint.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.from == id {
            Some(self.to)
        } else if self.to == id {
            Some(self.from)
        } else {
            None
        }
    }
}

/// The graph store: nodes and edges in creation order.
///
/// Ids come from a counter that only moves forward; `clear` is the one thing
/// that resets it. Because nodes are never removed individually, the node
/// with id `i` always lives at slot `i`.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_id: u32,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `position` and return it.
    pub fn add_node(&mut self, position: Position) -> Node {
        let node = Node {
            id: NodeId::from_index(self.next_id),
            position,
        };
        self.next_id = self.next_id.saturating_add(1);
        self.nodes.push(node);
        node
    }

    /// Add an edge unless it is a self-loop or already present in either
    /// direction. Returns whether the edge set changed.
    ///
    /// Endpoints are not checked for existence; use [`Graph::try_add_edge`]
    /// when they come from user input.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> bool {
        if from == to || self.edge_exists(from, to) {
            return false;
        }
        self.edges.push(Edge { from, to });
        true
    }

    /// Checked variant of [`Graph::add_edge`] reporting why an edge was refused.
    pub fn try_add_edge(&mut self, from: NodeId, to: NodeId) -> GraphResult<Edge> {
        validate::check_new_edge(self, from, to)?;
        let edge = Edge { from, to };
        self.edges.push(edge);
        Ok(edge)
    }

    /// True if any edge joins `a` and `b`, in either direction.
    pub fn edge_exists(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Every node joined to `id` by an edge, in edge-insertion order.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.edges.iter().filter_map(|e| e.other(id)).collect()
    }

    /// Freeze the current neighbor lists for a traversal run.
    pub fn adjacency(&self) -> Adjacency {
        Adjacency::from_graph(self)
    }

    /// Drop all nodes and edges and restart id assignment at 0.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 0;
    }

    /// Get a node by ID (returns None if it doesn't exist).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .get(id.index() as usize)
            .filter(|node| node.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Return all nodes.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The next id to be assigned; every id below it has been handed out.
    pub fn id_counter(&self) -> u32 {
        self.next_id
    }
}

/// Read-only neighbor lists captured from a [`Graph`].
///
/// Stored compactly: node `i`'s neighbors are
/// `targets[offsets[i]..offsets[i + 1]]`, each list in edge-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    offsets: Vec<usize>,
    targets: Vec<NodeId>,
}

impl Adjacency {
    fn from_graph(graph: &Graph) -> Self {
        let mut lists: Vec<Vec<NodeId>> = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            for (owner, neighbor) in [(edge.from, edge.to), (edge.to, edge.from)] {
                if let Some(list) = lists.get_mut(owner.index() as usize) {
                    list.push(neighbor);
                }
            }
        }

        let mut offsets = Vec::with_capacity(lists.len() + 1);
        let mut targets = Vec::with_capacity(graph.edge_count() * 2);
        offsets.push(0);
        for list in &lists {
            targets.extend_from_slice(list);
            offsets.push(targets.len());
        }

        Self { offsets, targets }
    }

    /// Neighbors of `id`; empty for ids outside the snapshot.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        let idx = id.index() as usize;
        match (self.offsets.get(idx), self.offsets.get(idx + 1)) {
            (Some(&start), Some(&end)) => self.targets.get(start..end).unwrap_or(&[]),
            _ => &[],
        }
    }

    /// Number of nodes captured.
    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }
}
