//! Whole-graph traversals computed in one call.
//!
//! These are the textbook formulations (queue-based BFS, recursive DFS). The
//! CLI prints them directly and the tests use them as an oracle for the
//! step-wise engine.

use std::collections::{HashSet, VecDeque};

use gt_core::NodeId;
use gt_graph::{Adjacency, Graph};

use crate::algorithm::Algorithm;
use crate::error::{TraverseError, TraverseResult};

/// Breadth-first visit order from `start`.
pub fn bfs_order(graph: &Graph, start: NodeId) -> TraverseResult<Vec<NodeId>> {
    check_start(graph, start)?;
    let adjacency = graph.adjacency();

    let mut order = Vec::with_capacity(graph.node_count());
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &next in adjacency.neighbors(current) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(order)
}

/// Depth-first visit order from `start`, recursing into neighbors in
/// edge-insertion order.
///
/// Recursion depth is bounded by the longest simple path, which is fine for
/// hand-drawn graphs.
pub fn dfs_order(graph: &Graph, start: NodeId) -> TraverseResult<Vec<NodeId>> {
    check_start(graph, start)?;
    let adjacency = graph.adjacency();

    let mut order = Vec::with_capacity(graph.node_count());
    let mut seen = HashSet::new();
    visit(&adjacency, start, &mut seen, &mut order);
    Ok(order)
}

/// Dispatch on `algorithm`.
pub fn traversal_order(
    graph: &Graph,
    start: NodeId,
    algorithm: Algorithm,
) -> TraverseResult<Vec<NodeId>> {
    match algorithm {
        Algorithm::Bfs => bfs_order(graph, start),
        Algorithm::Dfs => dfs_order(graph, start),
    }
}

fn visit(
    adjacency: &Adjacency,
    node: NodeId,
    seen: &mut HashSet<NodeId>,
    order: &mut Vec<NodeId>,
) {
    seen.insert(node);
    order.push(node);
    for &next in adjacency.neighbors(node) {
        if !seen.contains(&next) {
            visit(adjacency, next, seen, order);
        }
    }
}

fn check_start(graph: &Graph, start: NodeId) -> TraverseResult<()> {
    if graph.is_empty() {
        return Err(TraverseError::EmptyGraph);
    }
    if !graph.contains(start) {
        return Err(TraverseError::InvalidStartNode {
            node: start,
            assigned: graph.id_counter(),
        });
    }
    Ok(())
}
