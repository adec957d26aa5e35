//! The frontier shared by breadth-first and depth-first runs.

use std::collections::HashSet;

use gt_core::NodeId;

use crate::algorithm::Algorithm;

/// Nodes discovered but not yet processed.
///
/// Both algorithms use one growable sequence and differ only in which end they
/// read from and the order candidates are pushed in:
///
/// - BFS pushes neighbors in edge-insertion order and reads front to back
///   through a monotonic cursor. Processed entries are never removed, so the
///   remaining queue is always `items[cursor..]`. A node is admitted once,
///   the first time it is discovered.
/// - DFS pushes neighbors reversed and pops from the tail, so the first-listed
///   neighbor is explored first. A node may sit in the stack more than once;
///   it is marked when popped and later copies are skipped, which reproduces
///   recursive DFS exactly.
#[derive(Debug, Clone)]
pub struct Frontier {
    algorithm: Algorithm,
    items: Vec<NodeId>,
    cursor: usize,
    /// BFS only: every node ever admitted.
    discovered: HashSet<NodeId>,
}

impl Frontier {
    /// A frontier holding just `start`.
    pub fn new(algorithm: Algorithm, start: NodeId) -> Self {
        Self {
            algorithm,
            items: vec![start],
            cursor: 0,
            discovered: HashSet::from([start]),
        }
    }

    /// Take the next node to process. `visited` holds nodes already processed.
    ///
    /// Returns `None` once nothing is left.
    pub fn pop_next(&mut self, visited: &HashSet<NodeId>) -> Option<NodeId> {
        match self.algorithm {
            Algorithm::Bfs => {
                let id = self.items.get(self.cursor).copied()?;
                self.cursor += 1;
                Some(id)
            }
            Algorithm::Dfs => {
                while let Some(id) = self.items.pop() {
                    if !visited.contains(&id) {
                        return Some(id);
                    }
                }
                None
            }
        }
    }

    /// Offer the neighbors of the node just processed, in edge-insertion order.
    pub fn extend(&mut self, neighbors: &[NodeId], visited: &HashSet<NodeId>) {
        match self.algorithm {
            Algorithm::Bfs => {
                for &id in neighbors {
                    if self.discovered.insert(id) {
                        self.items.push(id);
                    }
                }
            }
            Algorithm::Dfs => {
                for &id in neighbors.iter().rev() {
                    if !visited.contains(&id) {
                        self.items.push(id);
                    }
                }
            }
        }
    }

    /// Nodes still waiting, in the order they will be processed.
    pub fn pending(&self, visited: &HashSet<NodeId>) -> Vec<NodeId> {
        match self.algorithm {
            Algorithm::Bfs => self.items.get(self.cursor..).unwrap_or(&[]).to_vec(),
            Algorithm::Dfs => {
                let mut shown = HashSet::new();
                self.items
                    .iter()
                    .rev()
                    .copied()
                    .filter(|id| !visited.contains(id) && shown.insert(*id))
                    .collect()
            }
        }
    }
}
