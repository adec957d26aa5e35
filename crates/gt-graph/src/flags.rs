//! Per-run node flags.
//!
//! Flags describe how far a traversal has progressed, so they belong to the
//! traversal engine rather than the graph. Renderers get read-only access.

use std::collections::BTreeMap;

use gt_core::NodeId;
use serde::ser::{Serialize, Serializer};

use crate::graph::Graph;

/// Traversal flags for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct NodeFlags {
    /// Processed during the current run. Sticky until the next reset.
    pub visited: bool,
    /// Being processed by the step currently on screen.
    pub current: bool,
}

/// Side table of [`NodeFlags`] keyed by node id.
///
/// At most one node is `current` at a time; `set_current` moves the marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagTable {
    flags: BTreeMap<NodeId, NodeFlags>,
    current: Option<NodeId>,
}

impl FlagTable {
    /// A table with cleared flags for every node in `graph`.
    pub fn for_graph(graph: &Graph) -> Self {
        Self {
            flags: graph
                .nodes()
                .iter()
                .map(|node| (node.id, NodeFlags::default()))
                .collect(),
            current: None,
        }
    }

    /// Flags for `id`; cleared flags for unknown ids.
    pub fn get(&self, id: NodeId) -> NodeFlags {
        self.flags.get(&id).copied().unwrap_or_default()
    }

    pub fn mark_visited(&mut self, id: NodeId) {
        self.flags.entry(id).or_default().visited = true;
    }

    pub fn set_current(&mut self, id: NodeId) {
        self.clear_current();
        self.flags.entry(id).or_default().current = true;
        self.current = Some(id);
    }

    pub fn clear_current(&mut self) {
        if let Some(prev) = self.current.take() {
            if let Some(flags) = self.flags.get_mut(&prev) {
                flags.current = false;
            }
        }
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    /// Clear `visited` and `current` on every node. Topology is untouched.
    pub fn reset_flags(&mut self) {
        for flags in self.flags.values_mut() {
            *flags = NodeFlags::default();
        }
        self.current = None;
    }

    pub fn visited_count(&self) -> usize {
        self.flags.values().filter(|f| f.visited).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeFlags)> + '_ {
        self.flags.iter().map(|(&id, &flags)| (id, flags))
    }
}

impl Serialize for FlagTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.flags.iter())
    }
}
