//! Observable output of the engine.

use core::fmt;

use gt_core::NodeId;
use gt_graph::FlagTable;
use serde::Serialize;

use crate::algorithm::Algorithm;

/// Everything a renderer needs to draw one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// 1-based step number within the run.
    pub step: usize,
    pub algorithm: Algorithm,
    /// The node processed by this step.
    pub current: NodeId,
    /// Nodes still waiting, next to be processed first.
    pub frontier: Vec<NodeId>,
    /// Cumulative visit order, ending with `current`.
    pub order: Vec<NodeId>,
    /// Per-node flags as of this step; only `current` has the current flag.
    pub flags: FlagTable,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Completed,
    Stopped,
}

/// Final report of a run, sent with completion and stop notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub outcome: Outcome,
    pub steps: usize,
    pub order: Vec<NodeId>,
}

impl RunSummary {
    /// Visit order joined with arrows, e.g. `0 → 1 → 3`.
    pub fn order_text(&self) -> String {
        join_ids(&self.order, " → ")
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Completed => {
                write!(f, "{} completed! Order: {}", self.algorithm, self.order_text())
            }
            Outcome::Stopped => write!(
                f,
                "{} stopped after {} steps. Order so far: {}",
                self.algorithm,
                self.steps,
                self.order_text()
            ),
        }
    }
}

pub(crate) fn join_ids(ids: &[NodeId], sep: &str) -> String {
    ids.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
