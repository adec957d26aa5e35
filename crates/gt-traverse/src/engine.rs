//! The traversal state machine.
//!
//! A whole-graph BFS/DFS is split into single steps so a person can watch it.
//! The engine never sleeps and owns no timers: after every step it records one
//! [`Pending`] continuation, and whoever drives it (a timer loop, a UI handler,
//! a test) decides when to honour it.

use std::collections::HashSet;
use std::time::Duration;

use gt_core::NodeId;
use gt_graph::{Adjacency, FlagTable, Graph};
use tracing::{debug, info};

use crate::algorithm::Algorithm;
use crate::error::{TraverseError, TraverseResult};
use crate::frontier::Frontier;
use crate::snapshot::{Outcome, RunSummary, Snapshot, join_ids};
use crate::state::{Pending, RunState, Ticket};

/// Inter-step delay in auto mode unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(800);

/// Result of one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A node was processed.
    Advanced(Snapshot),
    /// The frontier was already empty; the run is over.
    Completed(RunSummary),
}

/// Algorithm state for one run. Discarded by the next `start()`.
#[derive(Debug, Clone)]
struct Run {
    algorithm: Algorithm,
    start: NodeId,
    adjacency: Adjacency,
    frontier: Frontier,
    visited: HashSet<NodeId>,
    order: Vec<NodeId>,
}

impl Run {
    fn summary(&self, outcome: Outcome) -> RunSummary {
        RunSummary {
            algorithm: self.algorithm,
            start: self.start,
            outcome,
            steps: self.order.len(),
            order: self.order.clone(),
        }
    }
}

/// Resumable BFS/DFS over a snapshot of a [`Graph`].
///
/// The graph's adjacency is captured at `start()`, so later edits to the graph
/// cannot affect a run in progress. Node flags live in the engine's own
/// [`FlagTable`].
#[derive(Debug, Clone)]
pub struct TraversalEngine {
    state: RunState,
    run: Option<Run>,
    flags: FlagTable,
    pending: Option<Pending>,
    step_mode: bool,
    delay: Duration,
    last_ticket: u64,
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalEngine {
    /// An idle engine in auto mode with the default delay.
    pub fn new() -> Self {
        Self::with_settings(false, DEFAULT_DELAY)
    }

    pub fn with_settings(step_mode: bool, delay: Duration) -> Self {
        Self {
            state: RunState::Idle,
            run: None,
            flags: FlagTable::default(),
            pending: None,
            step_mode,
            delay,
            last_ticket: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_active()
    }

    pub fn step_mode(&self) -> bool {
        self.step_mode
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The continuation the driver must honour before the next step.
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Node flags for rendering.
    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.run.as_ref().map(|run| run.algorithm)
    }

    pub fn start_node(&self) -> Option<NodeId> {
        self.run.as_ref().map(|run| run.start)
    }

    /// Visit order of the latest run.
    pub fn order(&self) -> &[NodeId] {
        self.run.as_ref().map_or(&[], |run| run.order.as_slice())
    }

    /// Number of nodes processed in the latest run.
    pub fn visited_count(&self) -> usize {
        self.run.as_ref().map_or(0, |run| run.visited.len())
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.run
            .as_ref()
            .is_some_and(|run| run.visited.contains(&id))
    }

    /// Nodes waiting to be processed, next first.
    pub fn frontier(&self) -> Vec<NodeId> {
        self.run
            .as_ref()
            .map(|run| run.frontier.pending(&run.visited))
            .unwrap_or_default()
    }

    /// Summary of the latest run, if any.
    pub fn summary(&self) -> Option<RunSummary> {
        let outcome = match self.state {
            RunState::Stopped => Outcome::Stopped,
            _ => Outcome::Completed,
        };
        self.run.as_ref().map(|run| run.summary(outcome))
    }

    /// Begin a run from `start`.
    ///
    /// Validation happens before anything changes, so a rejected start leaves
    /// the previous run (active or finished) exactly as it was. Starting while
    /// a run is active replaces it.
    pub fn start(
        &mut self,
        graph: &Graph,
        start: NodeId,
        algorithm: Algorithm,
    ) -> TraverseResult<()> {
        if graph.is_empty() {
            return Err(TraverseError::EmptyGraph);
        }
        if !graph.contains(start) {
            return Err(TraverseError::InvalidStartNode {
                node: start,
                assigned: graph.id_counter(),
            });
        }

        if self.state.is_active() {
            debug!(previous = ?self.algorithm(), "replacing active traversal");
        }

        self.flags = FlagTable::for_graph(graph);
        self.flags.reset_flags();
        self.run = Some(Run {
            algorithm,
            start,
            adjacency: graph.adjacency(),
            frontier: Frontier::new(algorithm, start),
            visited: HashSet::new(),
            order: Vec::new(),
        });
        self.state = if self.step_mode {
            RunState::RunningPaused
        } else {
            RunState::RunningAuto
        };
        // The first step is due right away in auto mode.
        self.pending = Some(self.continuation(Duration::ZERO));

        info!(%algorithm, %start, state = %self.state, "traversal started");
        Ok(())
    }

    /// Advance the run by exactly one node.
    ///
    /// This is the atomic unit of progress. Drivers should normally go through
    /// [`advance`](Self::advance) or [`on_timer`](Self::on_timer), which check
    /// that the step is the one that was scheduled.
    pub fn step(&mut self) -> TraverseResult<StepOutcome> {
        let state = self.state;
        let run = match self.run.as_mut() {
            Some(run) if state.is_active() => run,
            _ => return Err(TraverseError::NotRunning { state }),
        };
        self.pending = None;

        let Some(current) = run.frontier.pop_next(&run.visited) else {
            let summary = run.summary(Outcome::Completed);
            self.flags.clear_current();
            self.state = RunState::Completed;
            info!(
                algorithm = %summary.algorithm,
                order = %summary.order_text(),
                "traversal completed"
            );
            return Ok(StepOutcome::Completed(summary));
        };

        self.flags.set_current(current);
        run.order.push(current);
        run.visited.insert(current);
        self.flags.mark_visited(current);

        run.frontier
            .extend(run.adjacency.neighbors(current), &run.visited);

        let snapshot = Snapshot {
            step: run.order.len(),
            algorithm: run.algorithm,
            current,
            frontier: run.frontier.pending(&run.visited),
            order: run.order.clone(),
            flags: self.flags.clone(),
        };
        self.flags.clear_current();

        debug!(
            step = snapshot.step,
            current = %current,
            frontier = %join_ids(&snapshot.frontier, ","),
            "traversal step"
        );

        let delay = self.delay;
        self.pending = Some(self.continuation(delay));
        Ok(StepOutcome::Advanced(snapshot))
    }

    /// Fire the step a paused run is waiting for.
    pub fn advance(&mut self) -> TraverseResult<StepOutcome> {
        match (self.state, self.pending) {
            (RunState::RunningPaused, Some(Pending::Advance)) => self.step(),
            (state, _) => Err(TraverseError::NotPaused { state }),
        }
    }

    /// Fire a scheduled auto step.
    ///
    /// Returns `Ok(None)` without doing anything if `ticket` is not the timer
    /// currently pending, which is how stale timers (from before a stop, a
    /// mode switch or a restart) are cancelled.
    pub fn on_timer(&mut self, ticket: Ticket) -> TraverseResult<Option<StepOutcome>> {
        match self.pending {
            Some(Pending::Timer { ticket: due, .. })
                if due == ticket && self.state == RunState::RunningAuto =>
            {
                self.step().map(Some)
            }
            _ => {
                debug!(?ticket, "ignoring stale timer");
                Ok(None)
            }
        }
    }

    /// Abort the active run.
    ///
    /// Clears every node flag and drops the pending continuation, so nothing
    /// scheduled earlier can produce another snapshot. Returns `None` when no
    /// run is active.
    pub fn stop(&mut self) -> Option<RunSummary> {
        if !self.state.is_active() {
            return None;
        }

        self.flags.reset_flags();
        self.pending = None;
        self.state = RunState::Stopped;

        let summary = self.run.as_ref().map(|run| run.summary(Outcome::Stopped));
        info!(steps = summary.as_ref().map_or(0, |s| s.steps), "traversal stopped");
        summary
    }

    /// Switch between timer-driven and manual stepping.
    ///
    /// Mid-run this converts the pending continuation; frontier and order are
    /// untouched. The setting also applies to future runs.
    pub fn set_step_mode(&mut self, on: bool) {
        self.step_mode = on;

        let next = match (self.state, on) {
            (RunState::RunningAuto, true) => RunState::RunningPaused,
            (RunState::RunningPaused, false) => RunState::RunningAuto,
            _ => return,
        };
        self.state = next;
        if self.pending.is_some() {
            let delay = self.delay;
            self.pending = Some(self.continuation(delay));
        }
        debug!(state = %self.state, "step mode changed");
    }

    /// Inter-step delay for timers scheduled from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Step until the run completes and return its summary.
    pub fn run_to_completion(&mut self) -> TraverseResult<RunSummary> {
        loop {
            if let StepOutcome::Completed(summary) = self.step()? {
                return Ok(summary);
            }
        }
    }

    fn continuation(&mut self, delay: Duration) -> Pending {
        match self.state {
            RunState::RunningPaused => Pending::Advance,
            _ => {
                self.last_ticket = self.last_ticket.wrapping_add(1);
                Pending::Timer {
                    ticket: Ticket(self.last_ticket),
                    delay,
                }
            }
        }
    }
}
