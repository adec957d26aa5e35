//! The session: one graph, one traversal engine, one set of playback settings.
//!
//! Every user action from a front-end goes through a method here. Methods
//! either succeed and return the events to render, or return an [`AppError`]
//! and change nothing.

use std::time::Duration;

use gt_core::{NodeId, Position};
use gt_graph::{Edge, Graph, Node};
use gt_traverse::{Algorithm, Pending, RunState, StepOutcome, Ticket, TraversalEngine};
use tracing::{info, warn};

use crate::config::{PlaybackConfig, check_speed};
use crate::error::{AppError, AppResult};
use crate::events::SessionEvent;

/// Progress of the two-click edge workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    #[default]
    Off,
    /// Waiting for the first endpoint.
    AwaitingFirst,
    /// First endpoint chosen, waiting for the second.
    AwaitingSecond(NodeId),
}

/// Result of picking a node while in edge mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSelection {
    /// The node is now the pending first endpoint.
    First(NodeId),
    /// Both endpoints chosen; the edge was added and edge mode ended.
    Created(Edge),
}

/// Counts and status for a status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub state: RunState,
    pub step_mode: bool,
    pub speed_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Session {
    graph: Graph,
    engine: TraversalEngine,
    config: PlaybackConfig,
    edge_mode: EdgeMode,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl Session {
    pub fn new(config: PlaybackConfig) -> Self {
        let engine = TraversalEngine::with_settings(config.step_mode, config.delay());
        Self {
            graph: Graph::new(),
            engine,
            config,
            edge_mode: EdgeMode::Off,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn engine(&self) -> &TraversalEngine {
        &self.engine
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            state: self.engine.state(),
            step_mode: self.config.step_mode,
            speed_ms: self.config.speed_ms,
        }
    }

    /// Place a new node.
    pub fn create_node(&mut self, position: Position) -> AppResult<Node> {
        self.ensure_editable()?;
        let node = self.graph.add_node(position);
        info!(node = %node.id, "node added");
        Ok(node)
    }

    /// Place a new node in the next free slot of a fixed grid.
    ///
    /// The slot follows the node count, so rejected requests and clears never
    /// leave a gap or stack two nodes on one spot.
    pub fn create_node_auto(&mut self) -> AppResult<Node> {
        let position = grid_position(self.graph.node_count());
        self.create_node(position)
    }

    /// Connect two existing nodes.
    pub fn create_edge(&mut self, from: NodeId, to: NodeId) -> AppResult<Edge> {
        self.ensure_editable()?;
        let edge = self.graph.try_add_edge(from, to).map_err(|e| {
            warn!(%from, %to, error = %e, "edge rejected");
            AppError::from(e)
        })?;
        info!(%from, %to, "edge added");
        Ok(edge)
    }

    /// Remove every node and edge and forget the last run.
    pub fn clear_graph(&mut self) -> AppResult<()> {
        self.ensure_editable()?;
        self.graph.clear();
        self.engine = TraversalEngine::with_settings(self.config.step_mode, self.config.delay());
        self.edge_mode = EdgeMode::Off;
        info!("graph cleared");
        Ok(())
    }

    /// Enter or leave edge mode. Returns whether edge mode is now on.
    pub fn toggle_edge_mode(&mut self) -> AppResult<bool> {
        if self.edge_mode != EdgeMode::Off {
            self.edge_mode = EdgeMode::Off;
            return Ok(false);
        }

        self.ensure_editable()?;
        let count = self.graph.node_count();
        if count < 2 {
            return Err(AppError::InsufficientNodes { count });
        }
        self.edge_mode = EdgeMode::AwaitingFirst;
        Ok(true)
    }

    /// Pick a node as the next edge endpoint.
    ///
    /// Picking the pending first endpoint again is ignored. Once a second,
    /// different node is picked, edge mode ends whether or not the edge could
    /// be added.
    pub fn select_for_edge(&mut self, id: NodeId) -> AppResult<EdgeSelection> {
        if !self.graph.contains(id) {
            return Err(AppError::InvalidInput(format!("node {id} does not exist")));
        }

        match self.edge_mode {
            EdgeMode::Off => Err(AppError::EdgeModeInactive),
            EdgeMode::AwaitingFirst => {
                self.edge_mode = EdgeMode::AwaitingSecond(id);
                Ok(EdgeSelection::First(id))
            }
            EdgeMode::AwaitingSecond(first) if first == id => Ok(EdgeSelection::First(first)),
            EdgeMode::AwaitingSecond(first) => {
                self.edge_mode = EdgeMode::Off;
                self.create_edge(first, id).map(EdgeSelection::Created)
            }
        }
    }

    /// Parse a start node typed by the user.
    ///
    /// Only the syntax is checked here; `request_start` checks the id exists.
    pub fn parse_start(&self, input: &str) -> AppResult<NodeId> {
        input
            .parse::<NodeId>()
            .map_err(|e| AppError::InvalidStartNode(e.to_string()))
    }

    /// Begin a traversal and run its first step straight away.
    ///
    /// On error the previous run, if any, is left untouched.
    pub fn request_start(
        &mut self,
        start: NodeId,
        algorithm: Algorithm,
    ) -> AppResult<Vec<SessionEvent>> {
        self.engine
            .start(&self.graph, start, algorithm)
            .map_err(|e| {
                warn!(%start, %algorithm, error = %e, "start rejected");
                AppError::from(e)
            })?;
        self.edge_mode = EdgeMode::Off;

        let outcome = self.engine.step()?;
        Ok(outcome_events(outcome))
    }

    /// Fire the step a paused run is waiting for.
    pub fn request_advance(&mut self) -> AppResult<Vec<SessionEvent>> {
        let outcome = self.engine.advance()?;
        Ok(outcome_events(outcome))
    }

    /// Abort the active run. Does nothing when no run is active.
    pub fn request_stop(&mut self) -> Vec<SessionEvent> {
        match self.engine.stop() {
            Some(summary) => vec![
                SessionEvent::Stopped(summary),
                SessionEvent::info("Traversal stopped"),
            ],
            None => Vec::new(),
        }
    }

    /// Set the auto-mode delay. Takes effect from the next scheduled step.
    pub fn set_speed(&mut self, speed_ms: u64) -> AppResult<()> {
        check_speed(speed_ms)?;
        self.config.speed_ms = speed_ms;
        self.engine.set_delay(Duration::from_millis(speed_ms));
        Ok(())
    }

    pub fn set_step_mode(&mut self, on: bool) -> Vec<SessionEvent> {
        self.config.step_mode = on;
        self.engine.set_step_mode(on);
        vec![SessionEvent::info(format!(
            "Step mode: {}",
            if on { "ON" } else { "OFF" }
        ))]
    }

    /// The timer the driver should arm, if the run is in auto mode.
    pub fn pending_timer(&self) -> Option<(Ticket, Duration)> {
        match self.engine.pending() {
            Some(Pending::Timer { ticket, delay }) => Some((ticket, delay)),
            _ => None,
        }
    }

    /// A timer armed from [`pending_timer`](Self::pending_timer) elapsed.
    ///
    /// Stale tickets produce no events.
    pub fn on_timer(&mut self, ticket: Ticket) -> AppResult<Vec<SessionEvent>> {
        let outcome = self.engine.on_timer(ticket)?;
        Ok(outcome.map(outcome_events).unwrap_or_default())
    }

    fn ensure_editable(&self) -> AppResult<()> {
        if self.engine.is_running() {
            return Err(AppError::RunActive);
        }
        Ok(())
    }
}

fn grid_position(slot: usize) -> Position {
    const COLUMNS: usize = 6;
    const SPACING: f64 = 120.0;
    Position::new(
        80.0 + (slot % COLUMNS) as f64 * SPACING,
        80.0 + (slot / COLUMNS) as f64 * SPACING,
    )
}

fn outcome_events(outcome: StepOutcome) -> Vec<SessionEvent> {
    match outcome {
        StepOutcome::Advanced(snapshot) => vec![SessionEvent::Step(snapshot)],
        StepOutcome::Completed(summary) => {
            let message = summary.to_string();
            vec![SessionEvent::Completed(summary), SessionEvent::info(message)]
        }
    }
}
