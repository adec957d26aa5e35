//! Background playback.
//!
//! A [`Player`] owns a [`Session`] on a worker thread. Front-ends send
//! [`PlayerCommand`]s and receive [`SessionEvent`]s; the worker arms the
//! session's pending timer with `recv_timeout`, so auto-mode steps arrive on
//! their own and a stop or restart cancels them.

use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use gt_core::{NodeId, Position};
use gt_traverse::{Algorithm, Ticket};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::events::SessionEvent;
use crate::session::{EdgeSelection, GraphSummary, Session};

/// User actions, as forwarded to the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Add a node, at the given position or the next free grid slot.
    CreateNode(Option<Position>),
    CreateEdge(NodeId, NodeId),
    ToggleEdgeMode,
    SelectForEdge(NodeId),
    ClearGraph,
    Start { start: NodeId, algorithm: Algorithm },
    Advance,
    Stop,
    SetSpeed(u64),
    SetStepMode(bool),
    /// Emit a notice describing the graph and run state.
    Describe,
    Shutdown,
}

pub struct Player {
    commands: Sender<PlayerCommand>,
    handle: JoinHandle<Session>,
}

impl Player {
    /// Move `session` onto a worker thread. Events go to `events`.
    pub fn spawn(session: Session, events: Sender<SessionEvent>) -> Self {
        let (tx, rx) = channel();
        let handle = thread::spawn(move || run_loop(session, &rx, &events));
        Self {
            commands: tx,
            handle,
        }
    }

    pub fn send(&self, command: PlayerCommand) -> AppResult<()> {
        self.commands.send(command).map_err(|_| AppError::PlayerGone)
    }

    /// Stop the worker and take the session back.
    pub fn shutdown(self) -> AppResult<Session> {
        // The worker may already have exited on its own.
        let _ = self.commands.send(PlayerCommand::Shutdown);
        self.handle.join().map_err(|_| AppError::PlayerGone)
    }
}

fn run_loop(
    mut session: Session,
    commands: &Receiver<PlayerCommand>,
    events: &Sender<SessionEvent>,
) -> Session {
    let mut armed: Option<(Ticket, Instant)> = None;

    loop {
        let received = match session.pending_timer() {
            Some((ticket, delay)) => {
                let deadline = match armed {
                    Some((armed_ticket, deadline)) if armed_ticket == ticket => deadline,
                    _ => {
                        let deadline = Instant::now() + delay;
                        armed = Some((ticket, deadline));
                        deadline
                    }
                };
                let wait = deadline.saturating_duration_since(Instant::now());
                match commands.recv_timeout(wait) {
                    Ok(command) => Some(command),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => {
                armed = None;
                match commands.recv() {
                    Ok(command) => Some(command),
                    Err(_) => break,
                }
            }
        };

        let result = match received {
            Some(PlayerCommand::Shutdown) => break,
            Some(command) => handle(&mut session, command),
            None => match armed.take() {
                Some((ticket, _)) => session.on_timer(ticket),
                None => Ok(Vec::new()),
            },
        };

        let batch = result.unwrap_or_else(|e| {
            warn!(error = %e, "request rejected");
            vec![SessionEvent::warning(e.to_string())]
        });
        for event in batch {
            // A front-end that stopped listening is not an error for playback.
            let _ = events.send(event);
        }
    }

    debug!("player stopped");
    session
}

fn handle(session: &mut Session, command: PlayerCommand) -> AppResult<Vec<SessionEvent>> {
    match command {
        PlayerCommand::CreateNode(position) => {
            let node = match position {
                Some(position) => session.create_node(position)?,
                None => session.create_node_auto()?,
            };
            Ok(vec![SessionEvent::info(format!("Node {} added", node.id))])
        }
        PlayerCommand::CreateEdge(from, to) => {
            session.create_edge(from, to)?;
            Ok(vec![SessionEvent::info(format!("Edge {from} - {to} added"))])
        }
        PlayerCommand::ToggleEdgeMode => {
            let on = session.toggle_edge_mode()?;
            let message = if on {
                "Edge mode: click two nodes to connect them"
            } else {
                "Edge mode off"
            };
            Ok(vec![SessionEvent::info(message)])
        }
        PlayerCommand::SelectForEdge(id) => match session.select_for_edge(id)? {
            EdgeSelection::First(first) => Ok(vec![SessionEvent::info(format!(
                "Selected node {first}; pick a second node"
            ))]),
            EdgeSelection::Created(edge) => Ok(vec![SessionEvent::info(format!(
                "Edge {} - {} added",
                edge.from, edge.to
            ))]),
        },
        PlayerCommand::ClearGraph => {
            session.clear_graph()?;
            Ok(vec![SessionEvent::info("Graph cleared")])
        }
        PlayerCommand::Start { start, algorithm } => session.request_start(start, algorithm),
        PlayerCommand::Advance => session.request_advance(),
        PlayerCommand::Stop => Ok(session.request_stop()),
        PlayerCommand::SetSpeed(ms) => {
            session.set_speed(ms)?;
            Ok(vec![SessionEvent::info(format!("Speed: {ms} ms"))])
        }
        PlayerCommand::SetStepMode(on) => Ok(session.set_step_mode(on)),
        PlayerCommand::Describe => {
            let summary = session.summary();
            Ok(vec![SessionEvent::info(describe(&summary))])
        }
        PlayerCommand::Shutdown => Ok(Vec::new()),
    }
}

fn describe(summary: &GraphSummary) -> String {
    format!(
        "{} nodes, {} edges, {} | step mode {}, speed {} ms",
        summary.node_count,
        summary.edge_count,
        summary.state,
        if summary.step_mode { "on" } else { "off" },
        summary.speed_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn rejected_command_becomes_warning() {
        let (tx, rx) = channel();
        let player = Player::spawn(Session::default(), tx);
        player
            .send(PlayerCommand::Start {
                start: NodeId::from_index(0),
                algorithm: Algorithm::Bfs,
            })
            .unwrap();

        let event = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(event, SessionEvent::warning(AppError::EmptyGraph.to_string()));
        player.shutdown().unwrap();
    }

    #[test]
    fn shutdown_returns_session() {
        let (tx, _rx) = channel();
        let player = Player::spawn(Session::default(), tx);
        player
            .send(PlayerCommand::CreateNode(Some(Position::new(1.0, 2.0))))
            .unwrap();
        let session = player.shutdown().unwrap();
        assert_eq!(session.graph().node_count(), 1);
    }
}
