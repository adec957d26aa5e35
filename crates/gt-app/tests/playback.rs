//! Threaded playback through `Player`.

use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use gt_app::{AppError, NoticeLevel, PlaybackConfig, Player, PlayerCommand, Session, SessionEvent};
use gt_core::{NodeId, Position};
use gt_traverse::{Algorithm, Outcome};

const WAIT: Duration = Duration::from_secs(5);

fn id(i: u32) -> NodeId {
    NodeId::from_index(i)
}

fn path_session(n: u32, speed_ms: u64) -> Session {
    let mut session = Session::new(PlaybackConfig {
        speed_ms,
        ..PlaybackConfig::default()
    });
    for i in 0..n {
        session
            .create_node(Position::new(f64::from(i) * 60.0, 0.0))
            .unwrap();
    }
    for i in 1..n {
        session.create_edge(id(i - 1), id(i)).unwrap();
    }
    session
}

fn next_event(rx: &Receiver<SessionEvent>) -> SessionEvent {
    rx.recv_timeout(WAIT).expect("player went quiet")
}

#[test]
fn auto_run_completes_on_its_own() {
    let (tx, rx) = channel();
    let player = Player::spawn(path_session(5, 1), tx);
    player
        .send(PlayerCommand::Start {
            start: id(0),
            algorithm: Algorithm::Bfs,
        })
        .unwrap();

    let mut steps = 0;
    let summary = loop {
        match next_event(&rx) {
            SessionEvent::Step(_) => steps += 1,
            SessionEvent::Completed(summary) => break summary,
            other => panic!("unexpected event {other:?}"),
        }
    };
    assert_eq!(steps, 5);
    assert_eq!(summary.order, (0..5).map(id).collect::<Vec<_>>());

    let session = player.shutdown().unwrap();
    assert!(session.engine().state().is_terminal());
}

#[test]
fn stop_cancels_pending_step() {
    let (tx, rx) = channel();
    let player = Player::spawn(path_session(3, 60_000), tx);
    player
        .send(PlayerCommand::Start {
            start: id(1),
            algorithm: Algorithm::Dfs,
        })
        .unwrap();
    assert!(matches!(next_event(&rx), SessionEvent::Step(_)));

    player.send(PlayerCommand::Stop).unwrap();
    match next_event(&rx) {
        SessionEvent::Stopped(summary) => {
            assert_eq!(summary.outcome, Outcome::Stopped);
            assert_eq!(summary.order, vec![id(1)]);
        }
        other => panic!("expected stop, got {other:?}"),
    }
    assert_eq!(next_event(&rx), SessionEvent::info("Traversal stopped"));
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    let session = player.shutdown().unwrap();
    assert_eq!(session.engine().flags().visited_count(), 0);
}

#[test]
fn manual_steps_through_player() {
    let (tx, rx) = channel();
    let player = Player::spawn(path_session(2, 800), tx);
    player.send(PlayerCommand::SetStepMode(true)).unwrap();
    assert_eq!(next_event(&rx), SessionEvent::info("Step mode: ON"));

    player
        .send(PlayerCommand::Start {
            start: id(0),
            algorithm: Algorithm::Bfs,
        })
        .unwrap();
    assert!(matches!(next_event(&rx), SessionEvent::Step(_)));
    // Nothing arrives without an advance
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

    player.send(PlayerCommand::Advance).unwrap();
    assert!(matches!(next_event(&rx), SessionEvent::Step(_)));
    player.send(PlayerCommand::Advance).unwrap();
    assert!(next_event(&rx).is_terminal());

    player.shutdown().unwrap();
}

#[test]
fn show_reports_counts_and_playback_settings() {
    let (tx, rx) = channel();
    let player = Player::spawn(path_session(3, 250), tx);
    player.send(PlayerCommand::Describe).unwrap();

    assert_eq!(
        next_event(&rx),
        SessionEvent::info("3 nodes, 2 edges, idle | step mode off, speed 250 ms")
    );
    let session = player.shutdown().unwrap();
    assert_eq!(session.graph().node_count(), 3);
}

#[test]
fn auto_placed_nodes_survive_rejected_clear() {
    let (tx, rx) = channel();
    let player = Player::spawn(Session::default(), tx);
    player.send(PlayerCommand::SetStepMode(true)).unwrap();
    player.send(PlayerCommand::CreateNode(None)).unwrap();
    player.send(PlayerCommand::CreateNode(None)).unwrap();
    player
        .send(PlayerCommand::Start {
            start: id(0),
            algorithm: Algorithm::Bfs,
        })
        .unwrap();
    player.send(PlayerCommand::ClearGraph).unwrap();
    player.send(PlayerCommand::Stop).unwrap();
    player.send(PlayerCommand::CreateNode(None)).unwrap();

    let session = player.shutdown().unwrap();
    let warnings: Vec<SessionEvent> = rx
        .try_iter()
        .filter(|e| matches!(e, SessionEvent::Notice(n) if n.level == NoticeLevel::Warning))
        .collect();
    assert_eq!(warnings, vec![SessionEvent::warning(AppError::RunActive.to_string())]);

    let nodes = session.graph().nodes();
    assert_eq!(nodes.len(), 3);
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            assert_ne!(a.position, b.position);
        }
    }
}
