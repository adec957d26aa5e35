//! Session-level scenarios: what a front-end sees for each user action.

use std::time::Duration;

use gt_core::{NodeId, Position};
use gt_app::{AppError, PlaybackConfig, Session, SessionEvent};
use gt_traverse::{Algorithm, Outcome, RunState};

fn id(i: u32) -> NodeId {
    NodeId::from_index(i)
}

fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::from_index).collect()
}

/// Diamond 0 - 1, 0 - 2, 1 - 3, 2 - 3.
fn diamond(step_mode: bool) -> Session {
    let mut session = Session::new(PlaybackConfig {
        step_mode,
        ..PlaybackConfig::default()
    });
    for i in 0..4 {
        session
            .create_node(Position::new(f64::from(i) * 100.0, 50.0))
            .unwrap();
    }
    for (a, b) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
        session.create_edge(id(a), id(b)).unwrap();
    }
    session
}

fn single_step(events: Vec<SessionEvent>) -> gt_traverse::Snapshot {
    match events.as_slice() {
        [SessionEvent::Step(snapshot)] => snapshot.clone(),
        other => panic!("expected one step event, got {other:?}"),
    }
}

#[test]
fn start_validates_before_touching_state() {
    let mut empty = Session::default();
    assert!(matches!(
        empty.request_start(id(0), Algorithm::Bfs),
        Err(AppError::EmptyGraph)
    ));

    let mut session = diamond(false);
    assert!(matches!(
        session.request_start(id(4), Algorithm::Bfs),
        Err(AppError::InvalidStartNode(_))
    ));
    assert_eq!(session.engine().state(), RunState::Idle);
    assert_eq!(session.engine().flags().visited_count(), 0);
}

#[test]
fn step_mode_walkthrough_bfs() {
    let mut session = diamond(true);

    let first = single_step(session.request_start(id(0), Algorithm::Bfs).unwrap());
    assert_eq!(first.current, id(0));
    assert_eq!(first.frontier, ids(&[1, 2]));
    assert_eq!(session.pending_timer(), None);

    let frontiers: Vec<Vec<NodeId>> = (0..3)
        .map(|_| single_step(session.request_advance().unwrap()).frontier)
        .collect();
    assert_eq!(frontiers, vec![ids(&[2, 3]), ids(&[3]), vec![]]);

    let events = session.request_advance().unwrap();
    match events.as_slice() {
        [SessionEvent::Completed(summary), SessionEvent::Notice(notice)] => {
            assert_eq!(summary.order, ids(&[0, 1, 2, 3]));
            assert_eq!(notice.message, "BFS completed! Order: 0 → 1 → 2 → 3");
        }
        other => panic!("unexpected events {other:?}"),
    }
    assert_eq!(session.engine().state(), RunState::Completed);
    assert!(matches!(
        session.request_advance(),
        Err(AppError::NoActiveRun)
    ));
}

#[test]
fn auto_mode_runs_on_tickets() {
    let mut session = diamond(false);
    session.set_speed(5).unwrap();

    let first = single_step(session.request_start(id(0), Algorithm::Dfs).unwrap());
    assert_eq!(first.current, id(0));

    let (ticket, delay) = session.pending_timer().unwrap();
    assert_eq!(delay, Duration::from_millis(5));
    assert!(matches!(session.request_advance(), Err(AppError::NotPaused)));

    let second = single_step(session.on_timer(ticket).unwrap());
    assert_eq!(second.current, id(1));
    // The ticket was consumed
    assert!(session.on_timer(ticket).unwrap().is_empty());

    let mut order = second.order.clone();
    while let Some((ticket, _)) = session.pending_timer() {
        for event in session.on_timer(ticket).unwrap() {
            if let SessionEvent::Completed(summary) = event {
                order = summary.order;
            }
        }
    }
    assert_eq!(order, ids(&[0, 1, 3, 2]));
}

#[test]
fn graph_is_locked_while_running() {
    let mut session = diamond(true);
    session.request_start(id(0), Algorithm::Bfs).unwrap();

    assert!(matches!(
        session.create_node(Position::default()),
        Err(AppError::RunActive)
    ));
    assert!(matches!(
        session.create_edge(id(0), id(3)),
        Err(AppError::RunActive)
    ));
    assert!(matches!(session.clear_graph(), Err(AppError::RunActive)));
    assert_eq!(session.graph().node_count(), 4);

    session.request_stop();
    session.create_edge(id(0), id(3)).unwrap();
    session.clear_graph().unwrap();
    assert!(session.graph().is_empty());
    assert_eq!(session.engine().state(), RunState::Idle);
}

#[test]
fn stop_reports_and_clears_flags() {
    let mut session = diamond(true);
    session.request_start(id(0), Algorithm::Bfs).unwrap();
    session.request_advance().unwrap();

    let events = session.request_stop();
    match events.as_slice() {
        [SessionEvent::Stopped(summary), SessionEvent::Notice(notice)] => {
            assert_eq!(summary.outcome, Outcome::Stopped);
            assert_eq!(summary.order, ids(&[0, 1]));
            assert_eq!(notice.message, "Traversal stopped");
        }
        other => panic!("unexpected events {other:?}"),
    }
    assert_eq!(session.engine().flags().visited_count(), 0);
    assert_eq!(session.engine().flags().current(), None);

    // Second stop is a no-op
    assert!(session.request_stop().is_empty());
}

#[test]
fn switching_step_mode_mid_run() {
    let mut session = diamond(false);
    session.request_start(id(0), Algorithm::Bfs).unwrap();
    assert!(session.pending_timer().is_some());

    let events = session.set_step_mode(true);
    assert_eq!(events, vec![SessionEvent::info("Step mode: ON")]);
    assert_eq!(session.pending_timer(), None);
    assert_eq!(single_step(session.request_advance().unwrap()).current, id(1));

    session.set_step_mode(false);
    let (ticket, _) = session.pending_timer().unwrap();
    assert_eq!(single_step(session.on_timer(ticket).unwrap()).current, id(2));
}

#[test]
fn restart_replaces_active_run() {
    let mut session = diamond(true);
    session.request_start(id(0), Algorithm::Bfs).unwrap();
    session.request_advance().unwrap();

    let first = single_step(session.request_start(id(3), Algorithm::Dfs).unwrap());
    assert_eq!(first.order, ids(&[3]));
    assert_eq!(first.flags.visited_count(), 1);
    assert_eq!(session.engine().algorithm(), Some(Algorithm::Dfs));
}

#[test]
fn start_node_text_round_trip() {
    let mut session = diamond(true);
    let start = session.parse_start(" 2 ").unwrap();
    let first = single_step(session.request_start(start, Algorithm::Bfs).unwrap());
    assert_eq!(first.current, id(2));

    assert!(matches!(
        session.parse_start("-1"),
        Err(AppError::InvalidStartNode(_))
    ));
}

#[test]
fn events_serialize_as_tagged_json() {
    let mut session = diamond(true);
    let events = session.request_start(id(0), Algorithm::Bfs).unwrap();
    let step = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(step["event"], "step");
    assert_eq!(step["step"], 1);
    assert_eq!(step["algorithm"], "bfs");
    assert_eq!(step["current"], 0);
    assert_eq!(step["frontier"], serde_json::json!([1, 2]));
    assert_eq!(step["order"], serde_json::json!([0]));
    assert_eq!(step["flags"]["0"]["visited"], true);

    let mut finished = Vec::new();
    while finished.is_empty() {
        finished = session
            .request_advance()
            .unwrap()
            .into_iter()
            .filter(SessionEvent::is_terminal)
            .collect();
    }
    let completed = serde_json::to_value(&finished[0]).unwrap();
    assert_eq!(completed["event"], "completed");
    assert_eq!(completed["outcome"], "completed");
    assert_eq!(completed["start"], 0);
    assert_eq!(completed["steps"], 4);
    assert_eq!(completed["order"], serde_json::json!([0, 1, 2, 3]));

    let notice = serde_json::to_value(SessionEvent::warning("Graph is empty")).unwrap();
    assert_eq!(
        notice,
        serde_json::json!({
            "event": "notice",
            "level": "warning",
            "message": "Graph is empty",
        })
    );
}
