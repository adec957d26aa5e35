//! Terminal output for session events.

use gt_app::{AppResult, NoticeLevel, SessionEvent};
use gt_core::NodeId;
use gt_traverse::Snapshot;

pub fn print_event(event: &SessionEvent, json: bool) -> AppResult<()> {
    if json {
        let line = serde_json::to_string(event).map_err(std::io::Error::from)?;
        println!("{line}");
        return Ok(());
    }

    match event {
        SessionEvent::Step(snapshot) => println!("{}", describe_step(snapshot)),
        // The completion message arrives as a notice right after.
        SessionEvent::Completed(_) => {}
        SessionEvent::Stopped(summary) => println!("{summary}"),
        SessionEvent::Notice(notice) => match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Warning => println!("! {}", notice.message),
        },
    }
    Ok(())
}

/// One line per step, e.g. `Step 2: visit 1 | Queue: [2, 3] | Order: 0 → 1`.
pub fn describe_step(snapshot: &Snapshot) -> String {
    format!(
        "Step {}: visit {} | {}: [{}] | Order: {}",
        snapshot.step,
        snapshot.current,
        snapshot.algorithm.frontier_label(),
        join(&snapshot.frontier, ", "),
        join(&snapshot.order, " → "),
    )
}

fn join(ids: &[NodeId], sep: &str) -> String {
    ids.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}
