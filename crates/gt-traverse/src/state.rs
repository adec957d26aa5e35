//! Run lifecycle and the engine's single pending continuation.

use core::fmt;
use std::time::Duration;

use serde::Serialize;

/// Lifecycle of a traversal run.
///
/// `Idle` → `RunningAuto` ⇄ `RunningPaused` → `Completed` | `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run has been started.
    #[default]
    Idle,
    /// Steps fire when the scheduled timer elapses.
    RunningAuto,
    /// Steps fire only on an explicit advance.
    RunningPaused,
    /// The frontier ran dry.
    Completed,
    /// Aborted by `stop()`.
    Stopped,
}

impl RunState {
    pub fn is_active(self) -> bool {
        matches!(self, RunState::RunningAuto | RunState::RunningPaused)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunState::Completed | RunState::Stopped)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::RunningAuto => "running (auto)",
            RunState::RunningPaused => "running (paused)",
            RunState::Completed => "completed",
            RunState::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Identifies one scheduled timer. A timer whose ticket no longer matches the
/// engine's pending continuation is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub(crate) u64);

/// What has to happen before the next step may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// Auto mode: fire `on_timer(ticket)` once `delay` has elapsed.
    Timer { ticket: Ticket, delay: Duration },
    /// Paused mode: wait for `advance()`, with no timeout.
    Advance,
}
