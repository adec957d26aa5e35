use gt_traverse::{RunSummary, Snapshot};
use serde::Serialize;

/// Output of the session, in the order a front-end should render it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// One traversal step to draw.
    Step(Snapshot),
    /// The run exhausted its frontier.
    Completed(RunSummary),
    /// The run was aborted.
    Stopped(RunSummary),
    /// A message for the status line.
    Notice(Notice),
}

impl SessionEvent {
    pub fn info(message: impl Into<String>) -> Self {
        SessionEvent::Notice(Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        })
    }

    pub fn warning(message: impl Into<String>) -> Self {
        SessionEvent::Notice(Notice {
            level: NoticeLevel::Warning,
            message: message.into(),
        })
    }

    /// True for the events that end a run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Completed(_) | SessionEvent::Stopped(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}
