//! Shared application service layer for graphtour.
//!
//! Routes user input (graph edits, start/advance/stop, playback settings) to
//! the graph store and traversal engine, validates it, and turns engine output
//! into events a front-end can render.

pub mod config;
pub mod error;
pub mod events;
pub mod player;
pub mod session;

// Re-export key types for convenience
pub use config::{MAX_SPEED_MS, PlaybackConfig, load_config};
pub use error::{AppError, AppResult};
pub use events::{Notice, NoticeLevel, SessionEvent};
pub use player::{Player, PlayerCommand};
pub use session::{EdgeMode, EdgeSelection, GraphSummary, Session};
