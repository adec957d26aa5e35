//! gt-core: stable foundation for graphtour.
//!
//! Contains:
//! - ids (compact node identifiers)
//! - geometry (presentation-only node positions)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GtError, GtResult};
pub use geometry::Position;
pub use ids::NodeId;
