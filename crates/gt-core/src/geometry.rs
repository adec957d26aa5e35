//! Node placement. Positions only matter to renderers; traversal ignores them.

use crate::error::{GtError, GtResult};

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a position from user input, rejecting NaN and infinities.
    pub fn checked(x: f64, y: f64) -> GtResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "x")?,
            y: ensure_finite(y, "y")?,
        })
    }
}

fn ensure_finite(v: f64, what: &'static str) -> GtResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(GtError::NonFinite { what })
    }
}
