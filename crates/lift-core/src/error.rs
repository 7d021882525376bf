//! Simulator error type.
//!
//! Sub-crates define their own error enums and wrap `LiftError` as one
//! variant via `#[from]`, so validation failures raised here surface
//! unchanged at the call site.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiftError {
    #[error("{floor} is outside the building (floors 0..{total_floors})")]
    FloorOutOfRange { floor: Floor, total_floors: u32 },

    #[error("passenger trip starts and ends on {0}")]
    SameFloorTrip(Floor),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
