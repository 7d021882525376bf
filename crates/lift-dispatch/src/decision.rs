//! The result of one dispatch call.

use lift_core::{Direction, Floor};

/// Where to head next and which directional state to be in.
///
/// `target == None` means there is nothing to do this tick.  `direction` is
/// the state the cabin should adopt; for the nearest policy it is simply the
/// cabin's current direction, unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub target:    Option<Floor>,
    pub direction: Direction,
}

impl Decision {
    #[inline]
    pub fn new(target: Option<Floor>, direction: Direction) -> Self {
        Self { target, direction }
    }

    /// No target; keep (or enter) `direction`.
    #[inline]
    pub fn none(direction: Direction) -> Self {
        Self { target: None, direction }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.target.is_none()
    }
}
