//! Read-only per-tick view for renderers and writers.

use lift_core::{Direction, Floor, Tick};

/// The authoritative state at the end of one tick.
///
/// Built after motion, so `floor` is where the cabin ends the tick.  Owns its
/// data; holding on to a snapshot never borrows the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinSnapshot {
    pub tick:                 Tick,
    pub floor:                Floor,
    pub direction:            Direction,
    /// Target chosen by the dispatcher this tick.
    pub target:               Option<Floor>,
    /// Destinations of onboard passengers, in boarding order.
    pub onboard_destinations: Vec<Floor>,
    /// Waiting passengers per floor, indexed by floor.
    pub waiting:              Vec<usize>,
}

impl CabinSnapshot {
    #[inline]
    pub fn onboard(&self) -> usize {
        self.onboard_destinations.len()
    }

    pub fn total_waiting(&self) -> usize {
        self.waiting.iter().sum()
    }
}
