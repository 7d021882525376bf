//! The `ArrivalSource` trait — the injectable passenger generator.

use lift_core::{Floor, Tick};

/// A trip request before it has been admitted to the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    pub start:       Floor,
    pub destination: Floor,
}

impl Arrival {
    #[inline]
    pub fn new(start: Floor, destination: Floor) -> Self {
        Self { start, destination }
    }
}

/// Produces the passengers that appear on each tick.
///
/// Called exactly once per tick, in tick order, from the simulation thread.
/// Implementations should be deterministic given their construction inputs
/// so that runs are reproducible.
pub trait ArrivalSource {
    /// Trips that begin at `tick` in a building with `total_floors` floors.
    fn arrivals(&mut self, tick: Tick, total_floors: u32) -> Vec<Arrival>;

    /// `true` once no later call can produce another trip.
    ///
    /// Open-ended sources keep the default.  The simulation stops when the
    /// source is exhausted and nobody is left waiting or riding.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// An [`ArrivalSource`] that never produces anyone.
///
/// Useful in tests that seed the building by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArrivals;

impl ArrivalSource for NoArrivals {
    fn arrivals(&mut self, _tick: Tick, _total_floors: u32) -> Vec<Arrival> {
        vec![]
    }

    fn is_exhausted(&self) -> bool {
        true
    }
}
