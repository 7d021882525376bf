//! Seeded random passenger traffic.

use lift_core::{Floor, SimConfig, SimRng, Tick};

use crate::{Arrival, ArrivalSource};

/// Random traffic with a burst at tick 0.
///
/// - **Tick 0**: `initial` passengers, each with a start and destination
///   drawn uniformly; the destination is redrawn until it differs from the
///   start.
/// - **Later ticks**: one passenger with probability `probability`.  A
///   destination equal to the start is bumped to the next floor up, wrapping
///   from the top floor to the ground floor.
pub struct RandomArrivals {
    rng:         SimRng,
    initial:     u32,
    probability: f64,
    /// Set once the tick-0 burst has been emitted.
    burst_done:  bool,
}

impl RandomArrivals {
    pub fn new(seed: u64, initial: u32, probability: f64) -> Self {
        Self {
            rng: SimRng::new(seed),
            initial,
            probability,
            burst_done: false,
        }
    }

    /// Build from the seed and traffic settings in `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.seed, config.initial_passengers, config.arrival_probability)
    }

    fn initial_trip(&mut self, total_floors: u32) -> Arrival {
        let start = self.rng.gen_range(0..total_floors);
        let mut dest = self.rng.gen_range(0..total_floors);
        while dest == start {
            dest = self.rng.gen_range(0..total_floors);
        }
        Arrival::new(Floor(start), Floor(dest))
    }

    fn later_trip(&mut self, total_floors: u32) -> Arrival {
        let start = self.rng.gen_range(0..total_floors);
        let mut dest = self.rng.gen_range(0..total_floors);
        if dest == start {
            dest = (start + 1) % total_floors;
        }
        Arrival::new(Floor(start), Floor(dest))
    }
}

impl ArrivalSource for RandomArrivals {
    fn arrivals(&mut self, tick: Tick, total_floors: u32) -> Vec<Arrival> {
        // A one-floor building has no valid trips.
        if total_floors < 2 {
            return vec![];
        }
        if tick == Tick::ZERO {
            self.burst_done = true;
            return (0..self.initial).map(|_| self.initial_trip(total_floors)).collect();
        }
        if self.rng.gen_bool(self.probability) {
            vec![self.later_trip(total_floors)]
        } else {
            vec![]
        }
    }

    /// With zero per-tick probability, nothing follows the tick-0 burst.
    fn is_exhausted(&self) -> bool {
        self.burst_done && self.probability <= 0.0
    }
}
