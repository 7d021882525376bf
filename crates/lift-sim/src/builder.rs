//! Fluent builder for constructing a [`Sim`].

use lift_arrivals::{ArrivalSource, RandomArrivals};
use lift_building::Building;
use lift_cabin::Cabin;
use lift_core::{Passenger, PassengerId, Policy, SimClock, SimConfig};
use lift_dispatch::Dispatcher;

use crate::{Sim, SimError, SimResult, SimStats};

/// Fluent builder for [`Sim<D, A>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: floors, capacity, start floor, stop conditions, …
/// - `D: Dispatcher`: the dispatch policy (a [`Policy`] value works)
/// - `A: ArrivalSource`: where passengers come from
///
/// # Optional inputs
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.seed_passengers(v)`    | Nobody waiting at tick 0    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, Policy::Nearest, NoArrivals)
///     .seed_passengers(vec![passenger])
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<D: Dispatcher, A: ArrivalSource> {
    config:     SimConfig,
    dispatcher: D,
    arrivals:   A,
    seeded:     Vec<Passenger>,
}

impl SimBuilder<Policy, RandomArrivals> {
    /// The standard setup: `config.policy` with seeded random traffic.
    pub fn from_config(config: SimConfig) -> Self {
        let arrivals = RandomArrivals::from_config(&config);
        let policy = config.policy;
        Self::new(config, policy, arrivals)
    }
}

impl<D: Dispatcher, A: ArrivalSource> SimBuilder<D, A> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, dispatcher: D, arrivals: A) -> Self {
        Self {
            config,
            dispatcher,
            arrivals,
            seeded: Vec::new(),
        }
    }

    /// Passengers already waiting when the simulation starts.
    ///
    /// Their ids must be unique; generated passengers are numbered after the
    /// highest seeded id.
    pub fn seed_passengers(mut self, passengers: Vec<Passenger>) -> Self {
        self.seeded = passengers;
        self
    }

    /// Validate the configuration, build the building and cabin, queue any
    /// seeded passengers, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<D, A>> {
        self.config.validate()?;

        let mut building = Building::new(self.config.total_floors)?;
        let cabin = Cabin::new(
            self.config.start_floor,
            self.config.capacity,
            self.config.total_floors,
        )?;

        let mut stats = SimStats::default();
        for passenger in &self.seeded {
            building
                .admit(*passenger)
                .map_err(|source| SimError::SeedRejected { id: passenger.id, source })?;
            stats.arrived += 1;
        }

        let next_id = self
            .seeded
            .iter()
            .map(|p| p.id.0 + 1)
            .max()
            .unwrap_or(0);

        Ok(Sim {
            clock:       SimClock::new(),
            config:      self.config,
            building,
            cabin,
            dispatcher:  self.dispatcher,
            arrivals:    self.arrivals,
            stats,
            next_id:     PassengerId(next_id),
            last_target: None,
        })
    }
}
