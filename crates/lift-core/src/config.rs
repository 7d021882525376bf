//! Top-level simulation configuration.

use crate::{Floor, LiftError, LiftResult, Policy};

/// Largest building the simulator accepts.  One queue is allocated per floor.
pub const MAX_FLOORS: u32 = 10_000;

/// Everything needed to set up one simulation run.
///
/// Typically loaded from a TOML file by the application crate (with the
/// `serde` feature) and passed to the simulation builder.  Missing fields
/// take the values from [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of floors; floors are numbered `0..total_floors`.  Must be in
    /// `2..=MAX_FLOORS`.
    pub total_floors: u32,

    /// Maximum onboard passengers.  Must be > 0.
    pub capacity: u32,

    /// Floor the cabin starts on.
    pub start_floor: Floor,

    /// Dispatch algorithm.
    pub policy: Policy,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Passengers generated at tick 0 by the random arrival process.
    pub initial_passengers: u32,

    /// Probability of one new passenger arriving on each later tick.
    pub arrival_probability: f64,

    /// The run ends once this many passengers have boarded.  0 disables the
    /// target, in which case `max_ticks` must be set.
    pub served_target: u64,

    /// Hard stop after this many ticks, regardless of `served_target`.
    pub max_ticks: Option<u64>,

    /// Hand a cabin snapshot to the observer every N ticks.  0 disables.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_floors:            10,
            capacity:                4,
            start_floor:             Floor::GROUND,
            policy:                  Policy::Directional,
            seed:                    42,
            initial_passengers:      5,
            arrival_probability:     0.3,
            served_target:           1_000,
            max_ticks:               None,
            snapshot_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject configurations the simulation cannot run.
    pub fn validate(&self) -> LiftResult<()> {
        if self.total_floors <= 1 || self.total_floors > MAX_FLOORS {
            return Err(LiftError::Config(format!(
                "total_floors must be within 2..={MAX_FLOORS}, got {}",
                self.total_floors
            )));
        }
        if self.capacity == 0 {
            return Err(LiftError::Config("capacity must be greater than 0".into()));
        }
        if !self.start_floor.within(self.total_floors) {
            return Err(LiftError::FloorOutOfRange {
                floor:        self.start_floor,
                total_floors: self.total_floors,
            });
        }
        if !(0.0..=1.0).contains(&self.arrival_probability) {
            return Err(LiftError::Config(format!(
                "arrival_probability must be within [0, 1], got {}",
                self.arrival_probability
            )));
        }
        if self.served_target == 0 && self.max_ticks.is_none() {
            return Err(LiftError::Config(
                "served_target is 0 and max_ticks is unset: the run would never end".into(),
            ));
        }
        Ok(())
    }
}
