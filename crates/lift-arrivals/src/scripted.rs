//! `ScriptedArrivals` — a fixed, replayable passenger schedule.

use std::collections::BTreeMap;

use lift_core::{Floor, Tick};

use crate::{Arrival, ArrivalSource};

/// A priority queue mapping ticks → trips that begin at that tick.
///
/// Trips scheduled for the same tick are released in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedArrivals {
    inner: BTreeMap<Tick, Vec<Arrival>>,
    /// Cached total trip count for O(1) `len()`.
    total: usize,
}

impl ScriptedArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a trip from `start` to `destination` at `tick`.
    pub fn push(&mut self, tick: Tick, start: Floor, destination: Floor) {
        self.inner.entry(tick).or_default().push(Arrival::new(start, destination));
        self.total += 1;
    }

    /// Builder-style [`push`][Self::push].
    pub fn with(mut self, tick: Tick, start: Floor, destination: Floor) -> Self {
        self.push(tick, start, destination);
        self
    }

    /// Remove and return every trip scheduled at or before `tick`, oldest
    /// tick first.
    pub fn drain_until(&mut self, tick: Tick) -> Vec<Arrival> {
        let later = self.inner.split_off(&tick.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let trips: Vec<Arrival> = due.into_values().flatten().collect();
        self.total -= trips.len();
        trips
    }

    /// The earliest tick with at least one scheduled trip.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Trips not yet released.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl ArrivalSource for ScriptedArrivals {
    fn arrivals(&mut self, tick: Tick, _total_floors: u32) -> Vec<Arrival> {
        self.drain_until(tick)
    }

    fn is_exhausted(&self) -> bool {
        self.is_empty()
    }
}
