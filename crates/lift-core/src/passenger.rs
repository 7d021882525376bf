//! The passenger request record.

use crate::{Floor, LiftError, LiftResult, PassengerId, Tick};

/// One trip request: who, from where, to where, and since when.
///
/// Immutable once created.  At any moment a passenger is held by exactly one
/// owner: the waiting queue of `start`, or the cabin.  Ownership moves by
/// value, so the two can never both hold the same record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:           PassengerId,
    pub start:        Floor,
    pub destination:  Floor,
    /// Tick at which the passenger started waiting.
    pub request_tick: Tick,
}

impl Passenger {
    /// Build a request, rejecting trips that start and end on the same floor.
    ///
    /// Range checks against the building happen when the passenger is
    /// enqueued; this type does not know how tall the building is.
    pub fn new(
        id:           PassengerId,
        start:        Floor,
        destination:  Floor,
        request_tick: Tick,
    ) -> LiftResult<Self> {
        if start == destination {
            return Err(LiftError::SameFloorTrip(start));
        }
        Ok(Self { id, start, destination, request_tick })
    }

    /// Ticks spent waiting if boarded at `now`.
    #[inline]
    pub fn wait_at(&self, now: Tick) -> u64 {
        now.since(self.request_tick)
    }
}
