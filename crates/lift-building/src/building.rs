//! The building: a fixed floor count and the waiting queues it owns.

use lift_core::{Floor, LiftError, LiftResult, MAX_FLOORS, Passenger};

use crate::WaitingRegistry;

/// A building with `total_floors` floors.
///
/// Construction is the one place floor-count validation happens; once a
/// `Building` exists, every floor index below `total_floors` is valid.
#[derive(Debug, Clone)]
pub struct Building {
    total_floors: u32,
    /// Passengers waiting on each floor.
    pub waiting:  WaitingRegistry,
}

impl Building {
    /// # Errors
    ///
    /// [`LiftError::Config`] if `total_floors` is not within `2..=MAX_FLOORS`.
    pub fn new(total_floors: u32) -> LiftResult<Self> {
        if total_floors <= 1 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {total_floors}"
            )));
        }
        if total_floors > MAX_FLOORS {
            return Err(LiftError::Config(format!(
                "a building may have at most {MAX_FLOORS} floors, got {total_floors}"
            )));
        }
        Ok(Self {
            total_floors,
            waiting: WaitingRegistry::new(total_floors),
        })
    }

    #[inline]
    pub fn total_floors(&self) -> u32 {
        self.total_floors
    }

    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.total_floors - 1)
    }

    /// Check that `floor` exists in this building.
    pub fn check_floor(&self, floor: Floor) -> LiftResult<Floor> {
        if floor.within(self.total_floors) {
            Ok(floor)
        } else {
            Err(LiftError::FloorOutOfRange { floor, total_floors: self.total_floors })
        }
    }

    /// Validate both ends of the trip and queue the passenger at its start.
    pub fn admit(&mut self, passenger: Passenger) -> LiftResult<()> {
        self.check_floor(passenger.destination)?;
        self.waiting.enqueue(passenger)?;
        log::debug!(
            "{} waiting at {} for {}",
            passenger.id, passenger.start, passenger.destination
        );
        Ok(())
    }
}
