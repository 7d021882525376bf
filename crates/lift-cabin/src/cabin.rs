//! The `Cabin` — mutable elevator state.

use lift_core::{Direction, Floor, LiftError, LiftResult, Passenger};

/// The elevator car.
///
/// Invariants upheld by every method:
///
/// - `floor < total_floors`
/// - `onboard.len() <= capacity`
///
/// `onboard` is kept in boarding order; queries that break ties by
/// iteration order therefore prefer whoever boarded first.
#[derive(Debug, Clone)]
pub struct Cabin {
    floor:        Floor,
    /// Current sweep state.  The dispatcher proposes a new value each tick;
    /// the simulation applies it, then [`advance_toward`][Self::advance_toward]
    /// sets it from the actual move.
    pub direction: Direction,
    onboard:      Vec<Passenger>,
    capacity:     usize,
    total_floors: u32,
}

impl Cabin {
    /// Place an idle, empty cabin at `start`.
    ///
    /// # Errors
    ///
    /// - [`LiftError::Config`] if `capacity == 0`.
    /// - [`LiftError::FloorOutOfRange`] if `start` is not in the building.
    pub fn new(start: Floor, capacity: u32, total_floors: u32) -> LiftResult<Self> {
        if capacity == 0 {
            return Err(LiftError::Config("cabin capacity must be greater than 0".into()));
        }
        if !start.within(total_floors) {
            return Err(LiftError::FloorOutOfRange { floor: start, total_floors });
        }
        Ok(Self {
            floor:        start,
            direction:    Direction::Idle,
            onboard:      Vec::with_capacity(capacity as usize),
            capacity:     capacity as usize,
            total_floors,
        })
    }

    // ── State accessors ───────────────────────────────────────────────────

    #[inline]
    pub fn floor(&self) -> Floor {
        self.floor
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Passengers currently inside, in boarding order.
    #[inline]
    pub fn onboard(&self) -> &[Passenger] {
        &self.onboard
    }

    #[inline]
    pub fn free_seats(&self) -> usize {
        self.capacity - self.onboard.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.onboard.len() >= self.capacity
    }

    // ── Onboard destination queries ───────────────────────────────────────

    /// Onboard destination closest to the current floor.
    ///
    /// Ties keep the first passenger in boarding order.
    pub fn nearest_destination(&self) -> Option<Floor> {
        let mut nearest: Option<(u32, Floor)> = None;
        for p in &self.onboard {
            let d = p.destination.distance(self.floor);
            if nearest.is_none_or(|(best, _)| d < best) {
                nearest = Some((d, p.destination));
            }
        }
        nearest.map(|(_, floor)| floor)
    }

    /// Lowest onboard destination strictly above the current floor.
    pub fn nearest_destination_above(&self) -> Option<Floor> {
        self.onboard
            .iter()
            .map(|p| p.destination)
            .filter(|&d| d > self.floor)
            .min()
    }

    /// Highest onboard destination strictly below the current floor.
    pub fn nearest_destination_below(&self) -> Option<Floor> {
        self.onboard
            .iter()
            .map(|p| p.destination)
            .filter(|&d| d < self.floor)
            .max()
    }

    // ── Boarding and alighting ────────────────────────────────────────────

    /// Let off everyone whose destination is the current floor.
    ///
    /// Returns the alighted passengers in boarding order.  Calling it again
    /// without moving returns an empty `Vec`.
    pub fn drop_off_arrivals(&mut self) -> Vec<Passenger> {
        let here = self.floor;
        let (alighted, staying): (Vec<Passenger>, Vec<Passenger>) = self
            .onboard
            .drain(..)
            .partition(|p| p.destination == here);
        self.onboard = staying;
        alighted
    }

    /// Take `passenger` on board, or hand it back if the cabin is full.
    pub fn take_on(&mut self, passenger: Passenger) -> Result<(), Passenger> {
        if self.is_full() {
            return Err(passenger);
        }
        self.onboard.push(passenger);
        Ok(())
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Move at most one floor toward `target` and set `direction` from the
    /// move.
    ///
    /// | target            | effect                       |
    /// |-------------------|------------------------------|
    /// | above             | floor + 1, direction `Up`    |
    /// | below             | floor − 1, direction `Down`  |
    /// | current floor     | no move, direction unchanged |
    /// | `None`            | no move, direction `Idle`    |
    ///
    /// Returns the number of floors travelled (0 or 1).  Targets outside the
    /// building are clamped to the top floor.
    pub fn advance_toward(&mut self, target: Option<Floor>) -> u32 {
        let Some(target) = target else {
            self.direction = Direction::Idle;
            return 0;
        };
        let target = target.min(Floor(self.total_floors - 1));

        if target > self.floor {
            self.floor = self.floor.up();
            self.direction = Direction::Up;
            1
        } else if target < self.floor {
            // target < floor, so floor > 0.
            self.floor = Floor(self.floor.0 - 1);
            self.direction = Direction::Down;
            1
        } else {
            0
        }
    }
}
