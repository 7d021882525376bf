//! `WaitingRegistry` — who is waiting on which floor, in arrival order.

use std::collections::VecDeque;

use lift_core::{Floor, LiftError, LiftResult, Passenger};

/// Per-floor FIFO queues of waiting passengers.
///
/// Indexed by `Floor`; always exactly `total_floors` queues long.  Insertion
/// order is arrival order and is never reshuffled, so boarding is fair.
#[derive(Debug, Clone)]
pub struct WaitingRegistry {
    queues: Vec<VecDeque<Passenger>>,
    /// Cached total passenger count for O(1) `len()`.
    total:  usize,
}

impl WaitingRegistry {
    /// Create empty queues for floors `0..total_floors`.
    pub fn new(total_floors: u32) -> Self {
        Self {
            queues: vec![VecDeque::new(); total_floors as usize],
            total:  0,
        }
    }

    pub fn total_floors(&self) -> u32 {
        self.queues.len() as u32
    }

    /// Append `passenger` to the back of the queue at its start floor.
    ///
    /// # Errors
    ///
    /// [`LiftError::FloorOutOfRange`] if the start floor is not in the
    /// building.  The registry is left unchanged.
    pub fn enqueue(&mut self, passenger: Passenger) -> LiftResult<()> {
        let total_floors = self.total_floors();
        let queue = self
            .queues
            .get_mut(passenger.start.index())
            .ok_or(LiftError::FloorOutOfRange { floor: passenger.start, total_floors })?;
        queue.push_back(passenger);
        self.total += 1;
        Ok(())
    }

    /// Snapshot copy of the passengers waiting at `floor`, oldest first.
    ///
    /// Returns an empty `Vec` for floors outside the building.
    pub fn peek_all(&self, floor: Floor) -> Vec<Passenger> {
        self.queues
            .get(floor.index())
            .map(|q| q.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of passengers waiting at `floor` (0 outside the building).
    pub fn waiting_at(&self, floor: Floor) -> usize {
        self.queues.get(floor.index()).map_or(0, VecDeque::len)
    }

    /// Waiting count for every floor, indexed by floor.
    pub fn counts(&self) -> Vec<usize> {
        self.queues.iter().map(VecDeque::len).collect()
    }

    /// Remove and return up to `max` passengers from the front of the queue at
    /// `floor`, preserving the order of those left behind.
    ///
    /// This is the boarding primitive: only passengers who actually fit are
    /// taken off the floor.
    pub fn board(&mut self, floor: Floor, max: usize) -> Vec<Passenger> {
        let Some(queue) = self.queues.get_mut(floor.index()) else {
            return Vec::new();
        };
        let n = max.min(queue.len());
        let boarded: Vec<Passenger> = queue.drain(..n).collect();
        self.total -= boarded.len();
        boarded
    }

    /// Drop every passenger waiting at `floor`.  No-op outside the building.
    ///
    /// Anyone removed this way is lost; boarding must go through
    /// [`board`][Self::board] instead.
    pub fn clear(&mut self, floor: Floor) {
        if let Some(queue) = self.queues.get_mut(floor.index()) {
            self.total -= queue.len();
            queue.clear();
        }
    }

    /// Closest floor (either direction) with anyone waiting.
    ///
    /// Ties go to the lowest floor index.
    pub fn nearest_waiting(&self, from: Floor) -> Option<Floor> {
        let mut nearest: Option<(u32, Floor)> = None;
        for floor in self.occupied_floors() {
            let d = floor.distance(from);
            // Strict `<` keeps the first (lowest) floor on ties.
            if nearest.is_none_or(|(best, _)| d < best) {
                nearest = Some((d, floor));
            }
        }
        nearest.map(|(_, floor)| floor)
    }

    /// Lowest floor strictly above `from` with anyone waiting.
    pub fn nearest_above(&self, from: Floor) -> Option<Floor> {
        let start = from.index() + 1;
        (start..self.queues.len())
            .find(|&i| !self.queues[i].is_empty())
            .map(|i| Floor(i as u32))
    }

    /// Highest floor strictly below `from` with anyone waiting.
    pub fn nearest_below(&self, from: Floor) -> Option<Floor> {
        let end = from.index().min(self.queues.len());
        (0..end)
            .rev()
            .find(|&i| !self.queues[i].is_empty())
            .map(|i| Floor(i as u32))
    }

    /// Total passengers waiting across all floors.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    fn occupied_floors(&self) -> impl Iterator<Item = Floor> + '_ {
        self.queues
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.is_empty())
            .map(|(i, _)| Floor(i as u32))
    }
}
