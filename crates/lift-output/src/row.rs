//! Plain data row types written by output backends.

use lift_core::{Direction, Passenger, Tick};
use lift_sim::CabinSnapshot;

/// Cabin state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub floor:     u32,
    pub direction: Direction,
    pub onboard:   u32,
    /// Passengers waiting across all floors.
    pub waiting:   u64,
    /// Dispatcher target; `None` when the cabin had nowhere to go.
    pub target:    Option<u32>,
}

impl From<&CabinSnapshot> for TickSummaryRow {
    fn from(s: &CabinSnapshot) -> Self {
        Self {
            tick:      s.tick.0,
            floor:     s.floor.0,
            direction: s.direction,
            onboard:   s.onboard() as u32,
            waiting:   s.total_waiting() as u64,
            target:    s.target.map(|f| f.0),
        }
    }
}

/// One passenger boarding the cabin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardingRow {
    pub passenger_id: u32,
    pub start:        u32,
    pub destination:  u32,
    pub request_tick: u64,
    pub board_tick:   u64,
    pub wait_ticks:   u64,
}

impl BoardingRow {
    pub fn new(passenger: &Passenger, board_tick: Tick, wait_ticks: u64) -> Self {
        Self {
            passenger_id: passenger.id.0,
            start:        passenger.start.0,
            destination:  passenger.destination.0,
            request_tick: passenger.request_tick.0,
            board_tick:   board_tick.0,
            wait_ticks,
        }
    }
}
