//! Aggregate run statistics.

/// Running totals for one simulation.
///
/// "Served" counts passengers at the moment they board, which is also when
/// their wait time is recorded.  "Delivered" counts them when they alight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimStats {
    /// Passengers admitted to a waiting queue.
    pub arrived:          u64,
    /// Passengers that boarded.
    pub served:           u64,
    /// Passengers that reached their destination.
    pub delivered:        u64,
    /// Arrivals dropped because their floors were invalid.
    pub rejected:         u64,
    /// Sum of wait ticks over all served passengers.
    pub total_wait_ticks: u64,
    /// Longest single wait.
    pub max_wait_ticks:   u64,
    /// Floors travelled by the cabin.
    pub distance:         u64,
    /// Ticks fully processed.
    pub ticks:            u64,
}

impl SimStats {
    pub(crate) fn record_boarding(&mut self, wait: u64) {
        self.served += 1;
        self.total_wait_ticks += wait;
        self.max_wait_ticks = self.max_wait_ticks.max(wait);
    }

    /// Mean wait in ticks per served passenger; `None` before anyone boards.
    pub fn average_wait(&self) -> Option<f64> {
        (self.served > 0).then(|| self.total_wait_ticks as f64 / self.served as f64)
    }

    /// Floors travelled per served passenger; `None` before anyone boards.
    pub fn distance_per_passenger(&self) -> Option<f64> {
        (self.served > 0).then(|| self.distance as f64 / self.served as f64)
    }
}
