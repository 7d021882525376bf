//! Simulation observer trait for progress reporting and data collection.

use lift_core::{Passenger, Tick};

use crate::{CabinSnapshot, SimStats};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Observers receive copies or shared
/// references only; they cannot change the simulation.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: served {}", stats.served);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A new passenger joined a waiting queue.
    fn on_arrival(&mut self, _tick: Tick, _passenger: &Passenger) {}

    /// A passenger boarded after waiting `wait_ticks`.
    fn on_board(&mut self, _tick: Tick, _passenger: &Passenger, _wait_ticks: u64) {}

    /// A passenger reached their destination and left the cabin.
    fn on_alight(&mut self, _tick: Tick, _passenger: &Passenger) {}

    /// Called at the end of each tick with the running totals.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &SimStats) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`).
    fn on_snapshot(&mut self, _snapshot: &CabinSnapshot) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
