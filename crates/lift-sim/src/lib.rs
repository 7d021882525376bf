//! `lift-sim` — tick loop orchestrator for the lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! until served >= served_target, max_ticks, or nothing left to carry:
//!   ① Arrivals : new trips from the ArrivalSource join their floor's queue.
//!   ② Alight   : onboard passengers whose destination is this floor leave.
//!   ③ Board    : waiting passengers here board in arrival order until full;
//!                the rest stay queued.  Wait = now - request_tick.
//!   ④ Dispatch : Dispatcher::decide → Decision; apply its direction.
//!   ⑤ Move     : at most one floor toward the target; no target → Idle.
//!   ⑥ Observe  : stats, snapshot, observer hooks; advance the clock.
//! ```
//!
//! Everything runs on one thread; each tick completes before the next starts.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_config(SimConfig::default()).build()?;
//! let stats = sim.run(&mut NoopObserver);
//! println!("average wait: {:?}", stats.average_wait());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::CabinSnapshot;
pub use stats::SimStats;
