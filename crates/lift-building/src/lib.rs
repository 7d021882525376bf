//! `lift-building` — per-floor waiting queues.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`registry`]  | `WaitingRegistry` (`Vec<VecDeque<Passenger>>` by floor)   |
//! | [`building`]  | `Building` — validated floor count + its registry         |
//!
//! # Query semantics
//!
//! All "nearest" queries scan floors linearly so that ties resolve the same
//! way every run:
//!
//! ```text
//! nearest_waiting(f) = lowest-indexed floor minimising |floor - f|
//! nearest_above(f)   = smallest non-empty floor  > f
//! nearest_below(f)   = largest  non-empty floor  < f
//! ```

pub mod building;
pub mod registry;


pub use building::Building;
pub use registry::WaitingRegistry;
