//! `lift-core` — foundational types for the `lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `Floor`, `PassengerId`                                |
//! | [`passenger`]   | `Passenger` request record                            |
//! | [`direction`]   | `Direction` (cabin state), `Policy` (dispatch choice) |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig` and its validation                        |
//! | [`rng`]         | `SimRng` (seedable passenger-generation source)       |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (TOML config) |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MAX_FLOORS, SimConfig};
pub use direction::{Direction, Policy};
pub use error::{LiftError, LiftResult};
pub use ids::{Floor, PassengerId};
pub use passenger::Passenger;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
