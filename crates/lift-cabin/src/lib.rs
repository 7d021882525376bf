//! `lift-cabin` — the elevator car.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`cabin`]  | `Cabin` — floor, direction, onboard set, capacity            |
//!
//! # Motion model
//!
//! The cabin moves at most one floor per tick.  Travel cost is uniform: every
//! floor step counts as one unit of distance.

pub mod cabin;


pub use cabin::Cabin;
