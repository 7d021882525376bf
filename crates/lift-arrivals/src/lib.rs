//! `lift-arrivals` — where passengers come from.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`source`]    | `Arrival`, `ArrivalSource` trait, `NoArrivals`                |
//! | [`random`]    | `RandomArrivals` — seeded Bernoulli traffic                   |
//! | [`scripted`]  | `ScriptedArrivals` (`BTreeMap<Tick, Vec<Arrival>>`)           |
//! | [`loader`]    | `load_arrivals_csv`, `load_arrivals_reader`                   |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`                            |
//!
//! Sources only describe trips (`start → destination`).  The simulation
//! assigns passenger ids and stamps the request tick when it admits them.

pub mod error;
pub mod loader;
pub mod random;
pub mod scripted;
pub mod source;


pub use error::{ArrivalError, ArrivalResult};
pub use loader::{load_arrivals_csv, load_arrivals_reader};
pub use random::RandomArrivals;
pub use scripted::ScriptedArrivals;
pub use source::{Arrival, ArrivalSource, NoArrivals};
