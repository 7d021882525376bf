//! `lift-dispatch` — the dispatch decision engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`context`]     | `DispatchContext<'a>` — read-only registry + cabin view     |
//! | [`decision`]    | `Decision` — target floor and next direction state          |
//! | [`model`]       | `Dispatcher` trait                                          |
//! | [`nearest`]     | `Nearest` — distance-greedy policy                          |
//! | [`directional`] | `Directional` — sweep-then-reverse state machine            |
//! | [`policy`]      | `Dispatcher` for `Policy`, `select_target` entry point      |
//!
//! # Design notes
//!
//! Dispatching is a pure function of the waiting queues and the cabin.  It
//! never mutates either: the directional state transition is returned in the
//! [`Decision`] and applied by the caller.  That keeps every policy testable
//! with nothing more than a registry and a cabin built by hand.
//!
//! ```text
//! let decision = select_target(policy, &registry, &cabin);
//! cabin.direction = decision.direction;   // state transition
//! cabin.advance_toward(decision.target);  // motion, at most one floor
//! ```

pub mod context;
pub mod decision;
pub mod directional;
pub mod model;
pub mod nearest;
pub mod policy;

#[cfg(test)]
mod tests;

pub use context::DispatchContext;
pub use decision::Decision;
pub use directional::Directional;
pub use model::Dispatcher;
pub use nearest::Nearest;
pub use policy::select_target;
