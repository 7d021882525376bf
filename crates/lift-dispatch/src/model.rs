//! The `Dispatcher` trait — the seam between the tick loop and the policy.

use crate::{Decision, DispatchContext};

/// A dispatch policy.
///
/// Implementations must be deterministic: the same context always produces
/// the same decision.  They must also never fail on a context built from a
/// valid building and cabin; "nothing to do" is expressed as a `None`
/// target, not an error.
///
/// # Example
///
/// ```rust,ignore
/// struct GroundFloorOnly;
///
/// impl Dispatcher for GroundFloorOnly {
///     fn decide(&self, ctx: &DispatchContext<'_>) -> Decision {
///         Decision::new(Some(Floor::GROUND), ctx.cabin.direction)
///     }
/// }
/// ```
pub trait Dispatcher {
    /// Choose the next target floor and directional state.
    fn decide(&self, ctx: &DispatchContext<'_>) -> Decision;

    /// Short human-readable name for reports.
    fn name(&self) -> &'static str {
        "custom"
    }
}
