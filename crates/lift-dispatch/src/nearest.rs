//! The distance-greedy ("basic") policy.

use crate::{Decision, DispatchContext, Dispatcher};

/// Head for the nearest onboard destination; with nobody onboard, head for
/// the nearest floor where someone is waiting.
///
/// Onboard passengers are consulted first, so they win over waiting
/// passengers even when a waiting floor is closer.  Direction is left to
/// the motion step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nearest;

impl Dispatcher for Nearest {
    fn decide(&self, ctx: &DispatchContext<'_>) -> Decision {
        let cabin = ctx.cabin;
        let target = cabin
            .nearest_destination()
            .or_else(|| ctx.registry.nearest_waiting(cabin.floor()));
        Decision::new(target, cabin.direction)
    }

    fn name(&self) -> &'static str {
        "nearest"
    }
}
