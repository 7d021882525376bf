//! Runtime policy selection.

use lift_building::WaitingRegistry;
use lift_cabin::Cabin;
use lift_core::Policy;

use crate::{Decision, DispatchContext, Directional, Dispatcher, Nearest};

impl Dispatcher for Policy {
    fn decide(&self, ctx: &DispatchContext<'_>) -> Decision {
        match self {
            Policy::Nearest     => Nearest.decide(ctx),
            Policy::Directional => Directional.decide(ctx),
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

/// Single entry point: run `policy` over the registry and cabin.
///
/// The cabin is not modified.  Apply `decision.direction` to the cabin to
/// commit the directional state transition.
pub fn select_target(policy: Policy, registry: &WaitingRegistry, cabin: &Cabin) -> Decision {
    let decision = policy.decide(&DispatchContext::new(registry, cabin));
    log::trace!(
        "{policy} at {} ({}): target {:?}, direction {}",
        cabin.floor(), cabin.direction, decision.target, decision.direction
    );
    decision
}
