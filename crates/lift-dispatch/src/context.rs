//! Read-only state passed to every dispatch call.

use lift_building::WaitingRegistry;
use lift_cabin::Cabin;

/// What a [`Dispatcher`][crate::Dispatcher] may look at.
///
/// Both borrows are shared; no dispatcher can mutate the queues or the
/// cabin while a context is live.
#[derive(Clone, Copy)]
pub struct DispatchContext<'a> {
    /// Passengers waiting on each floor.
    pub registry: &'a WaitingRegistry,

    /// The cabin: floor, current direction, onboard passengers.
    pub cabin: &'a Cabin,
}

impl<'a> DispatchContext<'a> {
    #[inline]
    pub fn new(registry: &'a WaitingRegistry, cabin: &'a Cabin) -> Self {
        Self { registry, cabin }
    }
}
