//! The directional (sweep) policy.
//!
//! # State machine
//!
//! | State | Target                                                  | Nothing ahead     |
//! |-------|---------------------------------------------------------|-------------------|
//! | Idle  | nearest waiting above, else below, else onboard dest    | stay `Idle`       |
//! | Up    | `min(nearest waiting above, lowest onboard dest above)` | reverse to `Down` |
//! | Down  | `max(nearest waiting below, highest onboard dest below)`| reverse to `Up`   |
//!
//! On reversal the target is the first waiting floor in the new direction,
//! else the first onboard destination in the new direction.  If both are
//! absent the direction still flips and the target is `None`.

use lift_core::{Direction, Floor};

use crate::{Decision, DispatchContext, Dispatcher};

/// Keep travelling in the current direction while there is anything ahead;
/// reverse only when the sweep is exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directional;

impl Dispatcher for Directional {
    fn decide(&self, ctx: &DispatchContext<'_>) -> Decision {
        match ctx.cabin.direction {
            Direction::Idle => from_idle(ctx),
            dir => match closest_ahead(ctx, dir) {
                Some(floor) => Decision::new(Some(floor), dir),
                None        => reverse(ctx, dir.reversed()),
            },
        }
    }

    fn name(&self) -> &'static str {
        "directional"
    }
}

/// Leave the idle state: waiting passengers above take precedence over those
/// below.  With nobody waiting, onboard destinations are used the same way,
/// so a passenger who boarded an idle cabin is still carried.
fn from_idle(ctx: &DispatchContext<'_>) -> Decision {
    let here = ctx.cabin.floor();
    let registry = ctx.registry;
    let cabin = ctx.cabin;
    if let Some(up) = registry.nearest_above(here) {
        Decision::new(Some(up), Direction::Up)
    } else if let Some(down) = registry.nearest_below(here) {
        Decision::new(Some(down), Direction::Down)
    } else if let Some(up) = cabin.nearest_destination_above() {
        Decision::new(Some(up), Direction::Up)
    } else if let Some(down) = cabin.nearest_destination_below() {
        Decision::new(Some(down), Direction::Down)
    } else {
        Decision::none(Direction::Idle)
    }
}

/// The first stop in `dir`: whichever of the nearest waiting floor and the
/// nearest onboard destination comes first along the sweep.
fn closest_ahead(ctx: &DispatchContext<'_>, dir: Direction) -> Option<Floor> {
    let here = ctx.cabin.floor();
    let (waiting, onboard) = match dir {
        Direction::Up => (
            ctx.registry.nearest_above(here),
            ctx.cabin.nearest_destination_above(),
        ),
        Direction::Down => (
            ctx.registry.nearest_below(here),
            ctx.cabin.nearest_destination_below(),
        ),
        Direction::Idle => return None,
    };
    match (waiting, onboard) {
        (Some(w), Some(d)) if dir == Direction::Up => Some(w.min(d)),
        (Some(w), Some(d))                         => Some(w.max(d)),
        (w, d)                                     => w.or(d),
    }
}

/// Flip to `new_dir` and pick the first stop that way.  Waiting passengers
/// are preferred over onboard destinations here, not merged.
fn reverse(ctx: &DispatchContext<'_>, new_dir: Direction) -> Decision {
    let here = ctx.cabin.floor();
    let target = match new_dir {
        Direction::Up => ctx
            .registry
            .nearest_above(here)
            .or_else(|| ctx.cabin.nearest_destination_above()),
        _ => ctx
            .registry
            .nearest_below(here)
            .or_else(|| ctx.cabin.nearest_destination_below()),
    };
    log::debug!(
        "sweep exhausted at {here}; reversing to {new_dir}, target {target:?}"
    );
    Decision::new(target, new_dir)
}
