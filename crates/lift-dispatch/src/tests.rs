//! Unit tests for lift-dispatch.

use lift_building::WaitingRegistry;
use lift_cabin::Cabin;
use lift_core::{Direction, Floor, Passenger, PassengerId, Policy, Tick};

use crate::{Decision, select_target};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn trip(id: u32, start: u32, dest: u32) -> Passenger {
    Passenger::new(PassengerId(id), Floor(start), Floor(dest), Tick(0)).unwrap()
}

/// Ten-floor registry with one passenger waiting on each of `floors`.
fn waiting(floors: &[u32]) -> WaitingRegistry {
    let mut reg = WaitingRegistry::new(10);
    for (i, &f) in floors.iter().enumerate() {
        let dest = if f == 0 { 1 } else { 0 };
        reg.enqueue(trip(100 + i as u32, f, dest)).unwrap();
    }
    reg
}

/// Cabin at `floor` in state `dir` carrying passengers bound for `dests`.
fn cabin(floor: u32, dir: Direction, dests: &[u32]) -> Cabin {
    let mut c = Cabin::new(Floor(floor), 4, 10).unwrap();
    c.direction = dir;
    for (i, &d) in dests.iter().enumerate() {
        c.take_on(trip(i as u32, if d == floor { d + 1 } else { floor }, d)).unwrap();
    }
    c
}

fn directional(reg: &WaitingRegistry, c: &Cabin) -> Decision {
    select_target(Policy::Directional, reg, c)
}

fn nearest(reg: &WaitingRegistry, c: &Cabin) -> Decision {
    select_target(Policy::Nearest, reg, c)
}

// ── Nearest policy ────────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest_policy {
    use super::*;

    #[test]
    fn nothing_to_do() {
        let d = nearest(&waiting(&[]), &cabin(4, Direction::Idle, &[]));
        assert_eq!(d.target, None);
        assert!(d.is_idle());
    }

    #[test]
    fn goes_to_nearest_waiting_floor() {
        let d = nearest(&waiting(&[1, 6]), &cabin(4, Direction::Idle, &[]));
        assert_eq!(d.target, Some(Floor(6)));
    }

    #[test]
    fn waiting_tie_goes_low() {
        let d = nearest(&waiting(&[2, 6]), &cabin(4, Direction::Idle, &[]));
        assert_eq!(d.target, Some(Floor(2)));
    }

    #[test]
    fn onboard_destination_beats_closer_waiting_floor() {
        let d = nearest(&waiting(&[5]), &cabin(4, Direction::Up, &[9]));
        assert_eq!(d.target, Some(Floor(9)));
    }

    #[test]
    fn nearest_onboard_destination_wins() {
        let d = nearest(&waiting(&[]), &cabin(4, Direction::Up, &[9, 2, 7]));
        assert_eq!(d.target, Some(Floor(2)));
    }

    #[test]
    fn direction_is_left_alone() {
        let d = nearest(&waiting(&[8]), &cabin(4, Direction::Down, &[]));
        assert_eq!(d.direction, Direction::Down);
    }
}

// ── Directional policy ────────────────────────────────────────────────────────

#[cfg(test)]
mod directional_policy {
    use super::*;

    #[test]
    fn idle_with_waiting_above_goes_up() {
        let d = directional(&waiting(&[7]), &cabin(3, Direction::Idle, &[]));
        assert_eq!(d, Decision::new(Some(Floor(7)), Direction::Up));
    }

    #[test]
    fn idle_prefers_above_over_closer_below() {
        let d = directional(&waiting(&[2, 9]), &cabin(3, Direction::Idle, &[]));
        assert_eq!(d, Decision::new(Some(Floor(9)), Direction::Up));
    }

    #[test]
    fn idle_with_waiting_below_goes_down() {
        let d = directional(&waiting(&[1]), &cabin(3, Direction::Idle, &[]));
        assert_eq!(d, Decision::new(Some(Floor(1)), Direction::Down));
    }

    #[test]
    fn idle_with_nothing_stays_idle() {
        let d = directional(&waiting(&[]), &cabin(3, Direction::Idle, &[]));
        assert_eq!(d, Decision::none(Direction::Idle));
    }

    #[test]
    fn idle_ignores_only_waiting_at_current_floor() {
        let d = directional(&waiting(&[3]), &cabin(3, Direction::Idle, &[]));
        assert_eq!(d, Decision::none(Direction::Idle));
    }

    #[test]
    fn idle_with_only_onboard_heads_for_destination() {
        let d = directional(&waiting(&[]), &cabin(0, Direction::Idle, &[5]));
        assert_eq!(d, Decision::new(Some(Floor(5)), Direction::Up));

        let d = directional(&waiting(&[]), &cabin(6, Direction::Idle, &[2]));
        assert_eq!(d, Decision::new(Some(Floor(2)), Direction::Down));
    }

    #[test]
    fn idle_prefers_waiting_over_onboard() {
        let d = directional(&waiting(&[1]), &cabin(4, Direction::Idle, &[8]));
        assert_eq!(d, Decision::new(Some(Floor(1)), Direction::Down));
    }

    #[test]
    fn up_takes_closer_of_waiting_and_onboard() {
        let d = directional(&waiting(&[6]), &cabin(5, Direction::Up, &[9]));
        assert_eq!(d, Decision::new(Some(Floor(6)), Direction::Up));

        let d = directional(&waiting(&[8]), &cabin(5, Direction::Up, &[7]));
        assert_eq!(d, Decision::new(Some(Floor(7)), Direction::Up));
    }

    #[test]
    fn up_with_only_onboard_above() {
        let d = directional(&waiting(&[1]), &cabin(5, Direction::Up, &[8]));
        assert_eq!(d, Decision::new(Some(Floor(8)), Direction::Up));
    }

    #[test]
    fn up_ignores_waiting_below_while_anything_is_above() {
        let d = directional(&waiting(&[4, 9]), &cabin(5, Direction::Up, &[]));
        assert_eq!(d, Decision::new(Some(Floor(9)), Direction::Up));
    }

    #[test]
    fn up_exhausted_reverses_to_waiting_below() {
        let d = directional(&waiting(&[2]), &cabin(9, Direction::Up, &[]));
        assert_eq!(d, Decision::new(Some(Floor(2)), Direction::Down));
    }

    #[test]
    fn reversal_prefers_waiting_over_onboard() {
        let d = directional(&waiting(&[2]), &cabin(9, Direction::Up, &[5]));
        assert_eq!(d, Decision::new(Some(Floor(2)), Direction::Down));
    }

    #[test]
    fn reversal_falls_back_to_onboard() {
        let d = directional(&waiting(&[]), &cabin(9, Direction::Up, &[5]));
        assert_eq!(d, Decision::new(Some(Floor(5)), Direction::Down));
    }

    #[test]
    fn reversal_with_nothing_still_flips() {
        let d = directional(&waiting(&[]), &cabin(6, Direction::Up, &[]));
        assert_eq!(d, Decision::none(Direction::Down));

        let d = directional(&waiting(&[]), &cabin(6, Direction::Down, &[]));
        assert_eq!(d, Decision::none(Direction::Up));
    }

    #[test]
    fn down_takes_higher_of_waiting_and_onboard() {
        let d = directional(&waiting(&[1]), &cabin(6, Direction::Down, &[4]));
        assert_eq!(d, Decision::new(Some(Floor(4)), Direction::Down));

        let d = directional(&waiting(&[5]), &cabin(6, Direction::Down, &[0]));
        assert_eq!(d, Decision::new(Some(Floor(5)), Direction::Down));
    }

    #[test]
    fn down_exhausted_reverses_up() {
        let d = directional(&waiting(&[8]), &cabin(0, Direction::Down, &[]));
        assert_eq!(d, Decision::new(Some(Floor(8)), Direction::Up));
    }

    #[test]
    fn decision_does_not_touch_cabin() {
        let reg = waiting(&[7]);
        let c = cabin(3, Direction::Idle, &[]);
        let first = directional(&reg, &c);
        let second = directional(&reg, &c);
        assert_eq!(first, second);
        assert_eq!(c.direction, Direction::Idle);
    }
}

// ── Dispatcher trait ──────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher_trait {
    use super::*;
    use crate::{DispatchContext, Directional, Dispatcher, Nearest};

    #[test]
    fn policy_enum_matches_concrete_policies() {
        let reg = waiting(&[2, 8]);
        let c = cabin(4, Direction::Up, &[6]);
        let ctx = DispatchContext::new(&reg, &c);
        assert_eq!(Policy::Nearest.decide(&ctx), Nearest.decide(&ctx));
        assert_eq!(Policy::Directional.decide(&ctx), Directional.decide(&ctx));
    }

    #[test]
    fn names() {
        assert_eq!(Nearest.name(), "nearest");
        assert_eq!(Directional.name(), "directional");
        assert_eq!(Policy::Nearest.name(), "nearest");
    }
}
