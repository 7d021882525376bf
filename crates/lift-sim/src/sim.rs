//! The `Sim` struct and its tick loop.

use lift_arrivals::ArrivalSource;
use lift_building::Building;
use lift_cabin::Cabin;
use lift_core::{Floor, Passenger, PassengerId, SimClock, SimConfig, Tick};
use lift_dispatch::{DispatchContext, Dispatcher};

use crate::{CabinSnapshot, SimObserver, SimStats};

/// The main simulation runner.
///
/// `Sim<D, A>` owns all simulation state and drives the tick loop described
/// in the crate docs.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<D: Dispatcher, A: ArrivalSource> {
    /// Global configuration (floors, capacity, stop conditions, …).
    pub config: SimConfig,

    /// Simulation clock; tracks the current tick.
    pub clock: SimClock,

    /// The building and its waiting queues.
    pub building: Building,

    /// The elevator car.
    pub cabin: Cabin,

    /// The dispatch policy.  Called once per tick.
    pub dispatcher: D,

    /// Passenger generator.  Called once per tick.
    pub arrivals: A,

    /// Running totals.
    pub stats: SimStats,

    /// Id handed to the next admitted passenger.
    pub(crate) next_id: PassengerId,

    /// Target chosen on the most recent tick.
    pub(crate) last_target: Option<Floor>,
}

impl<D: Dispatcher, A: ArrivalSource> Sim<D, A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until `served_target` passengers have boarded, `max_ticks` ticks
    /// have elapsed, or the arrival source runs dry and the building and
    /// cabin are empty, whichever comes first.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimStats {
        log::info!(
            "starting {} run: {} floors, capacity {}, target {} served",
            self.dispatcher.name(),
            self.building.total_floors(),
            self.cabin.capacity(),
            self.config.served_target,
        );

        while !self.is_finished() {
            self.step(observer);
        }
        if self.is_drained() && self.stats.served < self.config.served_target {
            log::info!(
                "arrivals exhausted after {} served; stopping short of {}",
                self.stats.served,
                self.config.served_target,
            );
        }
        observer.on_sim_end(&self.stats);

        log::info!(
            "{} run finished at {}: served {}, average wait {:.2}, distance {}",
            self.dispatcher.name(),
            self.clock,
            self.stats.served,
            self.stats.average_wait().unwrap_or(0.0),
            self.stats.distance,
        );
        self.stats.clone()
    }

    /// Run exactly `n` ticks from the current position, ignoring the stop
    /// conditions.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// `true` once a stop condition has been reached: the served target,
    /// `max_ticks`, or a drained simulation (the arrival source is exhausted
    /// and nobody is waiting or onboard).
    pub fn is_finished(&self) -> bool {
        let target = self.config.served_target;
        let served_enough = target > 0 && self.stats.served >= target;
        let out_of_time = self
            .config
            .max_ticks
            .is_some_and(|max| self.clock.elapsed() >= max);
        served_enough || out_of_time || self.is_drained()
    }

    /// No passenger anywhere and none still to come.
    pub fn is_drained(&self) -> bool {
        self.arrivals.is_exhausted()
            && self.building.waiting.is_empty()
            && self.cabin.onboard().is_empty()
    }

    /// Copy out the current state for rendering or recording.
    pub fn snapshot(&self) -> CabinSnapshot {
        CabinSnapshot {
            tick:                 self.clock.current_tick,
            floor:                self.cabin.floor(),
            direction:            self.cabin.direction,
            target:               self.last_target,
            onboard_destinations: self.cabin.onboard().iter().map(|p| p.destination).collect(),
            waiting:              self.building.waiting.counts(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.process_tick(now, observer);
        self.stats.ticks = now.0 + 1;
        observer.on_tick_end(now, &self.stats);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(&self.snapshot());
        }

        self.clock.advance();
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        // ── Phase 1: admit new arrivals ───────────────────────────────────
        let total_floors = self.building.total_floors();
        for arrival in self.arrivals.arrivals(now, total_floors) {
            let id = self.next_id;
            self.next_id = PassengerId(id.0 + 1);

            let admitted = Passenger::new(id, arrival.start, arrival.destination, now)
                .and_then(|p| self.building.admit(p).map(|()| p));
            match admitted {
                Ok(passenger) => {
                    self.stats.arrived += 1;
                    observer.on_arrival(now, &passenger);
                }
                Err(e) => {
                    // A bad trip from the source is dropped, not fatal.
                    self.stats.rejected += 1;
                    log::warn!("{now}: dropping arrival {id}: {e}");
                }
            }
        }

        // ── Phase 2: alight ───────────────────────────────────────────────
        for passenger in self.cabin.drop_off_arrivals() {
            self.stats.delivered += 1;
            log::debug!("{now}: {} alights at {}", passenger.id, passenger.destination);
            observer.on_alight(now, &passenger);
        }

        // ── Phase 3: board in arrival order up to capacity ────────────────
        //
        // Only passengers who fit leave the queue; the rest keep their place.
        let here = self.cabin.floor();
        let boarding = self.building.waiting.board(here, self.cabin.free_seats());
        for passenger in boarding {
            let wait = passenger.wait_at(now);
            let taken = self.cabin.take_on(passenger);
            debug_assert!(taken.is_ok(), "boarding batch exceeded free seats");
            self.stats.record_boarding(wait);
            log::debug!("{now}: {} boards at {here} after {wait} ticks", passenger.id);
            observer.on_board(now, &passenger, wait);
        }

        // ── Phase 4: dispatch ─────────────────────────────────────────────
        let decision = self
            .dispatcher
            .decide(&DispatchContext::new(&self.building.waiting, &self.cabin));
        self.cabin.direction = decision.direction;
        self.last_target = decision.target;

        // ── Phase 5: move at most one floor ───────────────────────────────
        let moved = self.cabin.advance_toward(decision.target);
        self.stats.distance += u64::from(moved);

        log::trace!(
            "{now}: target {:?}, now at {} heading {}",
            decision.target,
            self.cabin.floor(),
            self.cabin.direction,
        );
    }
}
