//! Integration tests for lift-sim.

use lift_arrivals::{NoArrivals, ScriptedArrivals};
use lift_core::{Direction, Floor, Passenger, PassengerId, Policy, SimConfig, Tick};

use crate::{CabinSnapshot, NoopObserver, SimBuilder, SimObserver, SimStats};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(policy: Policy) -> SimConfig {
    SimConfig {
        total_floors:            10,
        capacity:                4,
        start_floor:             Floor(0),
        policy,
        seed:                    42,
        initial_passengers:      5,
        arrival_probability:     0.3,
        served_target:           100,
        max_ticks:               Some(10_000),
        snapshot_interval_ticks: 1,
    }
}

fn rider(id: u32, start: u32, dest: u32, tick: u64) -> Passenger {
    Passenger::new(PassengerId(id), Floor(start), Floor(dest), Tick(tick)).unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;
    use lift_core::LiftError;

    #[test]
    fn builds_successfully_from_config() {
        let sim = SimBuilder::from_config(test_config(Policy::Nearest)).build().unwrap();
        assert_eq!(sim.building.total_floors(), 10);
        assert_eq!(sim.cabin.floor(), Floor(0));
        assert_eq!(sim.cabin.direction, Direction::Idle);
        assert_eq!(sim.clock.current_tick, Tick(0));
    }

    #[test]
    fn single_floor_building_fails_fast() {
        let cfg = SimConfig { total_floors: 1, ..test_config(Policy::Nearest) };
        let result = SimBuilder::new(cfg, Policy::Nearest, NoArrivals).build();
        assert!(matches!(result, Err(SimError::Config(LiftError::Config(_)))));
    }

    #[test]
    fn zero_capacity_fails_fast() {
        let cfg = SimConfig { capacity: 0, ..test_config(Policy::Nearest) };
        assert!(SimBuilder::new(cfg, Policy::Nearest, NoArrivals).build().is_err());
    }

    #[test]
    fn out_of_range_seed_passenger_rejected() {
        let result = SimBuilder::new(test_config(Policy::Nearest), Policy::Nearest, NoArrivals)
            .seed_passengers(vec![rider(3, 0, 12, 0)])
            .build();
        match result {
            Err(SimError::SeedRejected { id, source }) => {
                assert_eq!(id, PassengerId(3));
                assert_eq!(source, LiftError::FloorOutOfRange { floor: Floor(12), total_floors: 10 });
            }
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("expected SeedRejected"),
        }
    }

    #[test]
    fn generated_ids_follow_seeded_ids() {
        let script = ScriptedArrivals::new().with(Tick(0), Floor(4), Floor(2));
        let mut sim = SimBuilder::new(test_config(Policy::Nearest), Policy::Nearest, script)
            .seed_passengers(vec![rider(7, 1, 2, 0)])
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver);
        let ids: Vec<u32> = sim.building.waiting.peek_all(Floor(4)).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![8]);
    }
}

// ── End-to-end single trip ────────────────────────────────────────────────────

#[cfg(test)]
mod single_trip {
    use super::*;

    fn one_trip_sim(policy: Policy) -> crate::Sim<Policy, NoArrivals> {
        SimBuilder::new(test_config(policy), policy, NoArrivals)
            .seed_passengers(vec![rider(0, 0, 5, 0)])
            .build()
            .unwrap()
    }

    #[test]
    fn directional_boards_and_heads_up() {
        let mut sim = one_trip_sim(Policy::Directional);
        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.cabin.onboard().len(), 1);
        assert_eq!(sim.cabin.direction, Direction::Up);
        assert_eq!(sim.stats.served, 1);
        assert_eq!(sim.stats.total_wait_ticks, 0);
        assert_eq!(sim.snapshot().target, Some(Floor(5)));
    }

    #[test]
    fn nearest_targets_destination() {
        let mut sim = one_trip_sim(Policy::Nearest);
        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.snapshot().target, Some(Floor(5)));
        assert_eq!(sim.cabin.floor(), Floor(1));
        assert_eq!(sim.cabin.direction, Direction::Up);
    }

    #[test]
    fn arrives_after_five_ticks_and_alights() {
        for policy in Policy::ALL {
            let mut sim = one_trip_sim(policy);
            sim.run_ticks(5, &mut NoopObserver);
            assert_eq!(sim.cabin.floor(), Floor(5), "{policy}");
            assert_eq!(sim.stats.distance, 5, "{policy}");

            sim.run_ticks(1, &mut NoopObserver);
            assert_eq!(sim.stats.delivered, 1, "{policy}");
            assert!(sim.cabin.onboard().is_empty(), "{policy}");
            assert_eq!(sim.stats.max_wait_ticks, 0, "{policy}");
            // Nothing left to do: the cabin parks.
            assert_eq!(sim.cabin.floor(), Floor(5), "{policy}");
            assert_eq!(sim.cabin.direction, Direction::Idle, "{policy}");
        }
    }
}

// ── Capacity and queue order ──────────────────────────────────────────────────

#[cfg(test)]
mod capacity {
    use super::*;

    #[test]
    fn full_cabin_leaves_the_rest_queued_in_order() {
        let cfg = SimConfig { capacity: 2, ..test_config(Policy::Directional) };
        let mut sim = SimBuilder::new(cfg, Policy::Directional, NoArrivals)
            .seed_passengers(vec![rider(0, 0, 5, 0), rider(1, 0, 5, 0), rider(2, 0, 5, 0)])
            .build()
            .unwrap();

        sim.run_ticks(1, &mut NoopObserver);
        let onboard: Vec<u32> = sim.cabin.onboard().iter().map(|p| p.id.0).collect();
        assert_eq!(onboard, vec![0, 1]);
        let left: Vec<u32> = sim.building.waiting.peek_all(Floor(0)).iter().map(|p| p.id.0).collect();
        assert_eq!(left, vec![2]);

        // Up to 5 (ticks 0–4), drop off at tick 5, back down to 0 by tick 9,
        // board the last passenger on tick 10.
        sim.run_ticks(10, &mut NoopObserver);
        assert_eq!(sim.stats.served, 3);
        assert_eq!(sim.stats.max_wait_ticks, 10);
        assert!(sim.building.waiting.is_empty());
    }

    #[test]
    fn capacity_never_exceeded_under_random_traffic() {
        for policy in Policy::ALL {
            let cfg = SimConfig { capacity: 2, arrival_probability: 0.9, ..test_config(policy) };
            let mut sim = SimBuilder::from_config(cfg).build().unwrap();
            for _ in 0..500 {
                sim.run_ticks(1, &mut NoopObserver);
                assert!(sim.cabin.onboard().len() <= 2);
            }
        }
    }
}

// ── Invariants over random runs ───────────────────────────────────────────────

#[cfg(test)]
mod invariants {
    use super::*;

    #[test]
    fn every_passenger_is_in_exactly_one_place() {
        for policy in Policy::ALL {
            let mut sim = SimBuilder::from_config(test_config(policy)).build().unwrap();
            for _ in 0..300 {
                sim.run_ticks(1, &mut NoopObserver);
                let waiting = sim.building.waiting.len() as u64;
                let onboard = sim.cabin.onboard().len() as u64;
                assert_eq!(waiting + onboard + sim.stats.delivered, sim.stats.arrived);
                assert!(sim.stats.delivered <= sim.stats.served);
            }
        }
    }

    #[test]
    fn cabin_moves_at_most_one_floor_per_tick() {
        let mut sim = SimBuilder::from_config(test_config(Policy::Nearest)).build().unwrap();
        let mut prev = sim.cabin.floor();
        for _ in 0..300 {
            sim.run_ticks(1, &mut NoopObserver);
            assert!(sim.cabin.floor().distance(prev) <= 1);
            assert!(sim.cabin.floor().within(10));
            prev = sim.cabin.floor();
        }
    }

    #[test]
    fn same_seed_same_result() {
        for policy in Policy::ALL {
            let a = SimBuilder::from_config(test_config(policy)).build().unwrap().run(&mut NoopObserver);
            let b = SimBuilder::from_config(test_config(policy)).build().unwrap().run(&mut NoopObserver);
            assert_eq!(a, b);
        }
    }
}

// ── Stop conditions ───────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_stops_at_served_target() {
        let mut sim = SimBuilder::from_config(test_config(Policy::Directional)).build().unwrap();
        let stats = sim.run(&mut NoopObserver);
        assert!(stats.served >= 100);
        // Boarding can overshoot by at most one cabin load.
        assert!(stats.served < 100 + 4);
        assert!(sim.is_finished());
        assert!(stats.average_wait().is_some());
        assert!(stats.distance_per_passenger().is_some());
    }

    #[test]
    fn run_stops_at_max_ticks() {
        let cfg = SimConfig { served_target: 0, max_ticks: Some(25), ..test_config(Policy::Nearest) };
        let mut sim = SimBuilder::from_config(cfg).build().unwrap();
        let stats = sim.run(&mut NoopObserver);
        assert_eq!(stats.ticks, 25);
        assert_eq!(sim.clock.current_tick, Tick(25));
    }

    #[test]
    fn invalid_arrivals_are_dropped() {
        let script = ScriptedArrivals::new()
            .with(Tick(0), Floor(3), Floor(12))
            .with(Tick(0), Floor(4), Floor(4))
            .with(Tick(0), Floor(2), Floor(6));
        let mut sim = SimBuilder::new(test_config(Policy::Nearest), Policy::Nearest, script)
            .build()
            .unwrap();
        sim.run_ticks(1, &mut NoopObserver);
        assert_eq!(sim.stats.rejected, 2);
        assert_eq!(sim.stats.arrived, 1);
        assert_eq!(sim.building.waiting.waiting_at(Floor(2)), 1);
    }

    /// Observer that records every hook.
    #[derive(Default)]
    struct Recorder {
        starts:      u64,
        ends:        u64,
        arrivals:    u64,
        boards:      Vec<(u32, u64)>,
        alights:     u64,
        snapshots:   Vec<CabinSnapshot>,
        final_stats: Option<SimStats>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_arrival(&mut self, _t: Tick, _p: &Passenger) { self.arrivals += 1; }
        fn on_board(&mut self, _t: Tick, p: &Passenger, wait: u64) { self.boards.push((p.id.0, wait)); }
        fn on_alight(&mut self, _t: Tick, _p: &Passenger) { self.alights += 1; }
        fn on_tick_end(&mut self, _t: Tick, _s: &SimStats) { self.ends += 1; }
        fn on_snapshot(&mut self, s: &CabinSnapshot) { self.snapshots.push(s.clone()); }
        fn on_sim_end(&mut self, s: &SimStats) { self.final_stats = Some(s.clone()); }
    }

    #[test]
    fn observer_sees_every_event() {
        let script = ScriptedArrivals::new()
            .with(Tick(0), Floor(0), Floor(3))
            .with(Tick(2), Floor(6), Floor(1));
        let cfg = SimConfig { served_target: 2, ..test_config(Policy::Directional) };
        let mut sim = SimBuilder::new(cfg, Policy::Directional, script).build().unwrap();

        let mut rec = Recorder::default();
        let stats = sim.run(&mut rec);

        assert_eq!(rec.starts, stats.ticks);
        assert_eq!(rec.ends, stats.ticks);
        assert_eq!(rec.snapshots.len() as u64, stats.ticks);
        assert_eq!(rec.arrivals, 2);
        assert_eq!(rec.boards.len() as u64, stats.served);
        assert_eq!(rec.alights, stats.delivered);
        assert_eq!(rec.final_stats, Some(stats));

        // Tick 0 snapshot: boarded at floor 0, moved to floor 1.
        let first = &rec.snapshots[0];
        assert_eq!(first.tick, Tick(0));
        assert_eq!(first.floor, Floor(1));
        assert_eq!(first.onboard_destinations, vec![Floor(3)]);
        assert_eq!(first.waiting.len(), 10);
    }

    #[test]
    fn snapshot_interval_thins_snapshots() {
        let cfg = SimConfig {
            served_target:           0,
            max_ticks:               Some(20),
            snapshot_interval_ticks: 5,
            ..test_config(Policy::Nearest)
        };
        let mut sim = SimBuilder::from_config(cfg).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        let ticks: Vec<u64> = rec.snapshots.iter().map(|s| s.tick.0).collect();
        assert_eq!(ticks, vec![0, 5, 10, 15]);
    }
}

// ── Finite traffic ────────────────────────────────────────────────────────────

#[cfg(test)]
mod drained {
    use super::*;
    use lift_arrivals::RandomArrivals;

    #[test]
    fn scripted_run_ends_after_last_trip_with_default_config() {
        for policy in Policy::ALL {
            let script = ScriptedArrivals::new().with(Tick(0), Floor(0), Floor(5));
            let mut sim = SimBuilder::new(SimConfig::default(), policy, script).build().unwrap();
            let stats = sim.run(&mut NoopObserver);

            assert_eq!(stats.served, 1, "{policy}");
            assert_eq!(stats.delivered, 1, "{policy}");
            // Boards on tick 0, reaches floor 5 after tick 4, alights on tick 5.
            assert_eq!(stats.ticks, 6, "{policy}");
            assert!(sim.is_drained());
            assert!(sim.is_finished());
        }
    }

    #[test]
    fn pending_script_keeps_the_run_alive() {
        let script = ScriptedArrivals::new()
            .with(Tick(0), Floor(0), Floor(1))
            .with(Tick(40), Floor(3), Floor(2));
        let mut sim = SimBuilder::new(SimConfig::default(), Policy::Nearest, script).build().unwrap();
        let stats = sim.run(&mut NoopObserver);
        // The cabin is idle and empty long before tick 40.
        assert!(stats.ticks > 40);
        assert_eq!(stats.delivered, 2);
    }

    #[test]
    fn empty_building_with_no_arrivals_ends_immediately() {
        let mut sim = SimBuilder::new(SimConfig::default(), Policy::Directional, NoArrivals)
            .build()
            .unwrap();
        let mut stats_seen = 0;
        struct EndCounter<'a>(&'a mut u32);
        impl SimObserver for EndCounter<'_> {
            fn on_sim_end(&mut self, _s: &SimStats) { *self.0 += 1; }
        }
        let stats = sim.run(&mut EndCounter(&mut stats_seen));
        assert_eq!(stats.ticks, 0);
        assert_eq!(stats_seen, 1);
    }

    #[test]
    fn seeded_passengers_only_are_all_delivered() {
        let mut sim = SimBuilder::new(SimConfig::default(), Policy::Directional, NoArrivals)
            .seed_passengers(vec![rider(0, 2, 7, 0), rider(1, 6, 1, 0), rider(2, 9, 0, 0)])
            .build()
            .unwrap();
        let stats = sim.run(&mut NoopObserver);
        assert_eq!(stats.delivered, 3);
        assert!(sim.building.waiting.is_empty());
        assert!(sim.cabin.onboard().is_empty());
    }

    #[test]
    fn random_burst_without_later_traffic_ends() {
        let cfg = SimConfig { arrival_probability: 0.0, initial_passengers: 3, ..SimConfig::default() };
        let arrivals = RandomArrivals::from_config(&cfg);
        let mut sim = SimBuilder::new(cfg, Policy::Nearest, arrivals).build().unwrap();
        let stats = sim.run(&mut NoopObserver);
        assert_eq!(stats.served, 3);
        assert_eq!(stats.delivered, 3);
    }
}
