//! Unit tests for pg-agent.

use pg_behavior::BehaviorKind;
use pg_core::{AgentId, AgentRng, SceneBounds, SimRng};

use crate::{Penguin, Population, PopulationBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn bounds() -> SceneBounds {
    SceneBounds::new(1000.0, 800.0)
}

fn spawned_penguin() -> Penguin {
    Penguin::new(400.0, 750.0)
}

// ── Penguin state machine ─────────────────────────────────────────────────────

#[cfg(test)]
mod penguin_tests {
    use super::*;

    #[test]
    fn new_penguin_is_fresh_and_idle() {
        let p = spawned_penguin();
        assert!(p.is_fresh());
        assert!(p.active_kind().is_none());
    }

    #[test]
    fn first_update_always_enters_move() {
        for seed in 0..200 {
            let mut p = spawned_penguin();
            let mut rng = AgentRng::new(seed, AgentId(0));
            let report = p.update(0.016, bounds(), &mut rng);
            assert_eq!(report.entered, Some(BehaviorKind::Move), "seed {seed}");
            assert_eq!(p.active_kind(), Some(BehaviorKind::Move));
            assert!(!p.is_fresh());
        }
    }

    #[test]
    fn reselection_waits_for_next_update() {
        let mut p = spawned_penguin();
        let mut rng = AgentRng::new(7, AgentId(0));

        // Zero-length frame: Move is entered but cannot finish.
        let first = p.update(0.0, bounds(), &mut rng);
        assert_eq!(first.entered, Some(BehaviorKind::Move));
        assert_eq!(first.finished, None);

        // A huge frame overshoots any walk distance.
        let second = p.update(1_000.0, bounds(), &mut rng);
        assert_eq!(second.entered, None);
        assert_eq!(second.finished, Some(BehaviorKind::Move));
        assert!(p.active_kind().is_none(), "slot stays empty until the next update");

        let third = p.update(0.0, bounds(), &mut rng);
        assert!(third.entered.is_some());
    }

    #[test]
    fn every_activation_entered_once_before_stepping() {
        let mut p = spawned_penguin();
        let mut rng = AgentRng::new(99, AgentId(3));
        let mut entered = 0u32;
        let mut finished = 0u32;
        let mut idle_after_finish = false;

        for i in 0..20_000 {
            let dt = 0.005 + (i % 7) as f32 * 0.01;
            let report = p.update(dt, bounds(), &mut rng);

            if idle_after_finish {
                assert!(report.entered.is_some(), "update {i} after a finish must reselect");
            } else if i > 0 {
                assert!(report.entered.is_none(), "update {i}: enter while a behavior was running");
            }

            entered += report.entered.is_some() as u32;
            finished += report.finished.is_some() as u32;
            assert!(finished <= entered);

            idle_after_finish = report.finished.is_some();
            assert_eq!(p.active_kind().is_none(), idle_after_finish);
        }

        let running = p.active_kind().is_some() as u32;
        assert_eq!(entered, finished + running);
        assert!(finished > 10, "expected several activations, got {finished}");
    }

    #[test]
    fn reselection_reaches_every_kind() {
        let mut p = spawned_penguin();
        let mut rng = AgentRng::new(1234, AgentId(0));
        let mut seen = [false; BehaviorKind::COUNT];
        for _ in 0..50_000 {
            if let Some(kind) = p.update(0.05, bounds(), &mut rng).entered {
                seen[kind.index()] = true;
            }
        }
        assert_eq!(seen, [true; BehaviorKind::COUNT]);
    }
}

// ── PopulationBuilder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    fn assert_in_spawn_bounds(pop: &Population, b: SceneBounds) {
        assert!((20..30).contains(&pop.len()), "size {}", pop.len());
        assert_eq!(pop.rngs.len(), pop.len());
        for (id, p) in pop.iter() {
            let (x, y) = (p.body.x, p.body.y);
            assert!(x >= 0.0 && x < b.width - 30.0, "{id}: x = {x}");
            assert!(y >= 740.0 - 1e-3 && y <= 775.0 + 1e-3, "{id}: y = {y}");
            assert!(p.is_fresh());
        }
    }

    #[test]
    fn create_twice_same_bounds_both_valid() {
        let b = bounds();
        let mut rng = SimRng::new(42);
        let first = Population::spawn(b, 20..30, &mut rng);
        let second = Population::spawn(b, 20..30, &mut rng);
        assert_in_spawn_bounds(&first, b);
        assert_in_spawn_bounds(&second, b);
    }

    #[test]
    fn many_seeds_stay_in_bounds() {
        let b = bounds();
        for seed in 0..100 {
            let pop = PopulationBuilder::new(b).build(&mut SimRng::new(seed));
            assert_in_spawn_bounds(&pop, b);
        }
    }

    #[test]
    fn same_seed_same_population() {
        let a = Population::spawn(bounds(), 20..30, &mut SimRng::new(5));
        let b = Population::spawn(bounds(), 20..30, &mut SimRng::new(5));
        assert_eq!(a.len(), b.len());
        for ((_, pa), (_, pb)) in a.iter().zip(b.iter()) {
            assert_eq!(pa.body, pb.body);
        }
    }

    #[test]
    fn empty_range_spawns_min() {
        let pop = PopulationBuilder::new(bounds()).size_range(4..4).build(&mut SimRng::new(0));
        assert_eq!(pop.len(), 4);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let pop = PopulationBuilder::new(SceneBounds::new(10.0, 10.0)).build(&mut SimRng::new(0));
        assert!(!pop.is_empty());
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population_tests {
    use super::*;

    #[test]
    fn recreate_replaces_and_bumps_generation() {
        let mut rng = SimRng::new(3);
        let mut pop = Population::spawn(bounds(), 20..30, &mut rng);
        pop.update(0.1, bounds());
        assert!(pop.iter().all(|(_, p)| !p.is_fresh()));

        pop.recreate(SceneBounds::new(500.0, 400.0), 20..30, &mut rng);
        assert_eq!(pop.generation, 1);
        assert!(pop.iter().all(|(_, p)| p.is_fresh()));
        assert!(pop.iter().all(|(_, p)| p.body.x < 470.0));
    }

    #[test]
    fn first_update_enters_move_for_everyone() {
        let mut pop = Population::spawn(bounds(), 20..30, &mut SimRng::new(8));
        let stats = pop.update(0.016, bounds());
        assert_eq!(stats.entered[BehaviorKind::Move.index()] as usize, pop.len());
        assert_eq!(stats.entered_total() as usize, pop.len());
    }
}
