//! RNG determinism tests
//!
//! Same seed must reproduce the exact same simulation: identical sampled
//! durations, identical snapshots.

use teller_simulator_core_rs::{
    DurationConfig, Orchestrator, OrchestratorConfig, SeededRng,
};

#[test]
fn test_same_seed_same_sequence() {
    let mut a = SeededRng::new(99999);
    let mut b = SeededRng::new(99999);
    for _ in 0..100 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = SeededRng::new(1);
    let mut b = SeededRng::new(2);
    let seq_a: Vec<u64> = (0..100).map(|_| a.next_u64()).collect();
    let seq_b: Vec<u64> = (0..100).map(|_| b.next_u64()).collect();
    assert_ne!(seq_a, seq_b);
}

#[test]
fn test_same_seed_replays_identical_simulation() {
    let config = OrchestratorConfig {
        rng_seed: 777,
        duration_model: DurationConfig::ClassUniform,
        ..Default::default()
    };

    let mut first = Orchestrator::new(config.clone()).unwrap();
    let mut second = Orchestrator::new(config).unwrap();

    for sim in [&mut first, &mut second] {
        for code in [0u8, 1, 2, 3, 2, 3, 0] {
            sim.admit(1_000, code).unwrap();
        }
        for _ in 0..20 {
            sim.tick();
        }
    }

    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn test_sampled_durations_stay_in_class_ranges() {
    let mut sim = Orchestrator::new(OrchestratorConfig {
        rng_seed: 4242,
        ..Default::default()
    })
    .unwrap();

    // Route everything to the New channel and its pending slots; inspect
    // the sampled durations through the snapshot.
    for _ in 0..3 {
        sim.admit(100, 0).unwrap();
    }
    let snapshot = sim.snapshot();
    for tx in &snapshot.channels[0].queue {
        assert!((8..=10).contains(&tx.duration_minutes()));
    }
}
