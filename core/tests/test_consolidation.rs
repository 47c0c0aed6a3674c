//! End-to-end consolidation tests through the orchestrator.

use teller_simulator_core_rs::{
    DurationConfig, Orchestrator, OrchestratorConfig,
};

fn completed_sim() -> Orchestrator {
    let mut sim = Orchestrator::new(OrchestratorConfig {
        rng_seed: 1,
        duration_model: DurationConfig::Fixed { minutes: 2 },
        ..Default::default()
    })
    .unwrap();

    // One item per primary channel; all complete on the second tick.
    for code in [0u8, 1, 2, 3] {
        sim.admit(1_000, code).unwrap();
    }
    sim.tick();
    sim.tick();
    sim
}

#[test]
fn test_report_is_ordered_by_stub() {
    let mut sim = completed_sim();
    let report = sim.consolidate();
    let stubs: Vec<u64> = report.transactions.iter().map(|t| t.stub()).collect();
    assert_eq!(stubs, vec![1, 2, 3, 4]);
    assert_eq!(report.total_completed(), 4);
}

#[test]
fn test_per_channel_counts_and_averages() {
    let mut sim = completed_sim();
    let report = sim.consolidate();

    for channel in 0..4 {
        assert_eq!(report.channels[channel].channel, channel);
        assert_eq!(report.channels[channel].completed, 1);
        assert_eq!(report.channels[channel].average_minutes, 2);
    }
    // The overflow teller never opened: zero completions, average 0.
    assert_eq!(report.channels[4].completed, 0);
    assert_eq!(report.channels[4].average_minutes, 0);
}

#[test]
fn test_consolidate_drains_the_stacks() {
    let mut sim = completed_sim();
    assert_eq!(sim.snapshot().channels[0].completed, 1);

    sim.consolidate();
    assert!(sim
        .snapshot()
        .channels
        .iter()
        .all(|c| c.completed == 0));

    let second = sim.consolidate();
    assert!(second.transactions.is_empty());
    assert!(second.channels.iter().all(|c| c.completed == 0));
}

#[test]
fn test_consolidation_is_logged() {
    let mut sim = completed_sim();
    sim.consolidate();
    let events = sim.event_log().of_type("Consolidated");
    assert_eq!(events.len(), 1);
}

#[test]
fn test_integer_average_truncates() {
    let mut sim = Orchestrator::new(OrchestratorConfig {
        rng_seed: 909,
        duration_model: DurationConfig::ClassUniform,
        ..Default::default()
    })
    .unwrap();

    // Two Government items; durations are in [10, 15].
    sim.admit(100, 1).unwrap();
    sim.admit(100, 1).unwrap();
    for _ in 0..40 {
        sim.tick();
    }

    let report = sim.consolidate();
    assert_eq!(report.channels[1].completed, 2);
    let expected = report.channels[1].total_minutes / 2;
    assert_eq!(report.channels[1].average_minutes, expected);
}
