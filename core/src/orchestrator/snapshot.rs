//! Snapshot: read-only views of a running simulation
//!
//! Captures the complete observable state of a running simulation for
//! display layers: per-channel busy/current/remaining and queue
//! contents, the pending queue, the clock, and the stub counter. The
//! snapshot is serde-serializable and exportable as JSON.
//!
//! There is deliberately no restore path; persistence across runs is out
//! of scope.

use serde::{Deserialize, Serialize};

use crate::models::transaction::Transaction;
use crate::orchestrator::Orchestrator;

/// Read-only view of one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSnapshot {
    /// Channel index.
    pub index: usize,

    /// Whether a transaction is in service.
    pub busy: bool,

    /// The in-service transaction, if any.
    pub current: Option<Transaction>,

    /// Minutes of service still outstanding (0 when idle).
    pub remaining_minutes: u32,

    /// Queue contents, front first.
    pub queue: Vec<Transaction>,

    /// Number of completed transactions on the stack.
    pub completed: usize,
}

/// Read-only view of the whole simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    /// Minutes elapsed since start.
    pub elapsed_minutes: usize,

    /// Next stub number to be assigned.
    pub next_stub: u64,

    /// Whether the overflow teller is active.
    pub overflow_open: bool,

    /// RNG state at capture time (determinism diagnostics).
    pub rng_state: u64,

    /// All channels, primaries first.
    pub channels: Vec<ChannelSnapshot>,

    /// Pending queue contents, front first.
    pub pending: Vec<Transaction>,
}

impl SimulationSnapshot {
    /// Capture the current state of an orchestrator.
    pub fn capture(orchestrator: &Orchestrator) -> Self {
        let state = orchestrator.state();

        let channels = state
            .channels()
            .iter()
            .map(|channel| ChannelSnapshot {
                index: channel.index(),
                busy: channel.is_busy(),
                current: channel.current().map(|s| *s.transaction()),
                remaining_minutes: channel.current().map(|s| s.remaining_minutes()).unwrap_or(0),
                queue: channel.queue().iter().copied().collect(),
                completed: channel.completed().len(),
            })
            .collect();

        Self {
            elapsed_minutes: orchestrator.elapsed_minutes(),
            next_stub: orchestrator.next_stub(),
            overflow_open: state.overflow_open(),
            rng_state: orchestrator.rng_state(),
            channels,
            pending: state.pending().iter().copied().collect(),
        }
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Orchestrator {
    /// Capture a read-only snapshot of the full simulation state.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot::capture(self)
    }
}
