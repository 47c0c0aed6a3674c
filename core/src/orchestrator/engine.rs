//! Orchestrator engine
//!
//! Owns all simulation state and exposes the external interface the
//! presentation layer calls into:
//!
//! ```text
//! admit(amount, class_code)  -> AdmissionOutcome
//! tick()                     -> TickResult (completions this minute)
//! consolidate()              -> Report (drains completion stacks)
//! open_overflow_channel()    -> idempotent manual activation
//! snapshot()                 -> read-only view of everything
//! ```
//!
//! The engine is single-threaded and turn-based: "five tellers working
//! simultaneously" means one pass over the channels per tick, not
//! concurrency. All randomness goes through the seeded RNG, so one seed
//! plus one call sequence replays identically.
//!
//! # Example
//!
//! ```
//! use teller_simulator_core_rs::{AdmissionOutcome, Orchestrator, OrchestratorConfig};
//!
//! let mut sim = Orchestrator::new(OrchestratorConfig::default()).unwrap();
//! let outcome = sim.admit(250, 2).unwrap();
//! assert!(matches!(outcome, AdmissionOutcome::Routed { channel: 2 }));
//!
//! let result = sim.tick();
//! assert_eq!(result.tick, 1);
//! ```

use thiserror::Error;

use crate::admission::{AdmissionOutcome, AdmissionRouter};
use crate::core::time::SimClock;
use crate::durations::{DurationConfig, DurationModel};
use crate::models::class::AccountClass;
use crate::models::event::{Event, EventLog};
use crate::models::state::SimulationState;
use crate::models::transaction::Transaction;
use crate::report::{self, Report};
use crate::rng::SeededRng;

// ============================================================================
// Configuration
// ============================================================================

/// Complete orchestrator configuration.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Seed for the deterministic RNG.
    pub rng_seed: u64,

    /// Service-duration model selection.
    pub duration_model: DurationConfig,

    /// Configured pending-queue capacity; the overflow teller opens only
    /// once pending holds at least half of this.
    pub pending_capacity: usize,

    /// Flat queue capacity of the overflow teller.
    pub overflow_capacity: usize,

    /// Completion stack capacity per channel.
    pub stack_capacity: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1,
            duration_model: DurationConfig::ClassUniform,
            pending_capacity: 10,
            overflow_capacity: 10,
            stack_capacity: 100,
        }
    }
}

// ============================================================================
// Results and errors
// ============================================================================

/// One transaction finished during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEvent {
    /// Channel that finished the work.
    pub channel: usize,

    /// The completed transaction.
    pub transaction: Transaction,
}

/// Result of a single tick.
#[derive(Debug, Clone)]
pub struct TickResult {
    /// Minute that was just simulated (1-based).
    pub tick: usize,

    /// Transactions that completed this tick, in channel order.
    pub completions: Vec<CompletionEvent>,

    /// Channels that pulled a new item into service this tick.
    pub started: usize,

    /// Channels that finished an item but could not record it because
    /// their completion stack was full. The item stays in service and
    /// the push is retried on the next tick.
    pub stalled: Vec<usize>,
}

/// Simulation error taxonomy.
///
/// No error is fatal: every failure is local and reported to the caller
/// as a value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Configuration validation failed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Raw class code outside the four recognized values. The item is
    /// discarded; no queue changes, no stub number consumed.
    #[error("unknown account class code {0}")]
    InvalidClass(u8),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Top-level simulation object.
///
/// Owns the channels, pending queue, clock, RNG, stub counter, and event
/// log; nothing here is ambient or static state.
pub struct Orchestrator {
    state: SimulationState,
    clock: SimClock,
    rng: SeededRng,
    durations: Box<dyn DurationModel>,
    router: AdmissionRouter,
    event_log: EventLog,
    /// Next stub number to assign; starts at 1, never reused.
    next_stub: u64,
}

impl Orchestrator {
    /// Create an orchestrator from a validated configuration.
    pub fn new(config: OrchestratorConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        Ok(Self {
            state: SimulationState::new(config.overflow_capacity, config.stack_capacity),
            clock: SimClock::new(),
            rng: SeededRng::new(config.rng_seed),
            durations: config.duration_model.build(),
            router: AdmissionRouter::new(config.pending_capacity),
            event_log: EventLog::new(),
            next_stub: 1,
        })
    }

    fn validate_config(config: &OrchestratorConfig) -> Result<(), SimulationError> {
        if config.pending_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "pending_capacity must be > 0".to_string(),
            ));
        }
        if config.overflow_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "overflow_capacity must be > 0".to_string(),
            ));
        }
        if config.stack_capacity == 0 {
            return Err(SimulationError::InvalidConfig(
                "stack_capacity must be > 0".to_string(),
            ));
        }
        // The pending queue never holds more than the largest class
        // threshold, so a half-capacity gate above that can never fire.
        let max_pending_len = AccountClass::ALL
            .iter()
            .map(|c| c.queue_capacity())
            .max()
            .unwrap_or(0);
        if config.pending_capacity / 2 > max_pending_len {
            return Err(SimulationError::InvalidConfig(format!(
                "pending_capacity {} makes the overflow gate unreachable: \
                 the pending queue holds at most {} items",
                config.pending_capacity, max_pending_len
            )));
        }
        if let DurationConfig::Fixed { minutes: 0 } = config.duration_model {
            return Err(SimulationError::InvalidConfig(
                "fixed duration must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Admission
    // ========================================================================

    /// Admit a new transaction from raw caller input.
    ///
    /// The class code is validated before anything else: an unknown code
    /// is rejected without consuming a stub number or touching any queue.
    pub fn admit(&mut self, amount: i64, class_code: u8) -> Result<AdmissionOutcome, SimulationError> {
        let class = AccountClass::from_code(class_code)?;
        Ok(self.admit_class(amount, class))
    }

    /// Admit a new transaction with an already-validated class.
    pub fn admit_class(&mut self, amount: i64, class: AccountClass) -> AdmissionOutcome {
        let tick = self.clock.elapsed_minutes();
        let stub = self.next_stub;
        self.next_stub += 1;

        let duration_minutes = self.durations.sample(class, &mut self.rng);
        let transaction = Transaction::new(stub, amount, class, duration_minutes);

        self.event_log.log(Event::Admitted {
            tick,
            stub,
            amount,
            class,
            duration_minutes,
        });

        self.router
            .route(&mut self.state, transaction, tick, &mut self.event_log)
    }

    // ========================================================================
    // Scheduler
    // ========================================================================

    /// Advance the simulation by one minute.
    ///
    /// For every active channel, in index order: an idle channel with
    /// queued work pulls its head item into service, then any in-service
    /// item advances by one minute. An item that reaches zero moves onto
    /// the channel's completion stack and is reported in the result; the
    /// channel starts its next item on the following tick. The global
    /// clock advances exactly once per tick.
    ///
    /// The pending queue is never drained here; items leave it only when
    /// the overflow teller opens.
    ///
    /// A full completion stack stalls only its own channel: the item
    /// stays in service, the channel is reported in
    /// [`TickResult::stalled`], and every other channel proceeds
    /// normally. The push is retried on the next tick, so a
    /// consolidation between ticks lets the stalled item through.
    pub fn tick(&mut self) -> TickResult {
        self.clock.advance_tick();
        let tick = self.clock.elapsed_minutes();

        let mut completions = Vec::new();
        let mut started_stubs = Vec::new();
        let mut stalled_stubs = Vec::new();

        for index in self.state.active_channel_indices() {
            let channel = self.state.channel_mut(index);

            if let Some(stub) = channel.start_next() {
                started_stubs.push((index, stub));
            }

            match channel.advance_minute() {
                Ok(Some(transaction)) => completions.push(CompletionEvent {
                    channel: index,
                    transaction,
                }),
                Ok(None) => {}
                Err(_) => {
                    // The item is still in the in-service slot.
                    if let Some(service) = channel.current() {
                        stalled_stubs.push((index, service.transaction().stub()));
                    }
                }
            }
        }

        // Log after the channel pass; events keep per-tick occurrence order.
        let started = started_stubs.len();
        for (channel, stub) in started_stubs {
            self.event_log.log(Event::ServiceStarted {
                tick,
                channel,
                stub,
            });
        }
        for completion in &completions {
            self.event_log.log(Event::Completed {
                tick,
                channel: completion.channel,
                stub: completion.transaction.stub(),
                duration_minutes: completion.transaction.duration_minutes(),
            });
        }
        for &(channel, stub) in &stalled_stubs {
            self.event_log.log(Event::CompletionStalled {
                tick,
                channel,
                stub,
            });
        }

        TickResult {
            tick,
            completions,
            started,
            stalled: stalled_stubs.into_iter().map(|(channel, _)| channel).collect(),
        }
    }

    // ========================================================================
    // Consolidation and overflow
    // ========================================================================

    /// Drain every completion stack into an ordered report.
    ///
    /// Destructive by design: calling twice in a row yields an empty
    /// report the second time.
    pub fn consolidate(&mut self) -> Report {
        let report = report::consolidate(&mut self.state);
        self.event_log.log(Event::Consolidated {
            tick: self.clock.elapsed_minutes(),
            transactions: report.total_completed(),
        });
        report
    }

    /// Manually activate the overflow teller. Idempotent; normally the
    /// admission router does this under sustained saturation.
    pub fn open_overflow_channel(&mut self) {
        let tick = self.clock.elapsed_minutes();
        self.router
            .open_overflow(&mut self.state, tick, &mut self.event_log);
    }

    // ========================================================================
    // Read-only views
    // ========================================================================

    /// Minutes elapsed since the simulation started.
    pub fn elapsed_minutes(&self) -> usize {
        self.clock.elapsed_minutes()
    }

    /// Elapsed time as (hours, minutes) for display.
    pub fn elapsed_hh_mm(&self) -> (usize, usize) {
        self.clock.hh_mm()
    }

    /// Current contents of the shared pending queue, front first.
    pub fn pending_contents(&self) -> Vec<Transaction> {
        self.state.pending().iter().copied().collect()
    }

    /// Next stub number that will be assigned.
    pub fn next_stub(&self) -> u64 {
        self.next_stub
    }

    /// Reference to the full simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Reference to the event log.
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Current RNG state (for snapshots).
    pub(crate) fn rng_state(&self) -> u64 {
        self.rng.state()
    }
}
