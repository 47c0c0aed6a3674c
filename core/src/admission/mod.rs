//! Admission router
//!
//! Decides where each newly admitted transaction goes. Three tiers:
//!
//! 1. the class's home channel, when its queue has room for the class;
//! 2. the shared pending queue, when the home channel is full but the
//!    pending queue still has room for at least one class;
//! 3. the overflow teller, once the pending queue is saturated for every
//!    class. The overflow teller opens lazily: only when both the
//!    Checking and Savings channels are full for both of those classes
//!    AND the pending queue holds at least half its configured capacity.
//!    Opening drains the pending queue into the overflow queue up to its
//!    room; after that the tick loop treats it as a normal channel.
//!
//! Every admission produces exactly one [`AdmissionOutcome`]; nothing is
//! ever silently lost. Stub-number order is preserved within each
//! container, but not across containers.

use crate::models::class::{AccountClass, OVERFLOW_CHANNEL};
use crate::models::event::{DropReason, Event, EventLog};
use crate::models::state::SimulationState;
use crate::models::transaction::Transaction;

/// Where an admitted transaction ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// Enqueued on a channel's input queue.
    Routed { channel: usize },

    /// Held in the shared pending queue.
    Pending,

    /// Enqueued on the overflow teller's queue.
    RoutedOverflow,

    /// Overflow tier reached but the overflow queue had no room (or the
    /// opening conditions were not met).
    DroppedOverflowFull,

    /// Pending queue already at this class's threshold.
    DroppedPendingFull,
}

/// Routing policy parameters and the two-tier overflow decision.
#[derive(Debug, Clone)]
pub struct AdmissionRouter {
    /// Configured pending-queue capacity; half of it gates overflow opening.
    pending_capacity: usize,
}

impl AdmissionRouter {
    /// Create a router with the configured pending capacity.
    pub fn new(pending_capacity: usize) -> Self {
        Self { pending_capacity }
    }

    /// Route one transaction, mutating queues and logging every decision.
    pub fn route(
        &self,
        state: &mut SimulationState,
        transaction: Transaction,
        tick: usize,
        log: &mut EventLog,
    ) -> AdmissionOutcome {
        let stub = transaction.stub();
        let home = transaction.class().home_channel();

        // Tier 1: home channel.
        if state.channel_mut(home).enqueue(transaction).is_ok() {
            log.log(Event::Routed {
                tick,
                stub,
                channel: home,
            });
            return AdmissionOutcome::Routed { channel: home };
        }

        // Tier 3 gate: pending saturated for every class.
        if state.pending().is_full_for_all_classes() {
            if !state.overflow_open() && self.should_open_overflow(state) {
                self.open_overflow(state, tick, log);
            }
            if state.overflow_open()
                && state.channel_mut(OVERFLOW_CHANNEL).enqueue(transaction).is_ok()
            {
                log.log(Event::RoutedOverflow { tick, stub });
                return AdmissionOutcome::RoutedOverflow;
            }
            let reason = if state.overflow_open() {
                DropReason::OverflowFull
            } else {
                DropReason::OverflowClosed
            };
            log.log(Event::Dropped { tick, stub, reason });
            return AdmissionOutcome::DroppedOverflowFull;
        }

        // Tier 2: pending queue, per-class threshold.
        match state.pending_mut().enqueue(transaction) {
            Ok(()) => {
                log.log(Event::SentToPending { tick, stub });
                AdmissionOutcome::Pending
            }
            Err(_) => {
                log.log(Event::Dropped {
                    tick,
                    stub,
                    reason: DropReason::PendingFull,
                });
                AdmissionOutcome::DroppedPendingFull
            }
        }
    }

    /// Overflow-opening policy.
    ///
    /// Both the Checking and Savings channels must be full when checked
    /// against both of those classes, and the pending queue must hold at
    /// least half its configured capacity.
    fn should_open_overflow(&self, state: &SimulationState) -> bool {
        let shared = [AccountClass::Checking, AccountClass::Savings];
        for class in shared {
            let queue = state.channel(class.home_channel()).queue();
            if shared.iter().any(|c| !queue.is_full(*c)) {
                return false;
            }
        }
        state.pending().len() >= self.pending_capacity / 2
    }

    /// Activate the overflow teller and drain pending into its queue.
    ///
    /// Idempotent from the caller's view; the tick loop never drains
    /// pending, so this is the only path out of the pending queue.
    pub fn open_overflow(
        &self,
        state: &mut SimulationState,
        tick: usize,
        log: &mut EventLog,
    ) {
        if state.overflow_open() {
            return;
        }
        state.open_overflow();

        let mut drained = 0;
        while let Some(front) = state.pending().front().copied() {
            if state.channel(OVERFLOW_CHANNEL).queue().is_full(front.class()) {
                break;
            }
            if state.pending_mut().dequeue().is_err() {
                break;
            }
            if state.channel_mut(OVERFLOW_CHANNEL).enqueue(front).is_err() {
                break;
            }
            drained += 1;
        }

        log.log(Event::OverflowOpened {
            tick,
            drained_from_pending: drained,
        });
    }
}
