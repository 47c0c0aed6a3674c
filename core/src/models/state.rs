//! Simulation state
//!
//! Complete state of the teller floor: four primary channels, the lazily
//! activated overflow channel, and the shared pending queue. The state is
//! single-owner and single-threaded; the orchestrator is its only mutator.
//!
//! # Critical Invariants
//!
//! 1. Every admitted transaction lives in exactly one container at any
//!    instant (channel queue, in-service slot, or completion stack).
//! 2. No channel queue ever exceeds its per-class threshold.
//! 3. The overflow channel never serves work before it is opened.

use serde::{Deserialize, Serialize};

use crate::models::channel::Channel;
use crate::models::class::{NUM_PRIMARY_CHANNELS, OVERFLOW_CHANNEL};
use crate::models::queue::{BoundedQueue, CapacityRule, DEFAULT_PHYSICAL_CAPACITY};

/// All channels plus the shared pending queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    /// Channels 0..=3 are the primary tellers, 4 is the overflow teller.
    channels: Vec<Channel>,

    /// Shared holding queue for items whose home channel was full.
    pending: BoundedQueue,

    /// Whether the overflow teller has been activated.
    overflow_open: bool,
}

impl SimulationState {
    /// Create the initial state: all channels idle, overflow closed.
    ///
    /// `overflow_capacity` is the flat threshold of the overflow teller's
    /// queue; `stack_capacity` bounds every completion stack.
    pub fn new(overflow_capacity: usize, stack_capacity: usize) -> Self {
        let mut channels = Vec::with_capacity(NUM_PRIMARY_CHANNELS + 1);
        for index in 0..NUM_PRIMARY_CHANNELS {
            channels.push(Channel::new(
                index,
                DEFAULT_PHYSICAL_CAPACITY,
                CapacityRule::PerClass,
                stack_capacity,
            ));
        }
        channels.push(Channel::new(
            OVERFLOW_CHANNEL,
            overflow_capacity + 1,
            CapacityRule::Flat(overflow_capacity),
            stack_capacity,
        ));

        Self {
            channels,
            pending: BoundedQueue::new(DEFAULT_PHYSICAL_CAPACITY, CapacityRule::PerClass),
            overflow_open: false,
        }
    }

    /// Channel by index (0..=4).
    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    /// Mutable channel by index (0..=4).
    pub fn channel_mut(&mut self, index: usize) -> &mut Channel {
        &mut self.channels[index]
    }

    /// All channels, primaries first.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Shared pending queue (read-only).
    pub fn pending(&self) -> &BoundedQueue {
        &self.pending
    }

    /// Shared pending queue (mutable).
    pub fn pending_mut(&mut self) -> &mut BoundedQueue {
        &mut self.pending
    }

    /// Whether the overflow teller is active.
    pub fn overflow_open(&self) -> bool {
        self.overflow_open
    }

    /// Mark the overflow teller as active. Idempotent.
    pub fn open_overflow(&mut self) {
        self.overflow_open = true;
    }

    /// Indices of channels the scheduler advances this tick.
    pub fn active_channel_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..NUM_PRIMARY_CHANNELS).collect();
        if self.overflow_open {
            indices.push(OVERFLOW_CHANNEL);
        }
        indices
    }

    /// Total items waiting in channel queues (pending excluded).
    pub fn total_queued(&self) -> usize {
        self.channels.iter().map(|c| c.queue().len()).sum()
    }
}
