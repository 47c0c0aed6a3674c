//! Consolidation reporter
//!
//! Drains every channel's completion stack into one list, orders it by
//! stub number, and computes per-channel summary statistics. Draining is
//! the point: consolidation empties the stacks, so a second call right
//! after returns an empty report.

use serde::{Deserialize, Serialize};

use crate::models::state::SimulationState;
use crate::models::transaction::Transaction;

/// Completed-work statistics for one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelStats {
    /// Channel index.
    pub channel: usize,

    /// Transactions completed by this channel.
    pub completed: usize,

    /// Sum of their service durations in minutes.
    pub total_minutes: u64,

    /// Integer average duration; 0 when nothing completed.
    pub average_minutes: u64,
}

/// Result of draining and ordering all completed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// All completed transactions, ascending by stub number.
    pub transactions: Vec<Transaction>,

    /// Per-channel statistics, one entry per channel in index order.
    pub channels: Vec<ChannelStats>,
}

impl Report {
    /// Total completed transactions across all channels.
    pub fn total_completed(&self) -> usize {
        self.transactions.len()
    }
}

/// Drain all completion stacks and build the consolidated report.
///
/// Pops each stack until empty, channel by channel; stacks are LIFO so
/// the merge has no cross-channel order by construction, which is why the
/// combined list is sorted by stub number before returning. Stub numbers
/// are unique, so the sort needs no tie-break.
pub fn consolidate(state: &mut SimulationState) -> Report {
    let mut transactions = Vec::new();
    let mut channels = Vec::with_capacity(state.channels().len());

    for index in 0..state.channels().len() {
        let drained = state.channel_mut(index).drain_completed();
        let completed = drained.len();
        let total_minutes: u64 = drained.iter().map(|t| t.duration_minutes() as u64).sum();
        let average_minutes = if completed == 0 {
            0
        } else {
            total_minutes / completed as u64
        };
        channels.push(ChannelStats {
            channel: index,
            completed,
            total_minutes,
            average_minutes,
        });
        transactions.extend(drained);
    }

    transactions.sort_by_key(|t| t.stub());

    Report {
        transactions,
        channels,
    }
}
