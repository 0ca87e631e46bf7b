//! Lifecycle validation: detects notifications that break per-holder ordering.
//!
//! For every holder, START must come first, PROGRESS may follow any number of
//! times, and exactly one terminal SUCCESS or FAIL ends the lifecycle.
//! Cancellation may end a lifecycle without any terminal status.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use intercept_core::{ActionHolder, ActionStatus, ExecutionError, HolderId};

use crate::intercept::ActionInterceptor;

/// Default number of cancelled holders remembered while awaiting a terminal
/// status.
pub const DEFAULT_CANCELLED_CAPACITY: usize = 1024;

/// Observational interceptor that tracks the last status of each in-flight
/// holder and reports ordering violations.
///
/// Violations are logged at `warn` and counted; notifications are never
/// blocked. A holder is forgotten on its terminal event, so any later
/// notification for it counts as a violation.
///
/// A cancelled holder moves to a bounded set of cancelled holders: a terminal
/// status after cancellation is accepted and forgets it, and when the set
/// exceeds its capacity the oldest half is evicted. Holders that neither
/// terminate nor get cancelled stay tracked until [`release`](Self::release).
#[derive(Debug)]
pub struct LifecycleValidator {
    layer: &'static str,
    in_flight: DashMap<HolderId, ActionStatus>,
    /// Cancelled holders with their last status and cancellation sequence.
    cancelled: DashMap<HolderId, (ActionStatus, u64)>,
    cancelled_capacity: usize,
    cancel_seq: AtomicU64,
    violations: AtomicU64,
}

impl LifecycleValidator {
    #[must_use]
    pub fn new(layer: &'static str) -> Self {
        Self::with_cancelled_capacity(layer, DEFAULT_CANCELLED_CAPACITY)
    }

    /// Creates a validator remembering at most `capacity` cancelled holders.
    #[must_use]
    pub fn with_cancelled_capacity(layer: &'static str, capacity: usize) -> Self {
        Self {
            layer,
            in_flight: DashMap::new(),
            cancelled: DashMap::new(),
            cancelled_capacity: capacity.max(1),
            cancel_seq: AtomicU64::new(0),
            violations: AtomicU64::new(0),
        }
    }

    /// Number of ordering violations observed so far.
    pub fn violations(&self) -> u64 {
        self.violations.load(Ordering::Relaxed)
    }

    /// Number of holders that started, were not cancelled, and have not
    /// reached a terminal status.
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Number of cancelled holders still awaiting a terminal status.
    pub fn cancelled(&self) -> usize {
        self.cancelled.len()
    }

    /// Stops tracking `id`, e.g. once the dispatch layer discards its holder.
    pub fn release(&self, id: HolderId) {
        self.in_flight.remove(&id);
        self.cancelled.remove(&id);
    }

    fn violation(&self, id: HolderId, status: ActionStatus, reason: &'static str) {
        self.violations.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(layer = self.layer, holder = %id, %status, reason, "lifecycle violation");
    }

    fn advance(&self, id: HolderId, status: ActionStatus) {
        // Lock order: `in_flight` shard, then `cancelled` shard.
        match self.in_flight.entry(id) {
            Entry::Vacant(entry) => match self.cancelled.entry(id) {
                Entry::Occupied(mut cancelled) => {
                    if status == ActionStatus::Start {
                        self.violation(id, status, "duplicate start");
                    } else if status.is_terminal() {
                        cancelled.remove();
                    } else {
                        cancelled.get_mut().0 = status;
                    }
                }
                Entry::Vacant(_) => {
                    if status == ActionStatus::Start {
                        entry.insert(status);
                    } else {
                        self.violation(id, status, "no open lifecycle for holder");
                    }
                }
            },
            Entry::Occupied(mut entry) => {
                if status == ActionStatus::Start {
                    self.violation(id, status, "duplicate start");
                } else if status.is_terminal() {
                    entry.remove();
                } else {
                    entry.insert(status);
                }
            }
        }
    }

    fn mark_cancelled(&self, id: HolderId) {
        let Entry::Occupied(entry) = self.in_flight.entry(id) else {
            return;
        };
        let seq = self.cancel_seq.fetch_add(1, Ordering::Relaxed);
        self.cancelled.insert(id, (*entry.get(), seq));
        entry.remove();

        if self.cancelled.len() > self.cancelled_capacity {
            self.evict_oldest_cancelled(seq);
        }
    }

    fn evict_oldest_cancelled(&self, newest: u64) {
        let keep = (self.cancelled_capacity / 2).max(1) as u64;
        let cutoff = newest.saturating_sub(keep);
        let before = self.cancelled.len();
        self.cancelled.retain(|_, (_, seq)| *seq > cutoff);
        tracing::debug!(
            layer = self.layer,
            evicted = before.saturating_sub(self.cancelled.len()),
            "evicted cancelled holders without terminal status"
        );
    }
}

impl<A> ActionInterceptor<A> for LifecycleValidator {
    fn intercept_cancel(&self, holder: &Arc<ActionHolder<A>>) {
        self.mark_cancelled(holder.id());
    }

    fn intercept_start(&self, holder: &Arc<ActionHolder<A>>) {
        self.advance(holder.id(), ActionStatus::Start);
    }

    fn intercept_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8) {
        if progress > 100 {
            self.violation(holder.id(), ActionStatus::Progress(progress), "progress above 100");
        }
        self.advance(holder.id(), ActionStatus::Progress(progress));
    }

    fn intercept_success(&self, holder: &Arc<ActionHolder<A>>) {
        self.advance(holder.id(), ActionStatus::Success);
    }

    fn intercept_fail(&self, holder: &Arc<ActionHolder<A>>, _error: &ExecutionError) {
        self.advance(holder.id(), ActionStatus::Fail);
    }
}
