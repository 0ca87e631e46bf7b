//! Execution-time container binding one action instance to its submission.

use std::time::{Duration, Instant};

use crate::types::HolderId;

/// Binds one action payload to a single submission.
///
/// The dispatch layer creates exactly one holder per submitted action and
/// shares it as `Arc<ActionHolder<A>>` with the service stack. Interception
/// layers only borrow or clone that `Arc`; the holder itself is immutable, so
/// hooks may correlate notifications through [`ActionHolder::id`] without any
/// synchronization.
#[derive(Debug)]
pub struct ActionHolder<A> {
    id: HolderId,
    action: A,
    created_at: Instant,
}

impl<A> ActionHolder<A> {
    /// Wraps `action` with a freshly generated id.
    #[must_use]
    pub fn new(action: A) -> Self {
        Self::with_id(HolderId::generate(), action)
    }

    /// Wraps `action` with a caller-chosen id.
    #[must_use]
    pub fn with_id(id: HolderId, action: A) -> Self {
        Self {
            id,
            action,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> HolderId {
        self.id
    }

    #[must_use]
    pub fn action(&self) -> &A {
        &self.action
    }

    /// Time elapsed since the holder was created.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}
