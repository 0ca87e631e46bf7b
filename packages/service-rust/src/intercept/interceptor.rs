//! Interceptor contracts plugged into an [`InterceptingService`](super::InterceptingService).
//!
//! [`ActionInterceptor`] supplies all six hooks a decorator exposes.
//! [`StatusInterceptor`] is the narrower four-hook contract consumed by the
//! status interception chain; the decorator adapts the former to the latter
//! with [`HookBridge`].

use std::marker::PhantomData;
use std::sync::Arc;

use intercept_core::{ActionHolder, ExecutionError, SharedSink};

/// Outcome of the submit hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Delegate the holder to the inner service unchanged.
    Forward,
    /// The hook handled the submission; the inner service is not called.
    Suppress,
}

impl SubmitDecision {
    #[must_use]
    pub const fn is_suppressed(self) -> bool {
        matches!(self, Self::Suppress)
    }
}

impl From<bool> for SubmitDecision {
    /// `true` means "handled, suppress normal processing".
    fn from(handled: bool) -> Self {
        if handled {
            Self::Suppress
        } else {
            Self::Forward
        }
    }
}

/// Hooks run by a decorator around every transition of an action.
///
/// All hooks run synchronously on the caller's thread (submit, cancel) or on
/// the inner service's notification thread (status hooks). Blocking in a
/// status hook blocks the inner service.
///
/// Only [`intercept_submit`](Self::intercept_submit) can change control flow.
/// A hook that returns [`SubmitDecision::Suppress`] takes over the holder: if
/// it never reports a terminal status through `sink`, the holder stays
/// pending for every layer above.
///
/// Used as `Arc<dyn ActionInterceptor<A>>` or as a concrete type.
pub trait ActionInterceptor<A>: Send + Sync {
    /// Called before the holder is delegated to the inner service.
    ///
    /// `sink` is this layer's intercepted sink. A suppressing hook reports
    /// any outcome for the holder through it rather than by returning an
    /// error.
    fn intercept_submit(
        &self,
        _holder: &Arc<ActionHolder<A>>,
        _sink: &SharedSink<A>,
    ) -> SubmitDecision {
        SubmitDecision::Forward
    }

    /// Called before cancellation is forwarded. Cannot prevent forwarding.
    fn intercept_cancel(&self, _holder: &Arc<ActionHolder<A>>) {}

    /// Called before a START notification reaches the sink.
    fn intercept_start(&self, _holder: &Arc<ActionHolder<A>>) {}

    /// Called before a PROGRESS notification reaches the sink.
    fn intercept_progress(&self, _holder: &Arc<ActionHolder<A>>, _progress: u8) {}

    /// Called before a SUCCESS notification reaches the sink.
    fn intercept_success(&self, _holder: &Arc<ActionHolder<A>>) {}

    /// Called before a FAIL notification reaches the sink.
    fn intercept_fail(&self, _holder: &Arc<ActionHolder<A>>, _error: &ExecutionError) {}
}

/// Observational hooks run by an [`InterceptedSink`](super::InterceptedSink)
/// before each notification is delivered. None of them can suppress delivery.
pub trait StatusInterceptor<A>: Send + Sync {
    fn intercept_start(&self, holder: &Arc<ActionHolder<A>>);

    fn intercept_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8);

    fn intercept_success(&self, holder: &Arc<ActionHolder<A>>);

    fn intercept_fail(&self, holder: &Arc<ActionHolder<A>>, error: &ExecutionError);
}

/// Exposes the status hooks of an [`ActionInterceptor`] as a
/// [`StatusInterceptor`].
///
/// Built once per decorator and shared by every sink it wraps.
pub struct HookBridge<A, I: ?Sized> {
    hooks: Arc<I>,
    _action: PhantomData<fn(&A)>,
}

impl<A, I: ?Sized> HookBridge<A, I> {
    #[must_use]
    pub fn new(hooks: Arc<I>) -> Self {
        Self {
            hooks,
            _action: PhantomData,
        }
    }
}

impl<A, I> StatusInterceptor<A> for HookBridge<A, I>
where
    I: ActionInterceptor<A> + ?Sized,
{
    fn intercept_start(&self, holder: &Arc<ActionHolder<A>>) {
        self.hooks.intercept_start(holder);
    }

    fn intercept_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8) {
        self.hooks.intercept_progress(holder, progress);
    }

    fn intercept_success(&self, holder: &Arc<ActionHolder<A>>) {
        self.hooks.intercept_success(holder);
    }

    fn intercept_fail(&self, holder: &Arc<ActionHolder<A>>, error: &ExecutionError) {
        self.hooks.intercept_fail(holder, error);
    }
}
