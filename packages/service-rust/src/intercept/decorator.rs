//! Service decorator: stands in for an inner [`ActionService`] and runs an
//! [`ActionInterceptor`] around submission, cancellation and status delivery.

use std::sync::Arc;

use intercept_core::{ActionHolder, ActionKind, ActionService, ExecutionError, SharedSink};

use super::chain::InterceptedSink;
use super::interceptor::{ActionInterceptor, HookBridge, StatusInterceptor, SubmitDecision};

// ---------------------------------------------------------------------------
// InterceptingService
// ---------------------------------------------------------------------------

/// Decorator that wraps an inner service with interception hooks.
///
/// - `submit` runs the submit hook; on [`SubmitDecision::Suppress`] the inner
///   service is not called, otherwise the same holder is forwarded.
/// - `cancel` always runs the cancel hook, then always forwards.
/// - `install_sink` wraps the given sink in an [`InterceptedSink`] and installs
///   that single wrapped sink on both this decorator and the inner service.
///
/// Stacked decorators run submit hooks outermost-first and status hooks
/// innermost-first.
pub struct InterceptingService<A, S, I: ?Sized> {
    inner: S,
    interceptor: Arc<I>,
    status_hooks: Arc<dyn StatusInterceptor<A>>,
    sink: Option<SharedSink<A>>,
}

impl<A, S, I> InterceptingService<A, S, I>
where
    A: 'static,
    I: ActionInterceptor<A> + ?Sized + 'static,
{
    /// Wraps `inner` with `interceptor`.
    #[must_use]
    pub fn new(inner: S, interceptor: I) -> Self
    where
        I: Sized,
    {
        Self::from_shared(inner, Arc::new(interceptor))
    }

    /// Wraps `inner` with an interceptor that may be shared with other layers.
    #[must_use]
    pub fn from_shared(inner: S, interceptor: Arc<I>) -> Self {
        let status_hooks: Arc<dyn StatusInterceptor<A>> =
            Arc::new(HookBridge::new(Arc::clone(&interceptor)));
        Self {
            inner,
            interceptor,
            status_hooks,
            sink: None,
        }
    }
}

impl<A, S, I: ?Sized> InterceptingService<A, S, I> {
    /// Returns a reference to the inner service.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns a mutable reference to the inner service.
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consumes the decorator, returning the inner service.
    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn interceptor(&self) -> &Arc<I> {
        &self.interceptor
    }

    /// The intercepted sink shared with the inner service, once installed.
    pub fn installed_sink(&self) -> Option<&SharedSink<A>> {
        self.sink.as_ref()
    }
}

impl<A, S, I> ActionService<A> for InterceptingService<A, S, I>
where
    A: Send + Sync + 'static,
    S: ActionService<A>,
    I: ActionInterceptor<A> + ?Sized + 'static,
{
    fn supported_kind(&self) -> ActionKind {
        self.inner.supported_kind()
    }

    fn submit(&self, holder: Arc<ActionHolder<A>>) -> Result<(), ExecutionError> {
        let Some(sink) = &self.sink else {
            return Err(ExecutionError::SinkNotInstalled {
                kind: self.inner.supported_kind(),
            });
        };

        match self.interceptor.intercept_submit(&holder, sink) {
            SubmitDecision::Suppress => {
                tracing::debug!(
                    holder = %holder.id(),
                    kind = %self.inner.supported_kind(),
                    "submission handled by interceptor"
                );
                Ok(())
            }
            SubmitDecision::Forward => self.inner.submit(holder),
        }
    }

    fn cancel(&self, holder: &Arc<ActionHolder<A>>) {
        self.interceptor.intercept_cancel(holder);
        self.inner.cancel(holder);
    }

    fn install_sink(&mut self, sink: SharedSink<A>) {
        let wrapped: SharedSink<A> =
            Arc::new(InterceptedSink::new(sink, Arc::clone(&self.status_hooks)));
        self.inner.install_sink(Arc::clone(&wrapped));
        self.sink = Some(wrapped);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
