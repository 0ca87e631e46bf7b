//! Status interception chain: a sink that runs hooks before delegating.

use std::sync::Arc;

use intercept_core::{ActionHolder, ExecutionError, SharedSink, StatusSink};

use super::interceptor::StatusInterceptor;

/// Sink wrapper that runs the matching [`StatusInterceptor`] hook before each
/// notification, then forwards the unmodified notification to the wrapped
/// sink.
///
/// Hooks are observational: every notification always reaches the wrapped
/// sink, with the same holder, progress value and error value.
pub struct InterceptedSink<A> {
    sink: SharedSink<A>,
    interceptor: Arc<dyn StatusInterceptor<A>>,
}

impl<A> InterceptedSink<A> {
    /// Wraps `sink` so that `interceptor` sees every notification first.
    #[must_use]
    pub fn new(sink: SharedSink<A>, interceptor: Arc<dyn StatusInterceptor<A>>) -> Self {
        Self { sink, interceptor }
    }

    /// The sink notifications are forwarded to.
    #[must_use]
    pub fn delegate(&self) -> &SharedSink<A> {
        &self.sink
    }
}

impl<A> StatusSink<A> for InterceptedSink<A> {
    fn on_start(&self, holder: &Arc<ActionHolder<A>>) {
        self.interceptor.intercept_start(holder);
        self.sink.on_start(holder);
    }

    fn on_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8) {
        self.interceptor.intercept_progress(holder, progress);
        self.sink.on_progress(holder, progress);
    }

    fn on_success(&self, holder: &Arc<ActionHolder<A>>) {
        self.interceptor.intercept_success(holder);
        self.sink.on_success(holder);
    }

    fn on_fail(&self, holder: &Arc<ActionHolder<A>>, error: ExecutionError) {
        self.interceptor.intercept_fail(holder, &error);
        self.sink.on_fail(holder, error);
    }
}
