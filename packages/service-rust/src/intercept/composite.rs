//! Composite interceptor that fans hooks out to several interceptors.

use std::sync::Arc;

use intercept_core::{ActionHolder, ExecutionError, SharedSink};

use super::interceptor::{ActionInterceptor, SubmitDecision};

/// Runs a list of interceptors inside a single decorator.
///
/// Interceptors are consulted in registration order. The submit hook stops
/// at the first interceptor that suppresses; interceptors after it are not
/// consulted for that submission. Cancel and status hooks always reach every
/// interceptor.
pub struct CompositeInterceptor<A> {
    interceptors: Vec<Arc<dyn ActionInterceptor<A>>>,
}

impl<A> CompositeInterceptor<A> {
    /// Creates a composite interceptor with the given list of interceptors.
    #[must_use]
    pub fn new(interceptors: Vec<Arc<dyn ActionInterceptor<A>>>) -> Self {
        Self { interceptors }
    }

    /// Adds an interceptor after construction.
    pub fn add(&mut self, interceptor: Arc<dyn ActionInterceptor<A>>) {
        self.interceptors.push(interceptor);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl<A> Default for CompositeInterceptor<A> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<A> ActionInterceptor<A> for CompositeInterceptor<A> {
    fn intercept_submit(
        &self,
        holder: &Arc<ActionHolder<A>>,
        sink: &SharedSink<A>,
    ) -> SubmitDecision {
        let handled = self
            .interceptors
            .iter()
            .any(|interceptor| interceptor.intercept_submit(holder, sink).is_suppressed());
        SubmitDecision::from(handled)
    }

    fn intercept_cancel(&self, holder: &Arc<ActionHolder<A>>) {
        for interceptor in &self.interceptors {
            interceptor.intercept_cancel(holder);
        }
    }

    fn intercept_start(&self, holder: &Arc<ActionHolder<A>>) {
        for interceptor in &self.interceptors {
            interceptor.intercept_start(holder);
        }
    }

    fn intercept_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8) {
        for interceptor in &self.interceptors {
            interceptor.intercept_progress(holder, progress);
        }
    }

    fn intercept_success(&self, holder: &Arc<ActionHolder<A>>) {
        for interceptor in &self.interceptors {
            interceptor.intercept_success(holder);
        }
    }

    fn intercept_fail(&self, holder: &Arc<ActionHolder<A>>, error: &ExecutionError) {
        for interceptor in &self.interceptors {
            interceptor.intercept_fail(holder, error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use intercept_core::StatusSink;

    use super::*;

    struct NullSink;

    impl StatusSink<u32> for NullSink {
        fn on_start(&self, _: &Arc<ActionHolder<u32>>) {}
        fn on_progress(&self, _: &Arc<ActionHolder<u32>>, _: u8) {}
        fn on_success(&self, _: &Arc<ActionHolder<u32>>) {}
        fn on_fail(&self, _: &Arc<ActionHolder<u32>>, _: ExecutionError) {}
    }

    /// Test interceptor that counts how many times each hook is called.
    #[derive(Default)]
    struct CountingInterceptor {
        suppress: bool,
        submit_count: AtomicUsize,
        cancel_count: AtomicUsize,
        start_count: AtomicUsize,
        progress_count: AtomicUsize,
        success_count: AtomicUsize,
        fail_count: AtomicUsize,
    }

    impl CountingInterceptor {
        fn suppressing() -> Self {
            Self {
                suppress: true,
                ..Self::default()
            }
        }
    }

    impl ActionInterceptor<u32> for CountingInterceptor {
        fn intercept_submit(
            &self,
            _: &Arc<ActionHolder<u32>>,
            _: &SharedSink<u32>,
        ) -> SubmitDecision {
            self.submit_count.fetch_add(1, Ordering::Relaxed);
            SubmitDecision::from(self.suppress)
        }
        fn intercept_cancel(&self, _: &Arc<ActionHolder<u32>>) {
            self.cancel_count.fetch_add(1, Ordering::Relaxed);
        }
        fn intercept_start(&self, _: &Arc<ActionHolder<u32>>) {
            self.start_count.fetch_add(1, Ordering::Relaxed);
        }
        fn intercept_progress(&self, _: &Arc<ActionHolder<u32>>, _: u8) {
            self.progress_count.fetch_add(1, Ordering::Relaxed);
        }
        fn intercept_success(&self, _: &Arc<ActionHolder<u32>>) {
            self.success_count.fetch_add(1, Ordering::Relaxed);
        }
        fn intercept_fail(&self, _: &Arc<ActionHolder<u32>>, _: &ExecutionError) {
            self.fail_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn holder_and_sink() -> (Arc<ActionHolder<u32>>, SharedSink<u32>) {
        (Arc::new(ActionHolder::new(1)), Arc::new(NullSink))
    }

    #[test]
    fn empty_composite_forwards() {
        let composite = CompositeInterceptor::<u32>::default();
        let (holder, sink) = holder_and_sink();

        assert!(composite.is_empty());
        assert_eq!(composite.intercept_submit(&holder, &sink), SubmitDecision::Forward);
        composite.intercept_cancel(&holder);
        composite.intercept_start(&holder);
        composite.intercept_progress(&holder, 10);
        composite.intercept_success(&holder);
        composite.intercept_fail(&holder, &ExecutionError::Cancelled);
    }

    #[test]
    fn all_interceptors_receive_status_and_cancel_hooks() {
        let first = Arc::new(CountingInterceptor::default());
        let second = Arc::new(CountingInterceptor::suppressing());
        let composite = CompositeInterceptor::new(vec![
            Arc::clone(&first) as Arc<dyn ActionInterceptor<u32>>,
            Arc::clone(&second) as Arc<dyn ActionInterceptor<u32>>,
        ]);
        let (holder, _) = holder_and_sink();

        composite.intercept_cancel(&holder);
        composite.intercept_start(&holder);
        composite.intercept_progress(&holder, 30);
        composite.intercept_progress(&holder, 60);
        composite.intercept_success(&holder);
        composite.intercept_fail(&holder, &ExecutionError::failed("x"));

        for counter in [&first, &second] {
            assert_eq!(counter.cancel_count.load(Ordering::Relaxed), 1);
            assert_eq!(counter.start_count.load(Ordering::Relaxed), 1);
            assert_eq!(counter.progress_count.load(Ordering::Relaxed), 2);
            assert_eq!(counter.success_count.load(Ordering::Relaxed), 1);
            assert_eq!(counter.fail_count.load(Ordering::Relaxed), 1);
        }
    }

    #[test]
    fn submit_stops_at_first_suppressing_interceptor() {
        let first = Arc::new(CountingInterceptor::default());
        let blocker = Arc::new(CountingInterceptor::suppressing());
        let last = Arc::new(CountingInterceptor::default());
        let composite = CompositeInterceptor::new(vec![
            Arc::clone(&first) as Arc<dyn ActionInterceptor<u32>>,
            Arc::clone(&blocker) as Arc<dyn ActionInterceptor<u32>>,
            Arc::clone(&last) as Arc<dyn ActionInterceptor<u32>>,
        ]);
        let (holder, sink) = holder_and_sink();

        assert_eq!(composite.intercept_submit(&holder, &sink), SubmitDecision::Suppress);
        assert_eq!(first.submit_count.load(Ordering::Relaxed), 1);
        assert_eq!(blocker.submit_count.load(Ordering::Relaxed), 1);
        assert_eq!(last.submit_count.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn add_interceptor_after_construction() {
        let mut composite = CompositeInterceptor::default();
        let counter = Arc::new(CountingInterceptor::default());
        let (holder, sink) = holder_and_sink();

        composite.intercept_start(&holder);
        assert_eq!(counter.start_count.load(Ordering::Relaxed), 0);

        composite.add(Arc::clone(&counter) as Arc<dyn ActionInterceptor<u32>>);
        composite.intercept_start(&holder);
        assert_eq!(composite.len(), 1);
        assert_eq!(counter.start_count.load(Ordering::Relaxed), 1);
        assert_eq!(composite.intercept_submit(&holder, &sink), SubmitDecision::Forward);
    }
}
