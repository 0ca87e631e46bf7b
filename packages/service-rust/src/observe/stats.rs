//! Metrics interceptor: lifecycle counters and durations via the `metrics` facade.
//!
//! Without an installed recorder every call is a no-op.

use std::sync::Arc;

use intercept_core::{ActionHolder, ExecutionError, SharedSink};

use crate::intercept::{ActionInterceptor, SubmitDecision};

pub const SUBMITTED_TOTAL: &str = "intercept_submitted_total";
pub const CANCELLED_TOTAL: &str = "intercept_cancelled_total";
pub const STARTED_TOTAL: &str = "intercept_started_total";
pub const SUCCEEDED_TOTAL: &str = "intercept_succeeded_total";
pub const FAILED_TOTAL: &str = "intercept_failed_total";
pub const ACTION_DURATION_SECONDS: &str = "intercept_action_duration_seconds";

/// Interceptor that counts transitions per layer and records the holder's
/// age on its terminal event. Never suppresses.
#[derive(Debug, Clone)]
pub struct MetricsInterceptor {
    layer: &'static str,
}

impl MetricsInterceptor {
    #[must_use]
    pub fn new(layer: &'static str) -> Self {
        Self { layer }
    }

    fn record_duration<A>(&self, holder: &ActionHolder<A>, outcome: &'static str) {
        metrics::histogram!(
            ACTION_DURATION_SECONDS,
            "layer" => self.layer,
            "outcome" => outcome
        )
        .record(holder.age().as_secs_f64());
    }
}

impl<A> ActionInterceptor<A> for MetricsInterceptor {
    fn intercept_submit(
        &self,
        _holder: &Arc<ActionHolder<A>>,
        _sink: &SharedSink<A>,
    ) -> SubmitDecision {
        metrics::counter!(SUBMITTED_TOTAL, "layer" => self.layer).increment(1);
        SubmitDecision::Forward
    }

    fn intercept_cancel(&self, _holder: &Arc<ActionHolder<A>>) {
        metrics::counter!(CANCELLED_TOTAL, "layer" => self.layer).increment(1);
    }

    fn intercept_start(&self, _holder: &Arc<ActionHolder<A>>) {
        metrics::counter!(STARTED_TOTAL, "layer" => self.layer).increment(1);
    }

    fn intercept_success(&self, holder: &Arc<ActionHolder<A>>) {
        metrics::counter!(SUCCEEDED_TOTAL, "layer" => self.layer).increment(1);
        self.record_duration(holder, "success");
    }

    fn intercept_fail(&self, holder: &Arc<ActionHolder<A>>, _error: &ExecutionError) {
        metrics::counter!(FAILED_TOTAL, "layer" => self.layer).increment(1);
        self.record_duration(holder, "fail");
    }
}
