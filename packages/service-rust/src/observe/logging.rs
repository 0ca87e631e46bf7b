//! Logging interceptor: one `tracing` event per lifecycle transition.

use std::sync::Arc;

use intercept_core::{ActionHolder, ExecutionError, SharedSink};

use crate::config::ObserveConfig;
use crate::intercept::{ActionInterceptor, SubmitDecision};

/// Interceptor that records each transition as a structured `tracing` event.
///
/// Submit, cancel and status hooks log at `debug`, failures at `warn`.
/// Progress is logged at `trace` only when enabled. Never suppresses.
#[derive(Debug, Clone)]
pub struct LoggingInterceptor {
    layer: &'static str,
    log_progress: bool,
}

impl LoggingInterceptor {
    #[must_use]
    pub fn new(layer: &'static str, log_progress: bool) -> Self {
        Self {
            layer,
            log_progress,
        }
    }

    #[must_use]
    pub fn from_config(config: &ObserveConfig) -> Self {
        Self::new(config.layer_name, config.log_progress)
    }
}

impl<A> ActionInterceptor<A> for LoggingInterceptor {
    fn intercept_submit(
        &self,
        holder: &Arc<ActionHolder<A>>,
        _sink: &SharedSink<A>,
    ) -> SubmitDecision {
        tracing::debug!(layer = self.layer, holder = %holder.id(), "action submitted");
        SubmitDecision::Forward
    }

    fn intercept_cancel(&self, holder: &Arc<ActionHolder<A>>) {
        tracing::debug!(layer = self.layer, holder = %holder.id(), "action cancel requested");
    }

    fn intercept_start(&self, holder: &Arc<ActionHolder<A>>) {
        tracing::debug!(layer = self.layer, holder = %holder.id(), "action started");
    }

    fn intercept_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8) {
        if self.log_progress {
            tracing::trace!(
                layer = self.layer,
                holder = %holder.id(),
                progress,
                "action progress"
            );
        }
    }

    fn intercept_success(&self, holder: &Arc<ActionHolder<A>>) {
        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = holder.age().as_millis() as u64;
        tracing::debug!(
            layer = self.layer,
            holder = %holder.id(),
            elapsed_ms,
            "action succeeded"
        );
    }

    fn intercept_fail(&self, holder: &Arc<ActionHolder<A>>, error: &ExecutionError) {
        #[allow(clippy::cast_possible_truncation)]
        let elapsed_ms = holder.age().as_millis() as u64;
        tracing::warn!(
            layer = self.layer,
            holder = %holder.id(),
            elapsed_ms,
            error = %error,
            "action failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use intercept_core::StatusSink;
    use parking_lot::Mutex;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::*;

    type Events = Arc<Mutex<Vec<(Level, String)>>>;

    /// Layer recording the level and message of every event.
    struct CaptureLayer {
        events: Events,
    }

    struct MessageVisitor(Option<String>);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = Some(format!("{value:?}"));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(None);
            event.record(&mut visitor);
            if let Some(message) = visitor.0 {
                self.events.lock().push((*event.metadata().level(), message));
            }
        }
    }

    fn capture_lifecycle(interceptor: &LoggingInterceptor) -> Vec<(Level, String)> {
        let events: Events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            events: Arc::clone(&events),
        });
        let holder = Arc::new(ActionHolder::new("payload".to_string()));

        tracing::subscriber::with_default(subscriber, || {
            interceptor.intercept_start(&holder);
            interceptor.intercept_progress(&holder, 50);
            interceptor.intercept_fail(&holder, &ExecutionError::failed("disk full"));
        });

        let captured = events.lock().clone();
        captured
    }

    fn level_of(events: &[(Level, String)], message: &str) -> Option<Level> {
        events
            .iter()
            .find(|(_, logged)| logged == message)
            .map(|(level, _)| *level)
    }

    struct NullSink;

    impl StatusSink<String> for NullSink {
        fn on_start(&self, _: &Arc<ActionHolder<String>>) {}
        fn on_progress(&self, _: &Arc<ActionHolder<String>>, _: u8) {}
        fn on_success(&self, _: &Arc<ActionHolder<String>>) {}
        fn on_fail(&self, _: &Arc<ActionHolder<String>>, _: ExecutionError) {}
    }

    #[test]
    fn logging_never_suppresses() {
        let interceptor = LoggingInterceptor::from_config(&ObserveConfig {
            log_progress: true,
            ..ObserveConfig::default()
        });
        let holder = Arc::new(ActionHolder::new("payload".to_string()));
        let sink: SharedSink<String> = Arc::new(NullSink);

        assert_eq!(
            interceptor.intercept_submit(&holder, &sink),
            SubmitDecision::Forward
        );
        interceptor.intercept_cancel(&holder);
        interceptor.intercept_start(&holder);
        interceptor.intercept_progress(&holder, 42);
        interceptor.intercept_success(&holder);
        interceptor.intercept_fail(&holder, &ExecutionError::Cancelled);
    }

    #[test]
    fn from_config_takes_layer_settings() {
        let interceptor = LoggingInterceptor::from_config(&ObserveConfig {
            layer_name: "cache",
            ..ObserveConfig::default()
        });
        assert_eq!(interceptor.layer, "cache");
        assert!(!interceptor.log_progress);
    }

    #[test]
    fn progress_is_skipped_unless_enabled() {
        let quiet = capture_lifecycle(&LoggingInterceptor::new("test", false));
        assert_eq!(level_of(&quiet, "action progress"), None);
        assert_eq!(level_of(&quiet, "action started"), Some(Level::DEBUG));

        let verbose = capture_lifecycle(&LoggingInterceptor::new("test", true));
        assert_eq!(level_of(&verbose, "action progress"), Some(Level::TRACE));
    }

    #[test]
    fn failures_log_at_warn() {
        let events = capture_lifecycle(&LoggingInterceptor::new("test", false));
        assert_eq!(level_of(&events, "action failed"), Some(Level::WARN));
    }
}
