use crate::observe::lifecycle::DEFAULT_CANCELLED_CAPACITY;

/// Configuration for the observing interceptors assembled by
/// [`build_observed_service`](crate::observe::build_observed_service).
///
/// Controls log verbosity, metrics recording and lifecycle validation for one
/// decorator layer.
#[derive(Debug, Clone)]
pub struct ObserveConfig {
    /// Name recorded in every log event and as the `layer` metrics label.
    pub layer_name: &'static str,
    /// Log each PROGRESS notification. Off by default; progress is chatty.
    pub log_progress: bool,
    /// Record lifecycle counters and durations through the `metrics` facade.
    pub metrics_enabled: bool,
    /// Track per-holder status and warn on out-of-order notifications.
    pub validate_lifecycle: bool,
    /// Cancelled holders the lifecycle validator remembers while awaiting a
    /// terminal status; the oldest half is evicted past this bound.
    pub cancelled_capacity: usize,
}

impl Default for ObserveConfig {
    fn default() -> Self {
        Self {
            layer_name: "intercept",
            log_progress: false,
            metrics_enabled: true,
            validate_lifecycle: true,
            cancelled_capacity: DEFAULT_CANCELLED_CAPACITY,
        }
    }
}
