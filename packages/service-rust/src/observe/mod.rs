//! Observing interceptors and the pipeline that assembles them.
//!
//! - [`logging`]: structured `tracing` events per transition
//! - [`stats`]: lifecycle counters and durations via `metrics`
//! - [`lifecycle`]: per-holder ordering validation
//! - [`pipeline`]: composes them into one decorator

pub mod lifecycle;
pub mod logging;
pub mod pipeline;
pub mod stats;

pub use lifecycle::LifecycleValidator;
pub use logging::LoggingInterceptor;
pub use stats::MetricsInterceptor;
pub use pipeline::{build_observed_service, ObservedService};
