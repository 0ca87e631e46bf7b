//! Intercept Service — decorators that intercept every transition of an
//! action submitted to an execution service: submission, cancellation, start,
//! progress, success and failure.

pub mod config;
pub mod intercept;
pub mod observe;
pub mod telemetry;

pub use config::ObserveConfig;
pub use intercept::{
    ActionInterceptor, CompositeInterceptor, InterceptLayer, InterceptedSink,
    InterceptingService, StatusInterceptor, SubmitDecision,
};
pub use observe::{build_observed_service, LifecycleValidator, ObservedService};
pub use telemetry::{init_tracing, LogFormat};
