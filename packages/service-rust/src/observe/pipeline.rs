//! Pipeline composition: one decorator running caller interceptors plus the
//! observing interceptors selected by [`ObserveConfig`].

use std::sync::Arc;

use intercept_core::ActionService;

use super::lifecycle::LifecycleValidator;
use super::logging::LoggingInterceptor;
use super::stats::MetricsInterceptor;
use crate::config::ObserveConfig;
use crate::intercept::{ActionInterceptor, CompositeInterceptor, InterceptingService};

/// A decorator whose hooks are a [`CompositeInterceptor`].
pub type ObservedService<A, S> = InterceptingService<A, S, CompositeInterceptor<A>>;

/// Wrap `inner` in a single decorator observing every transition.
///
/// Interceptor order inside the decorator:
/// 1. `extra` -- caller-supplied interceptors, in the given order; the only
///    ones that may suppress a submission
/// 2. `LoggingInterceptor` -- always present
/// 3. `MetricsInterceptor` -- if `metrics_enabled`
/// 4. `LifecycleValidator` -- if `validate_lifecycle`
///
/// A submission suppressed by an `extra` interceptor is therefore neither
/// logged nor counted as submitted by this layer.
#[must_use]
pub fn build_observed_service<A, S>(
    inner: S,
    extra: Vec<Arc<dyn ActionInterceptor<A>>>,
    config: &ObserveConfig,
) -> ObservedService<A, S>
where
    A: Send + Sync + 'static,
    S: ActionService<A>,
{
    let mut composite = CompositeInterceptor::new(extra);
    composite.add(Arc::new(LoggingInterceptor::from_config(config)));
    if config.metrics_enabled {
        composite.add(Arc::new(MetricsInterceptor::new(config.layer_name)));
    }
    if config.validate_lifecycle {
        composite.add(Arc::new(LifecycleValidator::with_cancelled_capacity(
            config.layer_name,
            config.cancelled_capacity,
        )));
    }
    InterceptingService::new(inner, composite)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
