//! Tower layer producing [`InterceptingService`] decorators.

use std::marker::PhantomData;
use std::sync::Arc;

use tower::Layer;

use super::decorator::InterceptingService;
use super::interceptor::ActionInterceptor;

// ---------------------------------------------------------------------------
// InterceptLayer
// ---------------------------------------------------------------------------

/// Tower layer that wraps a service in an [`InterceptingService`].
///
/// Every service produced by one layer shares the same interceptor. Layers
/// compose with `tower::ServiceBuilder`; the first layer added becomes the
/// outermost decorator:
///
/// ```ignore
/// let stack = ServiceBuilder::new()
///     .layer(InterceptLayer::new(audit))   // submit hook runs first
///     .layer(InterceptLayer::new(cache))
///     .service(executor);
/// ```
pub struct InterceptLayer<A, I: ?Sized> {
    interceptor: Arc<I>,
    _action: PhantomData<fn(&A)>,
}

impl<A, I> InterceptLayer<A, I> {
    /// Create a new `InterceptLayer` around `interceptor`.
    #[must_use]
    pub fn new(interceptor: I) -> Self {
        Self::from_shared(Arc::new(interceptor))
    }
}

impl<A, I: ?Sized> InterceptLayer<A, I> {
    /// Create a new `InterceptLayer` around an already shared interceptor.
    #[must_use]
    pub fn from_shared(interceptor: Arc<I>) -> Self {
        Self {
            interceptor,
            _action: PhantomData,
        }
    }
}

impl<A, I: ?Sized> Clone for InterceptLayer<A, I> {
    fn clone(&self) -> Self {
        Self::from_shared(Arc::clone(&self.interceptor))
    }
}

impl<A, S, I> Layer<S> for InterceptLayer<A, I>
where
    A: 'static,
    I: ActionInterceptor<A> + ?Sized + 'static,
{
    type Service = InterceptingService<A, S, I>;

    fn layer(&self, inner: S) -> Self::Service {
        InterceptingService::from_shared(inner, Arc::clone(&self.interceptor))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
