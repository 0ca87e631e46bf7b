//! Interception of an action's lifecycle around an execution service.
//!
//! 1. **Contracts** (`interceptor`): six-hook `ActionInterceptor`, four-hook
//!    `StatusInterceptor`, and the `SubmitDecision` returned by submit hooks
//! 2. **Chain** (`chain`): `InterceptedSink` runs status hooks before the real sink
//! 3. **Decorator** (`decorator`): `InterceptingService` wraps an inner service
//! 4. **Layer** (`layer`): `InterceptLayer` stacks decorators via `tower::ServiceBuilder`
//! 5. **Composite** (`composite`): several interceptors inside one decorator

pub mod chain;
pub mod composite;
pub mod decorator;
pub mod interceptor;
pub mod layer;

pub use chain::InterceptedSink;
pub use composite::CompositeInterceptor;
pub use decorator::InterceptingService;
pub use interceptor::{ActionInterceptor, HookBridge, StatusInterceptor, SubmitDecision};
pub use layer::InterceptLayer;
