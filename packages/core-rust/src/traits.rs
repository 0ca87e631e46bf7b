use std::sync::Arc;

use crate::error::ExecutionError;
use crate::holder::ActionHolder;
use crate::types::ActionKind;

/// Receiver of lifecycle notifications for submitted actions.
///
/// A service reports, per holder, `on_start` first, any number of
/// `on_progress`, then exactly one terminal `on_success` or `on_fail`.
/// Notifications for different holders may arrive concurrently from worker
/// threads; notifications for the same holder never do.
///
/// Used as `Arc<dyn StatusSink<A>>` (see [`SharedSink`]).
pub trait StatusSink<A>: Send + Sync {
    /// The action started executing.
    fn on_start(&self, holder: &Arc<ActionHolder<A>>);

    /// The action reports `progress` percent (`0..=100`) done.
    fn on_progress(&self, holder: &Arc<ActionHolder<A>>, progress: u8);

    /// The action finished successfully. Terminal.
    fn on_success(&self, holder: &Arc<ActionHolder<A>>);

    /// The action failed with `error`. Terminal.
    fn on_fail(&self, holder: &Arc<ActionHolder<A>>, error: ExecutionError);
}

/// A status sink shared between the layers of a service stack.
pub type SharedSink<A> = Arc<dyn StatusSink<A>>;

/// Component that performs the work of an action and reports its status.
///
/// The dispatch layer installs a sink once, before the first submission, and
/// then drives `submit`/`cancel`. Status flows back asynchronously through the
/// installed sink.
pub trait ActionService<A>: Send + Sync {
    /// Kind of actions this service accepts.
    fn supported_kind(&self) -> ActionKind;

    /// Starts processing `holder`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot accept the action. Failures
    /// that happen after acceptance are reported through the sink instead.
    fn submit(&self, holder: Arc<ActionHolder<A>>) -> Result<(), ExecutionError>;

    /// Requests cancellation of `holder`. Best effort; the outcome, if any, is
    /// reported through the sink.
    fn cancel(&self, holder: &Arc<ActionHolder<A>>);

    /// Installs the sink that receives status notifications.
    fn install_sink(&mut self, sink: SharedSink<A>);
}

impl<A, T> ActionService<A> for Box<T>
where
    T: ActionService<A> + ?Sized,
{
    fn supported_kind(&self) -> ActionKind {
        (**self).supported_kind()
    }

    fn submit(&self, holder: Arc<ActionHolder<A>>) -> Result<(), ExecutionError> {
        (**self).submit(holder)
    }

    fn cancel(&self, holder: &Arc<ActionHolder<A>>) {
        (**self).cancel(holder);
    }

    fn install_sink(&mut self, sink: SharedSink<A>) {
        (**self).install_sink(sink);
    }
}
