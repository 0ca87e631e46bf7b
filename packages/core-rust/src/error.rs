//! Errors produced by execution services.

use crate::types::ActionKind;

/// Failure produced by an execution service.
///
/// Travels on two channels that never overlap: returned synchronously from
/// `ActionService::submit` when delegation fails, or delivered through
/// `StatusSink::on_fail` as the terminal status of an action. Interception
/// layers relay both unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("no status sink installed on `{kind}` service")]
    SinkNotInstalled { kind: ActionKind },
    #[error("action rejected: {message}")]
    Rejected { message: String },
    #[error("action cancelled")]
    Cancelled,
    #[error("action failed: {message}")]
    Failed { message: String },
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ExecutionError {
    /// Shorthand for [`ExecutionError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Shorthand for [`ExecutionError::Rejected`].
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}
