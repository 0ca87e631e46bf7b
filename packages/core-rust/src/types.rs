//! Identity and status types shared by every layer of a dispatch stack.

use std::fmt;

use uuid::Uuid;

/// Kind of action an execution service accepts.
///
/// Dispatch layers route actions to services by comparing kinds, so a
/// decorator must always report the kind of the service it wraps.
/// Kinds are built through [`ActionKind::new`] only:
///
/// ```compile_fail
/// let kind = intercept_core::ActionKind("raw");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionKind(&'static str);

impl ActionKind {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Unique identity of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HolderId(Uuid);

impl HolderId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for HolderId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Lifecycle status reported for an in-flight action.
///
/// Statuses are never stored by the interception layer; they describe the
/// notifications a `StatusSink` receives. The error carried by a failure is
/// delivered separately, so `Fail` has no payload here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Start,
    /// Progress percentage in `0..=100`.
    Progress(u8),
    Success,
    Fail,
}

impl ActionStatus {
    /// `Success` and `Fail` end the lifecycle; nothing may follow them.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Fail)
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("START"),
            Self::Progress(percent) => write!(f, "PROGRESS({percent})"),
            Self::Success => f.write_str("SUCCESS"),
            Self::Fail => f.write_str("FAIL"),
        }
    }
}
