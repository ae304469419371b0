use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle transition of a bureau agent, as announced by one log message.
///
/// Declaration order is significant: path reconstruction walks the kinds in
/// this order before sorting by log position, so ties keep this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Bureau not ready yet, creation is queued
    PendingCreate,
    /// Bureau ready, createAgent sent right away
    ImmediateCreate,
    /// Queued agent sent once its bureau came up
    DelayedCreate,
    /// Bureau acknowledged the creation
    CreateConfirmed,
    /// Bureau reported that creation failed
    CreateFailed,
    /// Server asked for the agent to be destroyed
    Destroy,
    /// Bureau acknowledged the destruction
    DestroyConfirmed,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 7] = [
        TransitionKind::PendingCreate,
        TransitionKind::ImmediateCreate,
        TransitionKind::DelayedCreate,
        TransitionKind::CreateConfirmed,
        TransitionKind::CreateFailed,
        TransitionKind::Destroy,
        TransitionKind::DestroyConfirmed,
    ];

    /// Human readable name used in path descriptions
    pub fn label(self) -> &'static str {
        match self {
            TransitionKind::PendingCreate => "Pending",
            TransitionKind::ImmediateCreate => "Immediate Creation",
            TransitionKind::DelayedCreate => "Delayed Creation",
            TransitionKind::CreateConfirmed => "Confirmed created",
            TransitionKind::CreateFailed => "Failed creation",
            TransitionKind::Destroy => "Destroy",
            TransitionKind::DestroyConfirmed => "Confirmed destruction",
        }
    }

    /// Message the bureau registry logs when this transition happens
    pub fn log_message(self) -> &'static str {
        match self {
            TransitionKind::PendingCreate => "Bureau not ready, pending agent",
            TransitionKind::ImmediateCreate => "Bureau ready, sending createAgent",
            TransitionKind::DelayedCreate => "Creating agent",
            TransitionKind::CreateConfirmed => "Agent creation confirmed",
            TransitionKind::CreateFailed => "Agent creation failed",
            TransitionKind::Destroy => "Destroying agent",
            TransitionKind::DestroyConfirmed => "Agent destruction confirmed",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
