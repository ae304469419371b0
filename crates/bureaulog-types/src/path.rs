use crate::{AgentId, TransitionEvent, TransitionKind};
use serde::Serialize;

/// Transitions observed for one agent, ordered by log position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentPath {
    pub label: String,
    pub agent_id: AgentId,
    pub events: Vec<TransitionEvent>,
}

impl AgentPath {
    pub fn new(agent_id: AgentId, events: Vec<TransitionEvent>) -> Self {
        Self {
            label: format!("Agent {}", agent_id),
            agent_id,
            events,
        }
    }

    pub fn transitions(&self) -> Vec<TransitionKind> {
        self.events.iter().map(|e| e.kind).collect()
    }

    pub fn last_event(&self) -> Option<&TransitionEvent> {
        self.events.last()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A named, known-good lifecycle shape
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ReferencePath {
    pub label: &'static str,
    pub transitions: &'static [TransitionKind],
}

/// Outcome of comparing an [`AgentPath`] against the reference catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// Path is exactly this reference: the lifecycle completed
    Exact(&'a ReferencePath),
    /// Path is a prefix of this reference: the lifecycle is still in progress
    Partial(&'a ReferencePath),
    /// Path matches no reference
    Invalid,
}

impl<'a> Classification<'a> {
    pub fn reference(&self) -> Option<&'a ReferencePath> {
        match *self {
            Classification::Exact(r) | Classification::Partial(r) => Some(r),
            Classification::Invalid => None,
        }
    }
}
