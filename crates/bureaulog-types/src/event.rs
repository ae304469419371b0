use crate::{Error, LogTimestamp, TransitionKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric object id (`oid`) of a bureau agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(u64);

impl AgentId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for AgentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAgentId(s.to_string()));
        }
        s.parse()
            .map(AgentId)
            .map_err(|_| Error::InvalidAgentId(s.to_string()))
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One transition observed in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub kind: TransitionKind,

    pub agent_id: AgentId,

    /// Millisecond resolution, may tie between lines
    pub timestamp: LogTimestamp,

    /// 1-based line number in the concatenated input stream.
    /// Authoritative ordering key.
    pub sequence: u64,
}
