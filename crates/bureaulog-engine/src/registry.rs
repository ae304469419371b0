use crate::Result;
use bureaulog_types::{AgentId, LOG_TIMESTAMP_PATTERN, TransitionEvent, TransitionKind};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};

/// Logger name the bureau registry writes under
pub const DEFAULT_BUREAU_LOGGER: &str = "com.threerings.narya.bureau";

/// One transition kind bound to its log pattern, with the latest occurrence
/// seen for every agent.
#[derive(Debug)]
pub struct Matcher {
    kind: TransitionKind,
    pattern: Regex,
    occurrences: HashMap<AgentId, TransitionEvent>,
}

impl Matcher {
    fn new(kind: TransitionKind, logger: &str) -> Result<Self> {
        let pattern = Regex::new(&transition_pattern(kind, logger))?;
        Ok(Self {
            kind,
            pattern,
            occurrences: HashMap::new(),
        })
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Number of distinct agents that went through this transition
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn get(&self, agent_id: AgentId) -> Option<&TransitionEvent> {
        self.occurrences.get(&agent_id)
    }
}

/// Build the line pattern for one transition kind.
///
/// `<timestamp> <LEVEL> <logger>: <message> [oid=<id>`. The id capture is
/// permissive on purpose; the extractor rejects anything non-numeric.
pub fn transition_pattern(kind: TransitionKind, logger: &str) -> String {
    format!(
        r"(?P<time>{}) \w+ {}: {} \[oid=(?P<id>[^\],\s]*)",
        LOG_TIMESTAMP_PATTERN,
        regex::escape(logger),
        regex::escape(kind.log_message())
    )
}

/// Per-kind store of the last occurrence of every `(kind, agent)` pair.
///
/// Matchers are kept in [`TransitionKind::ALL`] order.
#[derive(Debug)]
pub struct TransitionRegistry {
    matchers: Vec<Matcher>,
}

impl TransitionRegistry {
    pub fn new(logger: &str) -> Result<Self> {
        let matchers = TransitionKind::ALL
            .iter()
            .map(|&kind| Matcher::new(kind, logger))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers })
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn matcher(&self, kind: TransitionKind) -> &Matcher {
        // matchers are built from TransitionKind::ALL, so the index is the declaration index
        &self.matchers[kind as usize]
    }

    /// Store `event`, returning the occurrence it supersedes, if any
    pub fn record(&mut self, event: TransitionEvent) -> Option<TransitionEvent> {
        let matcher = &mut self.matchers[event.kind as usize];
        matcher.occurrences.insert(event.agent_id, event)
    }

    pub fn get(&self, kind: TransitionKind, agent_id: AgentId) -> Option<&TransitionEvent> {
        self.matcher(kind).get(agent_id)
    }

    /// Distinct agents that went through `kind`
    pub fn count(&self, kind: TransitionKind) -> usize {
        self.matcher(kind).len()
    }

    /// Every agent with at least one recorded transition, ascending
    pub fn agent_ids(&self) -> Vec<AgentId> {
        let ids: BTreeSet<AgentId> = self
            .matchers
            .iter()
            .flat_map(|m| m.occurrences.keys().copied())
            .collect();
        ids.into_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.iter().all(Matcher::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bureaulog_types::parse_log_timestamp;

    fn event(kind: TransitionKind, id: u64, sequence: u64) -> TransitionEvent {
        TransitionEvent {
            kind,
            agent_id: AgentId::new(id),
            timestamp: parse_log_timestamp("2008/03/14 09:26:53:589").unwrap(),
            sequence,
        }
    }

    #[test]
    fn test_matchers_follow_declaration_order() {
        let registry = TransitionRegistry::new(DEFAULT_BUREAU_LOGGER).unwrap();
        let kinds: Vec<_> = registry.matchers().iter().map(|m| m.kind()).collect();
        assert_eq!(kinds, TransitionKind::ALL.to_vec());
        for kind in TransitionKind::ALL {
            assert_eq!(registry.matcher(kind).kind(), kind);
        }
    }

    #[test]
    fn test_record_supersedes_same_pair() {
        let mut registry = TransitionRegistry::new(DEFAULT_BUREAU_LOGGER).unwrap();
        assert!(registry.record(event(TransitionKind::Destroy, 5, 1)).is_none());
        let old = registry.record(event(TransitionKind::Destroy, 5, 2));
        assert_eq!(old.map(|e| e.sequence), Some(1));
        assert_eq!(
            registry
                .get(TransitionKind::Destroy, AgentId::new(5))
                .map(|e| e.sequence),
            Some(2)
        );
        assert_eq!(registry.count(TransitionKind::Destroy), 1);
    }

    #[test]
    fn test_agent_ids_union_sorted() {
        let mut registry = TransitionRegistry::new(DEFAULT_BUREAU_LOGGER).unwrap();
        assert!(registry.is_empty());
        registry.record(event(TransitionKind::Destroy, 10, 1));
        registry.record(event(TransitionKind::PendingCreate, 9, 2));
        registry.record(event(TransitionKind::PendingCreate, 10, 3));
        registry.record(event(TransitionKind::CreateFailed, 100, 4));

        let ids: Vec<u64> = registry.agent_ids().iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![9, 10, 100]);
    }

    #[test]
    fn test_pattern_escapes_logger() {
        let pattern = transition_pattern(TransitionKind::DelayedCreate, "a.b");
        assert!(pattern.contains(r"a\.b: Creating agent"));
    }
}
