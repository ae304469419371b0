use crate::registry::TransitionRegistry;
use bureaulog_types::{AgentId, AgentPath, TransitionEvent, TransitionKind};

/// Determine the sequence of transitions taken by one agent.
///
/// Kinds are collected in declaration order, then stably sorted by log
/// position, so equal positions keep declaration order.
pub fn reconstruct_path(registry: &TransitionRegistry, agent_id: AgentId) -> AgentPath {
    let mut events: Vec<TransitionEvent> = TransitionKind::ALL
        .iter()
        .filter_map(|&kind| registry.get(kind, agent_id).cloned())
        .collect();
    events.sort_by_key(|event| event.sequence);
    AgentPath::new(agent_id, events)
}

/// Paths for every agent seen in the registry, in ascending id order
pub fn reconstruct_all(registry: &TransitionRegistry) -> Vec<AgentPath> {
    registry
        .agent_ids()
        .into_iter()
        .map(|id| reconstruct_path(registry, id))
        .collect()
}
