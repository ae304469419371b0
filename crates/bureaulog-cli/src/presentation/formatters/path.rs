use super::time::describe_elapsed;
use bureaulog_engine::{AgentReport, Outcome};
use chrono::Duration;

/// `Agent 9: Pending, Destroy (3 minutes ago)`
///
/// The elapsed part is left out when the log had no usable timestamp.
pub fn describe_path(agent: &AgentReport) -> String {
    let names: Vec<&str> = agent.path.events.iter().map(|e| e.kind.label()).collect();
    let names = names.join(", ");

    match agent.elapsed_seconds {
        Some(seconds) if !agent.path.is_empty() => format!(
            "{}: {} ({} ago)",
            agent.path.label,
            names,
            describe_elapsed(Duration::seconds(seconds))
        ),
        _ => format!("{}: {}", agent.path.label, names),
    }
}

/// `exact Normal`, `partial Aborted` or `none`
pub fn describe_outcome(agent: &AgentReport) -> String {
    match (agent.outcome, agent.reference) {
        (Outcome::Exact, Some(label)) => format!("exact {}", label),
        (Outcome::Partial, Some(label)) => format!("partial {}", label),
        _ => "none".to_string(),
    }
}
