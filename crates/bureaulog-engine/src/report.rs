use crate::catalog::REFERENCE_CATALOG;
use crate::classify::classify_path;
use crate::extract::{ExtractStats, Extractor, ParseFailure};
use crate::reconstruct::reconstruct_all;
use crate::registry::TransitionRegistry;
use bureaulog_types::{AgentPath, Classification, LogTimestamp, TransitionKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Exact,
    Partial,
    Invalid,
}

/// Classified path of one agent
#[derive(Debug, Clone, Serialize)]
pub struct AgentReport {
    pub path: AgentPath,
    pub outcome: Outcome,
    /// Matched reference label, absent for invalid paths
    pub reference: Option<&'static str>,
    /// Seconds between the last transition and the end of the log
    pub elapsed_seconds: Option<i64>,
}

impl AgentReport {
    fn new(
        path: AgentPath,
        classification: Classification<'static>,
        now: Option<LogTimestamp>,
    ) -> Self {
        let outcome = match classification {
            Classification::Exact(_) => Outcome::Exact,
            Classification::Partial(_) => Outcome::Partial,
            Classification::Invalid => Outcome::Invalid,
        };
        let elapsed_seconds = match (now, path.last_event()) {
            (Some(now), Some(last)) => {
                Some(now.signed_duration_since(last.timestamp).num_seconds())
            }
            _ => None,
        };
        Self {
            reference: classification.reference().map(|r| r.label),
            path,
            outcome,
            elapsed_seconds,
        }
    }

    /// Invalid and incomplete paths are worth a diagnostic line
    pub fn needs_attention(&self) -> bool {
        self.outcome != Outcome::Exact
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Completion {
    pub label: &'static str,
    pub count: usize,
}

/// Creation bookkeeping across all agents.
///
/// Counts are distinct agents per transition kind; an agent created then
/// neither confirmed nor failed is orphaned.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LifecycleSummary {
    pub created: usize,
    pub confirmed: usize,
    pub failed: usize,
    pub orphaned: i64,
    pub orphaned_percent: f64,
}

impl LifecycleSummary {
    pub fn from_registry(registry: &TransitionRegistry) -> Self {
        let created = registry.count(TransitionKind::ImmediateCreate)
            + registry.count(TransitionKind::DelayedCreate);
        let confirmed = registry.count(TransitionKind::CreateConfirmed);
        let failed = registry.count(TransitionKind::CreateFailed);
        let orphaned = created as i64 - confirmed as i64 - failed as i64;
        let orphaned_percent = if created == 0 {
            0.0
        } else {
            orphaned as f64 * 100.0 / created as f64
        };

        Self {
            created,
            confirmed,
            failed,
            orphaned,
            orphaned_percent,
        }
    }
}

/// Everything a front-end needs to print the outcome of one run
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Timestamp of the last timestamped line in the stream
    pub now: Option<LogTimestamp>,
    pub stats: ExtractStats,
    pub parse_failures: Vec<ParseFailure>,
    pub summary: LifecycleSummary,
    /// Every agent, ascending by id
    pub agents: Vec<AgentReport>,
    /// One entry per reference, in catalog order
    pub completions: Vec<Completion>,
}

impl Report {
    pub fn build(extractor: &Extractor) -> Self {
        let registry = extractor.registry();
        let now = extractor.last_timestamp();
        let paths = reconstruct_all(registry);
        tracing::info!(agents = paths.len(), "Checking");

        let mut completions: Vec<Completion> = REFERENCE_CATALOG
            .iter()
            .map(|r| Completion {
                label: r.label,
                count: 0,
            })
            .collect();

        let agents: Vec<AgentReport> = paths
            .into_iter()
            .map(|path| {
                let classification = classify_path(&path);
                if let Classification::Exact(reference) = classification
                    && let Some(slot) = completions.iter_mut().find(|c| c.label == reference.label)
                {
                    slot.count += 1;
                }
                AgentReport::new(path, classification, now)
            })
            .collect();

        Self {
            now,
            stats: extractor.stats(),
            parse_failures: extractor.parse_failures().to_vec(),
            summary: LifecycleSummary::from_registry(registry),
            agents,
            completions,
        }
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = &AgentReport> {
        self.agents.iter().filter(|a| a.needs_attention())
    }

    pub fn completion_count(&self, label: &str) -> usize {
        self.completions
            .iter()
            .find(|c| c.label == label)
            .map_or(0, |c| c.count)
    }
}
