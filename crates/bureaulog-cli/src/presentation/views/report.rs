use crate::presentation::formatters::{describe_outcome, describe_path};
use anyhow::Result;
use bureaulog_engine::{LifecycleSummary, Outcome, Report};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub verbose: bool,
    pub summary: bool,
    pub color: bool,
}

/// Plain text report: optional summary, per-agent diagnostics, then the
/// completion tally in catalog order.
pub fn render_plain(report: &Report, options: &ReportOptions) -> Vec<String> {
    let mut lines = Vec::new();

    if options.summary {
        lines.push(format_summary(&report.summary));
    }

    for agent in &report.agents {
        let description = describe_path(agent);

        if options.verbose {
            lines.push(format!("Checking {}", agent.path.agent_id));
            lines.push(description.clone());
            lines.push(describe_outcome(agent));
        }

        match agent.outcome {
            Outcome::Invalid => {
                let line = format!("Invalid path: {}", description);
                lines.push(if options.color {
                    line.red().to_string()
                } else {
                    line
                });
            }
            Outcome::Partial => {
                let line = format!("Incomplete path: {}", description);
                lines.push(if options.color {
                    line.yellow().to_string()
                } else {
                    line
                });
            }
            Outcome::Exact => {}
        }
    }

    for completion in &report.completions {
        lines.push(format!(
            "Path {} completed {} times",
            completion.label, completion.count
        ));
    }

    lines
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn format_summary(summary: &LifecycleSummary) -> String {
    format!(
        "{} created, {} started, {} failed, {} orphaned, {:.1}%",
        summary.created,
        summary.confirmed,
        summary.failed,
        summary.orphaned,
        summary.orphaned_percent
    )
}
