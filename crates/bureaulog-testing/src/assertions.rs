//! Assertions over plain-text reports.

use anyhow::{Context, Result};

/// Assert the tally line for `label` reports `expected` completions.
pub fn assert_completion(stdout: &str, label: &str, expected: usize) -> Result<()> {
    let prefix = format!("Path {} completed ", label);
    let line = stdout
        .lines()
        .find(|l| l.starts_with(&prefix))
        .with_context(|| format!("No tally line for path {}", label))?;

    let expected_line = format!("Path {} completed {} times", label, expected);
    if line != expected_line {
        anyhow::bail!("Expected '{}', got '{}'", expected_line, line);
    }
    Ok(())
}

/// Assert the tally lists exactly `labels`, once each, in this order.
pub fn assert_tally_order(stdout: &str, labels: &[&str]) -> Result<()> {
    let tally: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("Path "))
        .filter_map(|l| l.split(" completed ").next())
        .collect();

    if tally != labels {
        anyhow::bail!("Expected tally order {:?}, got {:?}", labels, tally);
    }
    Ok(())
}

/// Assert a diagnostic line (`Invalid` or `Incomplete`) exists for agent `id`.
pub fn assert_diagnostic(stdout: &str, kind: &str, id: u64) -> Result<()> {
    let prefix = format!("{} path: Agent {}:", kind, id);
    if !stdout.lines().any(|l| l.starts_with(&prefix)) {
        anyhow::bail!("No '{}' diagnostic for agent {} in:\n{}", kind, id, stdout);
    }
    Ok(())
}

/// Assert no diagnostic line mentions agent `id`.
pub fn assert_no_diagnostic(stdout: &str, id: u64) -> Result<()> {
    let needle = format!(" path: Agent {}:", id);
    if let Some(line) = stdout.lines().find(|l| l.contains(&needle)) {
        anyhow::bail!("Unexpected diagnostic for agent {}: {}", id, line);
    }
    Ok(())
}
