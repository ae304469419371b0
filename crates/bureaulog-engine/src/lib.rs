// Engine - lifecycle reconstruction for bureau agents
// Lines go into the Extractor, which fills the TransitionRegistry; paths are
// then rebuilt per agent and checked against the reference catalog.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod extract;
pub mod reconstruct;
pub mod registry;
pub mod report;

pub use catalog::{REFERENCE_CATALOG, find_reference};
pub use classify::{classify, classify_path};
pub use error::{Error, Result};
pub use extract::{ExtractStats, Extractor, ParseFailure};
pub use reconstruct::{reconstruct_all, reconstruct_path};
pub use registry::{DEFAULT_BUREAU_LOGGER, Matcher, TransitionRegistry};
pub use report::{AgentReport, Completion, LifecycleSummary, Outcome, Report};

use std::io::BufRead;

// Façade API - what the CLI uses

/// Run a complete check over a single stream
pub fn check_stream<R: BufRead>(reader: R, source: &str, logger: &str) -> Result<Report> {
    let mut extractor = Extractor::new(logger)?;
    extractor.ingest(reader, source)?;
    Ok(Report::build(&extractor))
}
