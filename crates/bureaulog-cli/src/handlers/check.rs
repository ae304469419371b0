use crate::config::Config;
use crate::presentation::{ReportOptions, render_json, render_plain};
use crate::types::OutputFormat;
use anyhow::Result;
use bureaulog_engine::{Error, Extractor, Report};
use is_terminal::IsTerminal;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

const STDIN_SOURCE: &str = "<stdin>";

pub fn handle(config: &Config, files: &[PathBuf]) -> Result<()> {
    let mut extractor = Extractor::new(&config.logger)?;

    tracing::info!("Reading log");
    if files.is_empty() {
        extractor.ingest(io::stdin().lock(), STDIN_SOURCE)?;
    } else {
        for file in files {
            ingest_file(&mut extractor, file)?;
        }
    }

    let report = Report::build(&extractor);
    log_stats(&report);

    let stdout = io::stdout();
    let color = config.color && stdout.is_terminal();
    let mut out = stdout.lock();

    match config.format {
        OutputFormat::Plain => {
            let options = ReportOptions {
                verbose: config.verbose,
                summary: config.summary,
                color,
            };
            for line in render_plain(&report, &options) {
                writeln!(out, "{}", line)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(&report)?)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn ingest_file(extractor: &mut Extractor, path: &Path) -> Result<()> {
    if path == Path::new("-") {
        extractor.ingest(io::stdin().lock(), STDIN_SOURCE)?;
        return Ok(());
    }

    let source = path.display().to_string();
    let file = File::open(path).map_err(|error| Error::Stream {
        source: source.clone(),
        error,
    })?;
    extractor.ingest(BufReader::new(file), &source)?;
    Ok(())
}

fn log_stats(report: &Report) {
    let stats = report.stats;
    tracing::info!(
        lines = stats.lines,
        transitions = stats.transitions,
        superseded = stats.superseded,
        "log read"
    );

    if stats.parse_failures > 0 {
        tracing::warn!(
            "{} transition line(s) discarded for unparsable timestamps (use --verbose for details)",
            stats.parse_failures
        );
    }
}
