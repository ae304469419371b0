use crate::registry::{DEFAULT_BUREAU_LOGGER, TransitionRegistry};
use crate::{Error, Result};
use bureaulog_types::{
    AgentId, LOG_TIMESTAMP_PATTERN, LogTimestamp, TransitionEvent, TransitionKind,
    parse_log_timestamp,
};
use regex::Regex;
use serde::Serialize;
use std::io::BufRead;

/// A transition line whose timestamp could not be parsed.
///
/// The match is discarded; the rest of the stream is still processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub sequence: u64,
    pub kind: TransitionKind,
    pub token: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    pub lines: u64,
    pub transitions: u64,
    pub superseded: u64,
    pub parse_failures: u64,
}

/// Single-pass extractor feeding a [`TransitionRegistry`].
///
/// Besides transitions it remembers the timestamp of the last line carrying
/// a valid timestamp token, which serves as "now" for elapsed-time reporting.
pub struct Extractor {
    registry: TransitionRegistry,
    timestamp_pattern: Regex,
    last_timestamp: Option<LogTimestamp>,
    parse_failures: Vec<ParseFailure>,
    stats: ExtractStats,
}

impl Extractor {
    pub fn new(logger: &str) -> Result<Self> {
        Ok(Self {
            registry: TransitionRegistry::new(logger)?,
            timestamp_pattern: Regex::new(LOG_TIMESTAMP_PATTERN)?,
            last_timestamp: None,
            parse_failures: Vec::new(),
            stats: ExtractStats::default(),
        })
    }

    pub fn with_default_logger() -> Result<Self> {
        Self::new(DEFAULT_BUREAU_LOGGER)
    }

    /// Read every line of `reader`, continuing the line numbering of earlier
    /// calls so several sources form one stream.
    ///
    /// Invalid UTF-8 is replaced rather than treated as a read failure.
    pub fn ingest<R: BufRead>(&mut self, mut reader: R, source: &str) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|error| Error::Stream {
                    source: source.to_string(),
                    error,
                })?;
            if read == 0 {
                break;
            }

            self.stats.lines += 1;
            let sequence = self.stats.lines;
            let line = String::from_utf8_lossy(&buf);
            self.process_line(line.trim_end_matches(['\n', '\r']), sequence)?;
        }
        Ok(())
    }

    /// Apply every transition pattern to one line.
    ///
    /// Returns the recorded event when the line is a well-formed transition.
    /// A non-numeric agent id is fatal; a bad timestamp only voids the match.
    pub fn process_line(&mut self, line: &str, sequence: u64) -> Result<Option<TransitionEvent>> {
        if let Some(token) = self.timestamp_pattern.find(line)
            && let Ok(ts) = parse_log_timestamp(token.as_str())
        {
            self.last_timestamp = Some(ts);
        }

        let matched = self.registry.matchers().iter().find_map(|matcher| {
            matcher
                .pattern()
                .captures(line)
                .map(|caps| (matcher.kind(), caps))
        });
        let Some((kind, caps)) = matched else {
            return Ok(None);
        };

        let raw_id = caps.name("id").map_or("", |m| m.as_str());
        let agent_id: AgentId = raw_id.parse().map_err(|_| Error::Extraction {
            sequence,
            kind,
            id: raw_id.to_string(),
        })?;

        let token = caps.name("time").map_or("", |m| m.as_str());
        let timestamp = match parse_log_timestamp(token) {
            Ok(ts) => ts,
            Err(err) => {
                tracing::debug!(sequence, %kind, %agent_id, "discarding transition: {}", err);
                self.parse_failures.push(ParseFailure {
                    sequence,
                    kind,
                    token: token.to_string(),
                });
                self.stats.parse_failures += 1;
                return Ok(None);
            }
        };

        let event = TransitionEvent {
            kind,
            agent_id,
            timestamp,
            sequence,
        };
        self.stats.transitions += 1;
        if let Some(previous) = self.registry.record(event.clone()) {
            tracing::trace!(
                %kind,
                %agent_id,
                previous = previous.sequence,
                sequence,
                "superseding earlier occurrence"
            );
            self.stats.superseded += 1;
        }
        Ok(Some(event))
    }

    pub fn registry(&self) -> &TransitionRegistry {
        &self.registry
    }

    pub fn last_timestamp(&self) -> Option<LogTimestamp> {
        self.last_timestamp
    }

    pub fn parse_failures(&self) -> &[ParseFailure] {
        &self.parse_failures
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }
}
