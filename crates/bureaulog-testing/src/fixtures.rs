//! Synthetic bureau logs.
//!
//! Lines look like what the bureau registry writes:
//! `2008/03/14 09:00:00:000 INFO com.threerings.narya.bureau: Creating agent [oid=9, bureau=game-1]`

use bureaulog_types::{LOG_TIMESTAMP_FORMAT, LogTimestamp, TransitionKind};
use chrono::{Duration, NaiveDate};

pub const DEFAULT_LOGGER: &str = "com.threerings.narya.bureau";

/// Render a timestamp in the bureau log format
pub fn format_timestamp(ts: LogTimestamp) -> String {
    ts.format(LOG_TIMESTAMP_FORMAT).to_string()
}

/// Fluent builder for log files.
///
/// Every timestamped line advances the clock by `step` (one second by default).
///
/// # Example
/// ```
/// use bureaulog_testing::LogBuilder;
/// use bureaulog_types::TransitionKind;
///
/// let log = LogBuilder::new()
///     .transition(TransitionKind::PendingCreate, 9)
///     .transition(TransitionKind::Destroy, 9)
///     .build();
/// assert_eq!(log.lines().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LogBuilder {
    logger: String,
    clock: LogTimestamp,
    step: Duration,
    lines: Vec<String>,
}

impl Default for LogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogBuilder {
    pub fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(2008, 3, 14)
            .and_then(|d| d.and_hms_milli_opt(9, 0, 0, 0))
            .expect("valid start timestamp");
        Self {
            logger: DEFAULT_LOGGER.to_string(),
            clock: start,
            step: Duration::seconds(1),
            lines: Vec::new(),
        }
    }

    pub fn with_logger(mut self, logger: &str) -> Self {
        self.logger = logger.to_string();
        self
    }

    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    /// Move the clock forward without writing a line
    pub fn advance(mut self, by: Duration) -> Self {
        self.clock += by;
        self
    }

    /// Timestamp the next line will carry
    pub fn clock(&self) -> LogTimestamp {
        self.clock
    }

    pub fn transition(self, kind: TransitionKind, id: u64) -> Self {
        let ts = format_timestamp(self.clock);
        self.transition_raw(kind, &ts, &id.to_string())
    }

    /// Transition line with caller-provided timestamp token and id text
    pub fn transition_raw(mut self, kind: TransitionKind, timestamp: &str, id: &str) -> Self {
        let line = format!(
            "{} INFO {}: {} [oid={}, bureau=game-1]",
            timestamp,
            self.logger,
            kind.log_message(),
            id
        );
        self.lines.push(line);
        self.clock += self.step;
        self
    }

    /// Timestamped line that matches no transition
    pub fn noise(mut self, message: &str) -> Self {
        let line = format!(
            "{} INFO {}: {}",
            format_timestamp(self.clock),
            self.logger,
            message
        );
        self.lines.push(line);
        self.clock += self.step;
        self
    }

    /// Line copied verbatim
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn build(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
