use bureaulog_types::TransitionKind;
use std::fmt;

/// Result type for bureaulog-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors raised while extracting transitions from a log stream.
///
/// Per-line timestamp problems are not errors: they are recorded as
/// [`crate::ParseFailure`]s and the run continues.
#[derive(Debug)]
pub enum Error {
    /// A transition pattern failed to compile
    Pattern(regex::Error),

    /// A transition line carried a missing or non-numeric agent id
    Extraction {
        sequence: u64,
        kind: TransitionKind,
        id: String,
    },

    /// The input stream could not be opened or read
    Stream {
        source: String,
        error: std::io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pattern(err) => write!(f, "Pattern error: {}", err),
            Error::Extraction { sequence, kind, id } => write!(
                f,
                "Extraction error at line {}: '{}' transition has invalid agent id '{}'",
                sequence, kind, id
            ),
            Error::Stream { source, error } => {
                write!(f, "Stream error reading {}: {}", source, error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Pattern(err) => Some(err),
            Error::Stream { error, .. } => Some(error),
            Error::Extraction { .. } => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Pattern(err)
    }
}
