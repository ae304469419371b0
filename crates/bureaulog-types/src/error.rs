use std::fmt;

/// Result type for bureaulog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Timestamp token is not a valid `YYYY/MM/DD HH:MM:SS:mmm` date/time
    InvalidTimestamp(String),

    /// Agent identifier is empty or not a non-negative integer
    InvalidAgentId(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp(token) => write!(f, "Invalid log timestamp: '{}'", token),
            Error::InvalidAgentId(raw) => write!(f, "Invalid agent id: '{}'", raw),
        }
    }
}

impl std::error::Error for Error {}
