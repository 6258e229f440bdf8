//! Error types for admin commands.
//!
//! A command can fail on three independent axes: the transport reports an
//! error, the remote side answers with a status string that is not a success
//! sentinel, or the payload cannot be decoded into the expected shape.
//! Serialization of caller-supplied parameters is a fourth, local, failure
//! that happens before anything is sent.

use std::fmt;

use thiserror::Error;

/// Result type for admin operations.
pub type AdminResult<T> = Result<T, AdminError>;

/// Error returned by a [`Commander`](crate::Commander) implementation.
///
/// The message is kept exactly as the transport produced it; the `Display`
/// output is the bare message so callers can match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
    status: Option<String>,
}

impl TransportError {
    /// Creates a transport error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Attaches the status string returned alongside the failure.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the status string that came with the failure, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// High-level classification of an [`AdminError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The transport failed to execute the command.
    Transport,
    /// The remote side reported something other than success.
    Protocol,
    /// The response payload was malformed or had the wrong shape.
    Parse,
    /// A command parameter could not be serialized.
    Serialization,
}

impl ErrorKind {
    /// Returns a short machine-friendly name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Parse => "parse",
            Self::Serialization => "serialization",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while executing an admin command.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The transport failed; the error is passed through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A non-empty status string that is not a success sentinel.
    #[error("unexpected status: {status}")]
    UnexpectedStatus { status: String },

    /// Data was returned by a command that should not produce any.
    #[error("unexpected response data: {body}")]
    UnexpectedData { body: String },

    /// The payload is not valid JSON or does not match the expected shape.
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),

    /// A path response was not valid UTF-8.
    #[error("invalid path in response: {0}")]
    InvalidPath(#[source] std::string::FromUtf8Error),

    /// A path response was empty.
    #[error("empty path in response")]
    EmptyPath,

    /// A command parameter could not be serialized.
    #[error("failed to serialize command: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl AdminError {
    /// Creates an unexpected status error.
    pub fn unexpected_status(status: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status: status.into(),
        }
    }

    /// Creates an unexpected data error, rendering the body lossily.
    pub fn unexpected_data(body: &[u8]) -> Self {
        Self::UnexpectedData {
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::UnexpectedStatus { .. } | Self::UnexpectedData { .. } => ErrorKind::Protocol,
            Self::Parse(_) | Self::InvalidPath(_) | Self::EmptyPath => ErrorKind::Parse,
            Self::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Returns the status string carried by this error, if any.
    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Transport(err) => err.status(),
            Self::UnexpectedStatus { status } => Some(status),
            _ => None,
        }
    }
}
