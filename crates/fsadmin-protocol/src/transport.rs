//! Transport capability used to execute commands against the cluster.
//!
//! [`Commander`] is the seam between the admin layer and whatever actually
//! talks to the cluster: a RADOS connection, a tracing decorator wrapping
//! one, or a test double. Implementations must be safe to share between
//! threads; the admin layer itself keeps no state across calls.

use std::sync::Arc;

use crate::error::TransportError;

/// Successful output of a command: the payload and the side-channel status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Raw response payload, usually JSON.
    pub data: Vec<u8>,
    /// Status string reported next to the payload. Often empty.
    pub status: String,
}

impl CommandOutput {
    /// Creates output from a payload and a status string.
    pub fn new(data: impl Into<Vec<u8>>, status: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            status: status.into(),
        }
    }

    /// Creates output with neither payload nor status.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Result of a single command execution.
pub type CommandResult = Result<CommandOutput, TransportError>;

/// Executes manager and monitor commands.
///
/// # Example Implementation
///
/// ```ignore
/// struct RadosConn { /* cluster handle */ }
///
/// impl Commander for RadosConn {
///     fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult {
///         // hand the buffers to the cluster client library
///     }
///
///     fn mon_command(&self, buf: &[u8]) -> CommandResult {
///         // ...
///     }
/// }
/// ```
pub trait Commander: Send + Sync {
    /// Sends a command to the manager service.
    ///
    /// The command is made of one or more JSON buffers.
    fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult;

    /// Sends a command to the monitor service.
    fn mon_command(&self, buf: &[u8]) -> CommandResult;
}

impl<C: Commander + ?Sized> Commander for &C {
    fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult {
        (**self).mgr_command(buf)
    }

    fn mon_command(&self, buf: &[u8]) -> CommandResult {
        (**self).mon_command(buf)
    }
}

impl<C: Commander + ?Sized> Commander for Box<C> {
    fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult {
        (**self).mgr_command(buf)
    }

    fn mon_command(&self, buf: &[u8]) -> CommandResult {
        (**self).mon_command(buf)
    }
}

impl<C: Commander + ?Sized> Commander for Arc<C> {
    fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult {
        (**self).mgr_command(buf)
    }

    fn mon_command(&self, buf: &[u8]) -> CommandResult {
        (**self).mon_command(buf)
    }
}
