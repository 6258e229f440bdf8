//! The admin facade.
//!
//! [`FsAdmin`] turns typed operations into manager commands, sends them
//! through a [`Commander`] and parses the replies. Operations are grouped by
//! resource in the `volume`, `subvolumegroup` and `subvolume` modules.

use fsadmin_protocol::{Command, CommandBuffer, Commander, Response};
use serde::Serialize;
use tracing::debug;

use crate::config::AdminConfig;
use crate::trace::TracingCommander;

/// Administrative client for CephFS volumes.
///
/// Every call is a single synchronous round trip; `FsAdmin` keeps no state
/// besides the transport, so it can be shared between threads as long as the
/// transport can.
pub struct FsAdmin {
    conn: Box<dyn Commander>,
}

impl FsAdmin {
    /// Creates an admin client on top of an existing connection.
    pub fn new(conn: impl Commander + 'static) -> Self {
        Self {
            conn: Box::new(conn),
        }
    }

    /// Creates an admin client, wrapping the connection in a
    /// [`TracingCommander`] when command tracing is enabled.
    pub fn with_config(conn: impl Commander + 'static, config: &AdminConfig) -> Self {
        if config.debug_trace_enabled() {
            debug!("command tracing enabled");
            Self::new(TracingCommander::new(conn))
        } else {
            Self::new(conn)
        }
    }

    /// Returns the underlying transport.
    pub fn commander(&self) -> &dyn Commander {
        self.conn.as_ref()
    }

    /// Sends already-serialized bytes to the manager.
    pub fn raw_mgr_command(&self, buf: impl Into<Vec<u8>>) -> Response {
        Response::from(self.conn.mgr_command(&[buf.into()]))
    }

    /// Serializes `value` and sends it to the manager.
    ///
    /// If serialization fails, the returned response carries the error and
    /// nothing is sent.
    pub fn marshal_mgr_command<T: Serialize + ?Sized>(&self, value: &T) -> Response {
        match CommandBuffer::marshal(value) {
            Ok(buf) => self.raw_mgr_command(buf.into_bytes()),
            Err(err) => Response::from_error(err),
        }
    }

    /// Sends already-serialized bytes to the monitor.
    pub fn raw_mon_command(&self, buf: impl Into<Vec<u8>>) -> Response {
        Response::from(self.conn.mon_command(&buf.into()))
    }

    /// Serializes `value` and sends it to the monitor.
    ///
    /// If serialization fails, the returned response carries the error and
    /// nothing is sent.
    pub fn marshal_mon_command<T: Serialize + ?Sized>(&self, value: &T) -> Response {
        match CommandBuffer::marshal(value) {
            Ok(buf) => self.raw_mon_command(buf.into_bytes()),
            Err(err) => Response::from_error(err),
        }
    }

    pub(crate) fn mgr(&self, command: &Command) -> Response {
        debug!(prefix = command.prefix(), "sending manager command");
        self.marshal_mgr_command(command)
    }
}

impl std::fmt::Debug for FsAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FsAdmin").finish_non_exhaustive()
    }
}
