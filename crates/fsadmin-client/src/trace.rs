//! Transport decorator that logs every command and its result.
//!
//! Wrap any [`Commander`] in a [`TracingCommander`] to see the JSON going
//! out and coming back at `debug` level. The wrapped transport's results are
//! returned untouched, so the decorator can be layered anywhere between the
//! admin facade and the cluster connection.

use fsadmin_protocol::{CommandResult, Commander};
use tracing::debug;

/// A [`Commander`] that logs input and output of the one it wraps.
#[derive(Debug, Clone)]
pub struct TracingCommander<C> {
    inner: C,
}

impl<C: Commander> TracingCommander<C> {
    /// Wraps a commander.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped commander.
    pub fn get_ref(&self) -> &C {
        &self.inner
    }

    /// Unwraps this decorator, returning the wrapped commander.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

fn log_result(service: &'static str, result: &CommandResult) {
    match result {
        Ok(output) => {
            debug!(
                service,
                result = %String::from_utf8_lossy(&output.data),
                "command output"
            );
            if !output.status.is_empty() {
                debug!(service, status = %output.status, "command status");
            }
        }
        Err(err) => {
            debug!(service, error = %err, status = err.status(), "command error");
        }
    }
}

impl<C: Commander> Commander for TracingCommander<C> {
    fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult {
        for part in buf {
            debug!(service = "mgr", input = %String::from_utf8_lossy(part), "command input");
        }
        let result = self.inner.mgr_command(buf);
        log_result("mgr", &result);
        result
    }

    fn mon_command(&self, buf: &[u8]) -> CommandResult {
        debug!(service = "mon", input = %String::from_utf8_lossy(buf), "command input");
        let result = self.inner.mon_command(buf);
        log_result("mon", &result);
        result
    }
}
