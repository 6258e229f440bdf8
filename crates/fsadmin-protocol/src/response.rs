//! Response envelope.
//!
//! A [`Response`] holds what came back from a command: the payload, the
//! status string and an optional error. Validation steps are chained and
//! each one is a no-op once an error has been recorded, so checks always
//! run in the order error, status, payload:
//!
//! ```
//! use fsadmin_protocol::Response;
//!
//! let res = Response::new(br#"["a","b"]"#.to_vec(), "", None);
//! let names: Vec<String> = res.decode_into().unwrap();
//! assert_eq!(names, ["a", "b"]);
//! ```

use serde::de::DeserializeOwned;

use crate::error::{AdminError, AdminResult};
use crate::transport::{CommandOutput, CommandResult};

/// Status sentinel some commands report on success.
pub const STATUS_OK: &str = "OK";

/// Outcome of a single command, consumed by exactly one terminal operation.
#[derive(Debug)]
#[must_use = "a response does nothing until it is checked"]
pub struct Response {
    body: Vec<u8>,
    status: String,
    error: Option<AdminError>,
}

impl Response {
    /// Wraps a payload, status and error without validating anything.
    pub fn new(body: Vec<u8>, status: impl Into<String>, error: Option<AdminError>) -> Self {
        Self {
            body,
            status: status.into(),
            error,
        }
    }

    /// Creates a response that only carries an error.
    pub fn from_error(error: impl Into<AdminError>) -> Self {
        Self::new(Vec::new(), String::new(), Some(error.into()))
    }

    /// Returns true if no error has been recorded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the raw payload.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the status string.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Records an error unless one is already present.
    fn fail(mut self, error: AdminError) -> Self {
        if self.error.is_none() {
            self.error = Some(error);
        }
        self
    }

    /// Fails unless the status is empty or exactly [`STATUS_OK`].
    pub fn no_status(self) -> Self {
        if !self.is_ok() || self.status.is_empty() || self.status == STATUS_OK {
            return self;
        }
        let status = self.status.clone();
        self.fail(AdminError::unexpected_status(status))
    }

    /// Fails unless the status starts with `prefix`.
    ///
    /// Anything after the prefix (typically an epoch number) is ignored. A
    /// matching status is consumed so that a following [`no_status`]
    /// passes.
    ///
    /// [`no_status`]: Self::no_status
    pub fn require_status_prefix(mut self, prefix: &str) -> Self {
        if !self.is_ok() {
            return self;
        }
        if self.status.starts_with(prefix) {
            self.status.clear();
            self
        } else {
            let status = self.status.clone();
            self.fail(AdminError::unexpected_status(status))
        }
    }

    /// Fails if the payload is not empty.
    pub fn no_data(self) -> Self {
        if !self.is_ok() || self.body.is_empty() {
            return self;
        }
        let err = AdminError::unexpected_data(&self.body);
        self.fail(err)
    }

    /// Returns the recorded error, if any.
    pub fn end(self) -> AdminResult<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Checks that the command succeeded without status or payload.
    pub fn expect_no_data(self) -> AdminResult<()> {
        self.no_status().no_data().end()
    }

    /// Checks the status, then decodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the recorded error, an [`AdminError::UnexpectedStatus`], or an
    /// [`AdminError::Parse`] if the payload does not decode into `T`.
    pub fn decode_into<T: DeserializeOwned>(self) -> AdminResult<T> {
        self.no_status().decode()
    }

    /// Decodes the payload without looking at the status.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> AdminResult<T> {
        if let Some(err) = self.error {
            return Err(err);
        }
        serde_json::from_slice(&self.body).map_err(AdminError::Parse)
    }

    /// Returns the payload if no error has been recorded.
    pub(crate) fn into_body(self) -> AdminResult<Vec<u8>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.body),
        }
    }
}

impl From<CommandResult> for Response {
    fn from(result: CommandResult) -> Self {
        match result {
            Ok(CommandOutput { data, status }) => Self::new(data, status, None),
            Err(err) => Self::from_error(err),
        }
    }
}
