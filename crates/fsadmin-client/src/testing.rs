//! Scripted [`Commander`] for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use fsadmin_protocol::{CommandOutput, CommandResult, Commander, TransportError};
use serde_json::Value;

/// Replies with scripted results, in order, and records every command.
///
/// Buffers that are not valid JSON are rejected the way the manager rejects
/// them, without consuming a scripted reply.
#[derive(Default)]
pub(crate) struct MockCommander {
    replies: Mutex<VecDeque<CommandResult>>,
    mgr_calls: Mutex<Vec<Vec<Vec<u8>>>>,
    mon_calls: Mutex<Vec<Vec<u8>>>,
    calls: AtomicUsize,
}

impl MockCommander {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub(crate) fn ok(self, data: &str, status: &str) -> Self {
        self.reply(Ok(CommandOutput::new(data, status)))
    }

    /// Queues a transport failure.
    pub(crate) fn fail(self, message: &str) -> Self {
        self.reply(Err(TransportError::new(message)))
    }

    pub(crate) fn reply(self, result: CommandResult) -> Self {
        self.replies.lock().unwrap().push_back(result);
        self
    }

    /// Number of commands received, valid or not.
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Parsed first buffer of the most recent manager command.
    pub(crate) fn last_mgr_command(&self) -> Value {
        let calls = self.mgr_calls.lock().unwrap();
        let buf = calls.last().expect("no manager command sent");
        serde_json::from_slice(&buf[0]).unwrap()
    }

    /// Parsed buffer of the most recent monitor command.
    pub(crate) fn last_mon_command(&self) -> Value {
        let calls = self.mon_calls.lock().unwrap();
        serde_json::from_slice(calls.last().expect("no monitor command sent")).unwrap()
    }

    fn next_reply(&self, buffers: &[&[u8]]) -> CommandResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for buf in buffers {
            if serde_json::from_slice::<Value>(buf).is_err() {
                return Err(TransportError::new("command not understood")
                    .with_status("Error EINVAL: invalid command json"));
            }
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no reply scripted")))
    }
}

impl Commander for MockCommander {
    fn mgr_command(&self, buf: &[Vec<u8>]) -> CommandResult {
        self.mgr_calls.lock().unwrap().push(buf.to_vec());
        let buffers: Vec<&[u8]> = buf.iter().map(Vec::as_slice).collect();
        self.next_reply(&buffers)
    }

    fn mon_command(&self, buf: &[u8]) -> CommandResult {
        self.mon_calls.lock().unwrap().push(buf.to_vec());
        self.next_reply(&[buf])
    }
}
