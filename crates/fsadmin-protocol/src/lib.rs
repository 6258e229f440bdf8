//! Command builder, response envelope and parsers for the CephFS manager
//! protocol.
//!
//! # Protocol Overview
//!
//! A command is a JSON object sent to the manager (or monitor) service:
//!
//! ```text
//! {"prefix": "fs volume ls", "format": "json"}
//! ```
//!
//! The reply has three parts that are checked independently, in this order:
//! - an error raised by the transport, passed through verbatim
//! - a status string, which must be empty or a known success sentinel
//! - a payload, decoded strictly into the expected shape
//!
//! # Example
//!
//! ```rust
//! use fsadmin_protocol::{parse_list_names, CommandOutput, Response};
//!
//! let output = CommandOutput::new(r#"[{"name":"cephfs"}]"#, "");
//! let names = parse_list_names(Response::from(Ok(output))).unwrap();
//! assert_eq!(names, ["cephfs"]);
//! ```

mod command;
mod error;
mod parse;
mod response;
mod transport;

pub use command::{Command, CommandBuffer, FORMAT_JSON, SubVolumeGroupOptions, SubVolumeOptions};
pub use error::{AdminError, AdminResult, ErrorKind, TransportError};
pub use parse::{
    DUMP_OK_PREFIX, check_empty_response_expected, parse_dump, parse_dump_to_idents,
    parse_list_names, parse_path_response, parse_volume_status,
};
pub use response::{Response, STATUS_OK};
pub use transport::{CommandOutput, CommandResult, Commander};
