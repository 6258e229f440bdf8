//! Filesystem admin facade, transport tracing, configuration
//!
//! [`FsAdmin`] is the entry point. It is built on top of any
//! [`Commander`], which is the connection to the cluster:
//!
//! ```ignore
//! use fsadmin_client::{AdminConfig, FsAdmin};
//!
//! let config = AdminConfig::load()?;
//! let fsa = FsAdmin::with_config(conn, &config);
//! for volume in fsa.enumerate_volumes()? {
//!     println!("{} {}", volume.id, volume.name);
//! }
//! ```

mod admin;
pub mod config;
pub mod error;
mod subvolume;
mod subvolumegroup;
pub mod trace;
mod volume;

#[cfg(test)]
mod testing;

pub use admin::FsAdmin;
pub use config::AdminConfig;
pub use error::{ConfigError, ConfigResult};
pub use trace::TracingCommander;

pub use fsadmin_core::{VolumeIdent, VolumeStatus};
pub use fsadmin_protocol::{
    AdminError, AdminResult, CommandOutput, CommandResult, Commander, Response,
    SubVolumeGroupOptions, SubVolumeOptions, TransportError,
};
