//! Core types: volume identities, fsmap dumps, volume status, tracing setup

pub mod tracing;
pub mod volume;

pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing, parse_level};
pub use volume::{Dump, FsInfo, MdsMap, VolumeIdent, VolumePool, VolumeStatus};
