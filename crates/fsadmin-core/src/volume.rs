//! Volume-level types decoded from manager responses.
//!
//! A volume (a CephFS filesystem instance) is identified by its name and the
//! integer filesystem id assigned by the cluster. The fsmap dump carries much
//! more than that; only the identifying fields are typed here and everything
//! else is kept as pass-through JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name and id pair that uniquely identifies a volume within a cluster epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeIdent {
    /// Volume (filesystem) name.
    pub name: String,
    /// Filesystem id (fscid).
    pub id: i64,
}

impl VolumeIdent {
    /// Creates a new volume identity.
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl std::fmt::Display for VolumeIdent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Snapshot of the cluster's filesystem map as returned by `fs dump`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dump {
    /// Version of the fsmap this dump was taken at.
    #[serde(default)]
    pub epoch: u64,

    /// Filesystem id used when a client does not name one.
    #[serde(default)]
    pub default_fscid: i64,

    /// Filesystems in declaration order.
    pub filesystems: Vec<FsInfo>,

    /// Remaining top-level fields (standbys, compat, feature flags, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dump {
    /// Returns the identity of every filesystem, in dump order.
    pub fn idents(&self) -> Vec<VolumeIdent> {
        self.filesystems.iter().map(FsInfo::ident).collect()
    }
}

/// A single filesystem entry of an fsmap dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsInfo {
    /// The filesystem's MDS map.
    pub mdsmap: MdsMap,

    /// Filesystem id.
    pub id: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FsInfo {
    /// Returns the name/id pair for this filesystem.
    pub fn ident(&self) -> VolumeIdent {
        VolumeIdent::new(self.mdsmap.fs_name.clone(), self.id)
    }
}

/// MDS map of a filesystem. Only the name is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MdsMap {
    /// Filesystem name.
    pub fs_name: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Status of a volume as reported by `fs status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeStatus {
    /// Version string of the running metadata servers.
    #[serde(default)]
    pub mds_version: String,

    /// Pools backing the volume.
    pub pools: Vec<VolumePool>,
}

/// Usage information for one pool backing a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumePool {
    /// Pool id.
    pub id: i64,
    /// Pool name.
    pub name: String,
    /// Pool role, either "metadata" or "data".
    #[serde(rename = "type")]
    pub pool_type: String,
    /// Bytes available.
    #[serde(rename = "avail")]
    pub available: u64,
    /// Bytes used.
    pub used: u64,
}
