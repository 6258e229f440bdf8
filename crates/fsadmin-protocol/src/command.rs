//! Command builder.
//!
//! Every manager command is a JSON object whose `prefix` names the operation
//! and whose other keys are the operation's parameters:
//!
//! ```text
//! {"prefix": "fs subvolume getpath", "vol_name": "cephfs", "sub_name": "sv1"}
//! ```
//!
//! [`Command`] covers the operations this crate knows about. Anything else
//! serializable can still be sent through [`CommandBuffer::marshal`].

use serde::{Serialize, Serializer};

use crate::error::{AdminError, AdminResult};

/// Output format requested from commands that return data.
pub const FORMAT_JSON: &str = "json";

/// Serialized command, ready to hand to a [`Commander`](crate::Commander).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuffer(Vec<u8>);

impl CommandBuffer {
    /// Serializes any value into a command buffer.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Serialization`] if the value cannot be
    /// serialized; no partial buffer is produced.
    pub fn marshal<T: Serialize + ?Sized>(value: &T) -> AdminResult<Self> {
        serde_json::to_vec(value)
            .map(Self)
            .map_err(AdminError::Serialization)
    }

    /// Wraps bytes that are already a serialized command. No validation is
    /// done; the remote side will reject anything malformed.
    pub fn from_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the serialized bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the buffer, returning the serialized bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Supported manager commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "prefix")]
pub enum Command {
    /// List volumes.
    #[serde(rename = "fs volume ls")]
    VolumeList { format: &'static str },

    /// Dump the filesystem map.
    #[serde(rename = "fs dump")]
    Dump { format: &'static str },

    /// Report MDS version and pool usage for a volume.
    #[serde(rename = "fs status")]
    VolumeStatus { fs: String, format: &'static str },

    /// List subvolume groups of a volume.
    #[serde(rename = "fs subvolumegroup ls")]
    SubVolumeGroupList {
        vol_name: String,
        format: &'static str,
    },

    /// Create a subvolume group.
    #[serde(rename = "fs subvolumegroup create")]
    SubVolumeGroupCreate {
        vol_name: String,
        group_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        uid: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        gid: Option<u32>,
        #[serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_octal_mode"
        )]
        mode: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pool_layout: Option<String>,
    },

    /// Remove a subvolume group.
    #[serde(rename = "fs subvolumegroup rm")]
    SubVolumeGroupRemove {
        vol_name: String,
        group_name: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        force: bool,
    },

    /// Get the path of a subvolume group.
    #[serde(rename = "fs subvolumegroup getpath")]
    SubVolumeGroupPath { vol_name: String, group_name: String },

    /// List subvolumes.
    #[serde(rename = "fs subvolume ls")]
    SubVolumeList {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        format: &'static str,
    },

    /// Create a subvolume.
    #[serde(rename = "fs subvolume create")]
    SubVolumeCreate {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        sub_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        uid: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        gid: Option<u32>,
        #[serde(
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_octal_mode"
        )]
        mode: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pool_layout: Option<String>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        namespace_isolated: bool,
    },

    /// Remove a subvolume.
    #[serde(rename = "fs subvolume rm")]
    SubVolumeRemove {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        sub_name: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        force: bool,
    },

    /// Get the path of a subvolume.
    #[serde(rename = "fs subvolume getpath")]
    SubVolumePath {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        sub_name: String,
    },

    /// List snapshots of a subvolume.
    #[serde(rename = "fs subvolume snapshot ls")]
    SnapshotList {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        sub_name: String,
        format: &'static str,
    },

    /// Snapshot a subvolume.
    #[serde(rename = "fs subvolume snapshot create")]
    SnapshotCreate {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        sub_name: String,
        snap_name: String,
    },

    /// Remove a subvolume snapshot.
    #[serde(rename = "fs subvolume snapshot rm")]
    SnapshotRemove {
        vol_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        group_name: Option<String>,
        sub_name: String,
        snap_name: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        force: bool,
    },
}

/// Modes travel as octal strings ("755"), the way the CLI accepts them.
fn serialize_octal_mode<S: Serializer>(mode: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    match mode {
        Some(mode) => serializer.serialize_str(&format!("{mode:o}")),
        None => serializer.serialize_none(),
    }
}

impl Command {
    /// Creates a `fs volume ls` command.
    pub fn volume_list() -> Self {
        Self::VolumeList {
            format: FORMAT_JSON,
        }
    }

    /// Creates a `fs dump` command.
    pub fn dump() -> Self {
        Self::Dump {
            format: FORMAT_JSON,
        }
    }

    /// Creates a `fs status` command.
    pub fn volume_status(volume: impl Into<String>) -> Self {
        Self::VolumeStatus {
            fs: volume.into(),
            format: FORMAT_JSON,
        }
    }

    /// Creates a `fs subvolumegroup ls` command.
    pub fn subvolume_group_list(volume: impl Into<String>) -> Self {
        Self::SubVolumeGroupList {
            vol_name: volume.into(),
            format: FORMAT_JSON,
        }
    }

    /// Creates a `fs subvolumegroup create` command.
    pub fn subvolume_group_create(
        volume: impl Into<String>,
        group: impl Into<String>,
        options: &SubVolumeGroupOptions,
    ) -> Self {
        Self::SubVolumeGroupCreate {
            vol_name: volume.into(),
            group_name: group.into(),
            uid: options.uid,
            gid: options.gid,
            mode: options.mode,
            pool_layout: options.pool_layout.clone(),
        }
    }

    /// Creates a `fs subvolumegroup rm` command.
    pub fn subvolume_group_remove(
        volume: impl Into<String>,
        group: impl Into<String>,
        force: bool,
    ) -> Self {
        Self::SubVolumeGroupRemove {
            vol_name: volume.into(),
            group_name: group.into(),
            force,
        }
    }

    /// Creates a `fs subvolumegroup getpath` command.
    pub fn subvolume_group_path(volume: impl Into<String>, group: impl Into<String>) -> Self {
        Self::SubVolumeGroupPath {
            vol_name: volume.into(),
            group_name: group.into(),
        }
    }

    /// Creates a `fs subvolume ls` command.
    pub fn subvolume_list(volume: impl Into<String>, group: Option<&str>) -> Self {
        Self::SubVolumeList {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            format: FORMAT_JSON,
        }
    }

    /// Creates a `fs subvolume create` command.
    pub fn subvolume_create(
        volume: impl Into<String>,
        group: Option<&str>,
        name: impl Into<String>,
        options: &SubVolumeOptions,
    ) -> Self {
        Self::SubVolumeCreate {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            sub_name: name.into(),
            size: options.size,
            uid: options.uid,
            gid: options.gid,
            mode: options.mode,
            pool_layout: options.pool_layout.clone(),
            namespace_isolated: options.namespace_isolated,
        }
    }

    /// Creates a `fs subvolume rm` command.
    pub fn subvolume_remove(
        volume: impl Into<String>,
        group: Option<&str>,
        name: impl Into<String>,
        force: bool,
    ) -> Self {
        Self::SubVolumeRemove {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            sub_name: name.into(),
            force,
        }
    }

    /// Creates a `fs subvolume getpath` command.
    pub fn subvolume_path(
        volume: impl Into<String>,
        group: Option<&str>,
        name: impl Into<String>,
    ) -> Self {
        Self::SubVolumePath {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            sub_name: name.into(),
        }
    }

    /// Creates a `fs subvolume snapshot ls` command.
    pub fn snapshot_list(
        volume: impl Into<String>,
        group: Option<&str>,
        subvolume: impl Into<String>,
    ) -> Self {
        Self::SnapshotList {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            sub_name: subvolume.into(),
            format: FORMAT_JSON,
        }
    }

    /// Creates a `fs subvolume snapshot create` command.
    pub fn snapshot_create(
        volume: impl Into<String>,
        group: Option<&str>,
        subvolume: impl Into<String>,
        snapshot: impl Into<String>,
    ) -> Self {
        Self::SnapshotCreate {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            sub_name: subvolume.into(),
            snap_name: snapshot.into(),
        }
    }

    /// Creates a `fs subvolume snapshot rm` command.
    pub fn snapshot_remove(
        volume: impl Into<String>,
        group: Option<&str>,
        subvolume: impl Into<String>,
        snapshot: impl Into<String>,
        force: bool,
    ) -> Self {
        Self::SnapshotRemove {
            vol_name: volume.into(),
            group_name: group.map(str::to_string),
            sub_name: subvolume.into(),
            snap_name: snapshot.into(),
            force,
        }
    }

    /// Returns the operation name sent as `prefix`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::VolumeList { .. } => "fs volume ls",
            Self::Dump { .. } => "fs dump",
            Self::VolumeStatus { .. } => "fs status",
            Self::SubVolumeGroupList { .. } => "fs subvolumegroup ls",
            Self::SubVolumeGroupCreate { .. } => "fs subvolumegroup create",
            Self::SubVolumeGroupRemove { .. } => "fs subvolumegroup rm",
            Self::SubVolumeGroupPath { .. } => "fs subvolumegroup getpath",
            Self::SubVolumeList { .. } => "fs subvolume ls",
            Self::SubVolumeCreate { .. } => "fs subvolume create",
            Self::SubVolumeRemove { .. } => "fs subvolume rm",
            Self::SubVolumePath { .. } => "fs subvolume getpath",
            Self::SnapshotList { .. } => "fs subvolume snapshot ls",
            Self::SnapshotCreate { .. } => "fs subvolume snapshot create",
            Self::SnapshotRemove { .. } => "fs subvolume snapshot rm",
        }
    }

    /// Serializes this command into a buffer.
    pub fn to_buffer(&self) -> AdminResult<CommandBuffer> {
        CommandBuffer::marshal(self)
    }
}

/// Optional settings for a new subvolume group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubVolumeGroupOptions {
    /// Owner uid of the group directory.
    pub uid: Option<u32>,
    /// Owner gid of the group directory.
    pub gid: Option<u32>,
    /// Permission bits of the group directory.
    pub mode: Option<u32>,
    /// Data pool for the group.
    pub pool_layout: Option<String>,
}

impl SubVolumeGroupOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set uid.
    pub fn uid(mut self, uid: u32) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Builder: set gid.
    pub fn gid(mut self, gid: u32) -> Self {
        self.gid = Some(gid);
        self
    }

    /// Builder: set permission bits (e.g. `0o755`).
    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Builder: set data pool.
    pub fn pool_layout(mut self, pool: impl Into<String>) -> Self {
        self.pool_layout = Some(pool.into());
        self
    }
}

/// Optional settings for a new subvolume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubVolumeOptions {
    /// Quota in bytes.
    pub size: Option<u64>,
    /// Owner uid of the subvolume directory.
    pub uid: Option<u32>,
    /// Owner gid of the subvolume directory.
    pub gid: Option<u32>,
    /// Permission bits of the subvolume directory.
    pub mode: Option<u32>,
    /// Data pool for the subvolume.
    pub pool_layout: Option<String>,
    /// Place the subvolume in its own RADOS namespace.
    pub namespace_isolated: bool,
}

impl SubVolumeOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set quota in bytes.
    pub fn size(mut self, bytes: u64) -> Self {
        self.size = Some(bytes);
        self
    }

    /// Builder: set uid.
    pub fn uid(mut self, uid: u32) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Builder: set gid.
    pub fn gid(mut self, gid: u32) -> Self {
        self.gid = Some(gid);
        self
    }

    /// Builder: set permission bits (e.g. `0o750`).
    pub fn mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Builder: set data pool.
    pub fn pool_layout(mut self, pool: impl Into<String>) -> Self {
        self.pool_layout = Some(pool.into());
        self
    }

    /// Builder: set namespace isolation.
    pub fn namespace_isolated(mut self, isolated: bool) -> Self {
        self.namespace_isolated = isolated;
        self
    }
}
