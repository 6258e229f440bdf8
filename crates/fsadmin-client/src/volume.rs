//! Volume operations.

use fsadmin_core::{VolumeIdent, VolumeStatus};
use fsadmin_protocol::{
    AdminResult, Command, parse_dump_to_idents, parse_list_names, parse_volume_status,
};

use crate::admin::FsAdmin;

impl FsAdmin {
    /// Lists the names of all volumes.
    pub fn list_volumes(&self) -> AdminResult<Vec<String>> {
        parse_list_names(self.mgr(&Command::volume_list()))
    }

    /// Lists the name and id of every volume, in fsmap order.
    pub fn enumerate_volumes(&self) -> AdminResult<Vec<VolumeIdent>> {
        parse_dump_to_idents(self.mgr(&Command::dump()))
    }

    /// Returns MDS version and pool usage for a volume.
    pub fn volume_status(&self, volume: &str) -> AdminResult<VolumeStatus> {
        parse_volume_status(self.mgr(&Command::volume_status(volume)))
    }
}
