//! Subvolume and subvolume snapshot operations.
//!
//! `group` is `None` for subvolumes outside any group (the default group).

use fsadmin_protocol::{
    AdminResult, Command, SubVolumeOptions, check_empty_response_expected, parse_list_names,
    parse_path_response,
};

use crate::admin::FsAdmin;

impl FsAdmin {
    /// Lists the subvolumes of a volume, optionally within a group.
    pub fn list_subvolumes(&self, volume: &str, group: Option<&str>) -> AdminResult<Vec<String>> {
        parse_list_names(self.mgr(&Command::subvolume_list(volume, group)))
    }

    /// Creates a subvolume.
    pub fn create_subvolume(
        &self,
        volume: &str,
        group: Option<&str>,
        name: &str,
        options: &SubVolumeOptions,
    ) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::subvolume_create(
            volume, group, name, options,
        )))
    }

    /// Removes a subvolume.
    pub fn remove_subvolume(&self, volume: &str, group: Option<&str>, name: &str) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::subvolume_remove(
            volume, group, name, false,
        )))
    }

    /// Removes a subvolume, succeeding even if it does not exist.
    pub fn force_remove_subvolume(
        &self,
        volume: &str,
        group: Option<&str>,
        name: &str,
    ) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::subvolume_remove(
            volume, group, name, true,
        )))
    }

    /// Returns the path of a subvolume within the volume.
    pub fn subvolume_path(&self, volume: &str, group: Option<&str>, name: &str) -> AdminResult<String> {
        parse_path_response(self.mgr(&Command::subvolume_path(volume, group, name)))
    }

    /// Lists the snapshots of a subvolume.
    pub fn list_subvolume_snapshots(
        &self,
        volume: &str,
        group: Option<&str>,
        subvolume: &str,
    ) -> AdminResult<Vec<String>> {
        parse_list_names(self.mgr(&Command::snapshot_list(volume, group, subvolume)))
    }

    /// Snapshots a subvolume.
    pub fn create_subvolume_snapshot(
        &self,
        volume: &str,
        group: Option<&str>,
        subvolume: &str,
        snapshot: &str,
    ) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::snapshot_create(
            volume, group, subvolume, snapshot,
        )))
    }

    /// Removes a subvolume snapshot.
    pub fn remove_subvolume_snapshot(
        &self,
        volume: &str,
        group: Option<&str>,
        subvolume: &str,
        snapshot: &str,
    ) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::snapshot_remove(
            volume, group, subvolume, snapshot, false,
        )))
    }

    /// Removes a subvolume snapshot, succeeding even if it does not exist.
    pub fn force_remove_subvolume_snapshot(
        &self,
        volume: &str,
        group: Option<&str>,
        subvolume: &str,
        snapshot: &str,
    ) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::snapshot_remove(
            volume, group, subvolume, snapshot, true,
        )))
    }
}
