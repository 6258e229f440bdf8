//! Subvolume group operations.

use fsadmin_protocol::{
    AdminResult, Command, SubVolumeGroupOptions, check_empty_response_expected, parse_list_names,
    parse_path_response,
};

use crate::admin::FsAdmin;

impl FsAdmin {
    /// Lists the subvolume groups of a volume.
    pub fn list_subvolume_groups(&self, volume: &str) -> AdminResult<Vec<String>> {
        parse_list_names(self.mgr(&Command::subvolume_group_list(volume)))
    }

    /// Creates a subvolume group.
    pub fn create_subvolume_group(
        &self,
        volume: &str,
        group: &str,
        options: &SubVolumeGroupOptions,
    ) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::subvolume_group_create(
            volume, group, options,
        )))
    }

    /// Removes an empty subvolume group.
    pub fn remove_subvolume_group(&self, volume: &str, group: &str) -> AdminResult<()> {
        self.remove_subvolume_group_impl(volume, group, false)
    }

    /// Removes a subvolume group, succeeding even if it does not exist.
    pub fn force_remove_subvolume_group(&self, volume: &str, group: &str) -> AdminResult<()> {
        self.remove_subvolume_group_impl(volume, group, true)
    }

    fn remove_subvolume_group_impl(&self, volume: &str, group: &str, force: bool) -> AdminResult<()> {
        check_empty_response_expected(self.mgr(&Command::subvolume_group_remove(
            volume, group, force,
        )))
    }

    /// Returns the path of a subvolume group within the volume.
    pub fn subvolume_group_path(&self, volume: &str, group: &str) -> AdminResult<String> {
        parse_path_response(self.mgr(&Command::subvolume_group_path(volume, group)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fsadmin_protocol::ErrorKind;
    use serde_json::json;

    use crate::testing::MockCommander;

    use super::*;

    fn admin(conn: MockCommander) -> (Arc<MockCommander>, FsAdmin) {
        let conn = Arc::new(conn);
        (Arc::clone(&conn), FsAdmin::new(conn))
    }

    #[test]
    fn list_groups() {
        let (conn, fsa) = admin(MockCommander::new().ok(r#"[{"name":"g1"},{"name":"g2"}]"#, ""));
        assert_eq!(fsa.list_subvolume_groups("cephfs").unwrap(), ["g1", "g2"]);
        assert_eq!(
            conn.last_mgr_command(),
            json!({"prefix": "fs subvolumegroup ls", "vol_name": "cephfs", "format": "json"})
        );
    }

    #[test]
    fn create_group() {
        let (conn, fsa) = admin(MockCommander::new().ok("", ""));
        let options = SubVolumeGroupOptions::new().mode(0o777).pool_layout("cephfs_data");
        fsa.create_subvolume_group("cephfs", "g1", &options).unwrap();
        assert_eq!(
            conn.last_mgr_command(),
            json!({
                "prefix": "fs subvolumegroup create",
                "vol_name": "cephfs",
                "group_name": "g1",
                "mode": "777",
                "pool_layout": "cephfs_data"
            })
        );
    }

    #[test]
    fn create_group_unexpected_data() {
        let (_, fsa) = admin(MockCommander::new().ok(r#"{"trouble": true}"#, ""));
        let err = fsa
            .create_subvolume_group("cephfs", "g1", &SubVolumeGroupOptions::new())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn remove_group() {
        let (conn, fsa) = admin(MockCommander::new().ok("", "").ok("", ""));
        fsa.remove_subvolume_group("cephfs", "g1").unwrap();
        assert!(conn.last_mgr_command().get("force").is_none());

        fsa.force_remove_subvolume_group("cephfs", "g1").unwrap();
        assert_eq!(conn.last_mgr_command()["force"], true);
    }

    #[test]
    fn remove_group_transport_error() {
        let (_, fsa) = admin(MockCommander::new().fail("Error ENOTEMPTY"));
        let err = fsa.remove_subvolume_group("cephfs", "g1").unwrap_err();
        assert_eq!(err.to_string(), "Error ENOTEMPTY");
    }

    #[test]
    fn group_path() {
        let (conn, fsa) = admin(MockCommander::new().ok("/volumes/g1\n", ""));
        assert_eq!(fsa.subvolume_group_path("cephfs", "g1").unwrap(), "/volumes/g1");
        assert_eq!(conn.last_mgr_command()["prefix"], "fs subvolumegroup getpath");
    }
}
