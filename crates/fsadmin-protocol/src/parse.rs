//! Response parsers.
//!
//! Each parser consumes a [`Response`] and either returns the decoded value
//! or the first failure found. Transport errors come back unchanged.

use fsadmin_core::{Dump, VolumeIdent, VolumeStatus};
use serde::Deserialize;

use crate::error::{AdminError, AdminResult};
use crate::response::Response;

/// Status prefix reported by a successful `fs dump`, followed by the epoch.
pub const DUMP_OK_PREFIX: &str = "dumped fsmap epoch";

#[derive(Debug, Deserialize)]
struct ListNamesItem {
    name: String,
}

/// Parses a `[{"name": ...}, ...]` payload into names, in payload order.
pub fn parse_list_names(res: Response) -> AdminResult<Vec<String>> {
    let items: Vec<ListNamesItem> = res.decode_into()?;
    Ok(items.into_iter().map(|item| item.name).collect())
}

/// Parses a `fs dump` response.
///
/// The status must start with [`DUMP_OK_PREFIX`]; the epoch after it is not
/// compared with the payload.
pub fn parse_dump(res: Response) -> AdminResult<Dump> {
    res.require_status_prefix(DUMP_OK_PREFIX)
        .no_status()
        .decode()
}

/// Parses a `fs dump` response into volume identities, in dump order.
pub fn parse_dump_to_idents(res: Response) -> AdminResult<Vec<VolumeIdent>> {
    Ok(parse_dump(res)?.idents())
}

/// Parses a `fs status` response.
pub fn parse_volume_status(res: Response) -> AdminResult<VolumeStatus> {
    res.decode_into()
}

/// Checks a response for a command that returns neither status nor data.
pub fn check_empty_response_expected(res: Response) -> AdminResult<()> {
    res.expect_no_data()
}

/// Parses a `getpath` response, whose payload is a bare path.
///
/// Trailing whitespace (the remote side appends a newline) is dropped.
pub fn parse_path_response(res: Response) -> AdminResult<String> {
    let body = res.no_status().into_body()?;
    let path = String::from_utf8(body).map_err(AdminError::InvalidPath)?;
    let trimmed = path.trim_end();
    if trimmed.is_empty() {
        return Err(AdminError::EmptyPath);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TransportError};

    fn r(body: &[u8], status: &str, error: Option<&str>) -> Response {
        Response::new(
            body.to_vec(),
            status,
            error.map(|msg| TransportError::new(msg).into()),
        )
    }

    const SAMPLE_DUMP_1: &str = r#"
    {
      "epoch": 5,
      "default_fscid": 1,
      "filesystems": [
        {
          "mdsmap": {
            "epoch": 5,
            "flags": 18,
            "created": "2020-08-31T18:37:34.657633+0000",
            "compat": {
              "compat": {},
              "ro_compat": {},
              "incompat": {"feature_1": "base v0.20"}
            },
            "max_mds": 1,
            "in": [0],
            "up": {"mds_0": 4115},
            "failed": [],
            "info": {
              "gid_4115": {
                "gid": 4115,
                "name": "Z",
                "rank": 0,
                "state": "up:active",
                "addrs": {"addrvec": [{"type": "v1", "addr": "127.0.0.1:6809", "nonce": 2568111595}]},
                "join_fscid": -1,
                "features": 4540138292836696000
              }
            },
            "data_pools": [1],
            "metadata_pool": 2,
            "enabled": true,
            "fs_name": "cephfs",
            "balancer": "",
            "standby_count_wanted": 0
          },
          "id": 1
        }
      ]
    }
    "#;

    const SAMPLE_DUMP_2: &str = r#"
    {
      "epoch": 5,
      "default_fscid": 1,
      "filesystems": [
        {"mdsmap": {"fs_name": "wiffleball", "standby_count_wanted": 0}, "id": 1},
        {"mdsmap": {"fs_name": "beanbag", "standby_count_wanted": 0}, "id": 2}
      ]
    }
    "#;

    fn dump_status() -> String {
        format!("{DUMP_OK_PREFIX} 5")
    }

    #[test]
    fn list_names_error() {
        let err = parse_list_names(r(b"", "", Some("bonk"))).unwrap_err();
        assert_eq!(err.to_string(), "bonk");
    }

    #[test]
    fn list_names_status_set() {
        let err = parse_list_names(r(b"", "unexpected!", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn list_names_bad_json() {
        let err = parse_list_names(r(b"Foo[[[", "", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn list_names_wrong_shape() {
        let err = parse_list_names(r(br#"["bob"]"#, "", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = parse_list_names(r(br#"[{"nom": "bob"}]"#, "", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn list_names_ok() {
        let names = parse_list_names(r(br#"[{"name":"bob"}]"#, "", None)).unwrap();
        assert_eq!(names, vec!["bob".to_string()]);
    }

    #[test]
    fn list_names_keep_order() {
        let body = br#"[{"name":"c"},{"name":"a","extra":1},{"name":"b"}]"#;
        let names = parse_list_names(r(body, "", None)).unwrap();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn list_names_empty() {
        assert!(parse_list_names(r(b"[]", "", None)).unwrap().is_empty());
    }

    #[test]
    fn dump_to_idents_error() {
        let err = parse_dump_to_idents(r(b"", "", Some("boop"))).unwrap_err();
        assert_eq!(err.to_string(), "boop");
    }

    #[test]
    fn dump_to_idents_bad_status() {
        let err =
            parse_dump_to_idents(r(SAMPLE_DUMP_1.as_bytes(), "unexpected!", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn dump_to_idents_one_volume() {
        let idents = parse_dump_to_idents(r(SAMPLE_DUMP_1.as_bytes(), &dump_status(), None)).unwrap();
        assert_eq!(idents, vec![VolumeIdent::new("cephfs", 1)]);
    }

    #[test]
    fn dump_to_idents_two_volumes() {
        let idents = parse_dump_to_idents(r(SAMPLE_DUMP_2.as_bytes(), &dump_status(), None)).unwrap();
        assert_eq!(idents.len(), 2);
        assert_eq!(idents[0].name, "wiffleball");
        assert_eq!(idents[0].id, 1);
        assert_eq!(idents[1].name, "beanbag");
        assert_eq!(idents[1].id, 2);
    }

    #[test]
    fn dump_to_idents_unexpected_status() {
        let result = parse_dump_to_idents(r(SAMPLE_DUMP_1.as_bytes(), "slip-up", None));
        assert!(result.is_err());
    }

    #[test]
    fn dump_to_idents_near_miss_status() {
        let result = parse_dump_to_idents(r(SAMPLE_DUMP_1.as_bytes(), "dumped fsmap 5", None));
        assert!(matches!(result, Err(AdminError::UnexpectedStatus { .. })));
    }

    #[test]
    fn dump_to_idents_epoch_not_checked() {
        let status = format!("{DUMP_OK_PREFIX} 999");
        let idents = parse_dump_to_idents(r(SAMPLE_DUMP_2.as_bytes(), &status, None)).unwrap();
        assert_eq!(idents.len(), 2);
    }

    #[test]
    fn dump_to_idents_no_filesystems() {
        let body = br#"{"epoch": 1, "default_fscid": -1, "filesystems": []}"#;
        let idents = parse_dump_to_idents(r(body, &dump_status(), None)).unwrap();
        assert!(idents.is_empty());
    }

    #[test]
    fn dump_to_idents_bad_json() {
        let err = parse_dump_to_idents(r(b"{\"filesystems\": [", &dump_status(), None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn dump_keeps_opaque_fields() {
        let dump = parse_dump(r(SAMPLE_DUMP_1.as_bytes(), &dump_status(), None)).unwrap();
        let mdsmap = &dump.filesystems[0].mdsmap;
        assert_eq!(mdsmap.extra["metadata_pool"], 2);
        assert!(mdsmap.extra.contains_key("info"));
    }

    #[test]
    fn volume_status_ok() {
        let body = br#"{"mds_version": "ceph version 15.2.4", "pools": [
            {"avail": 5, "id": 2, "name": "meta", "type": "metadata", "used": 1}
        ]}"#;
        let status = parse_volume_status(r(body, "", None)).unwrap();
        assert_eq!(status.pools[0].name, "meta");
    }

    #[test]
    fn volume_status_unexpected_status() {
        let err = parse_volume_status(r(b"{}", "unexpected!", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[test]
    fn empty_response_expected() {
        assert!(check_empty_response_expected(r(b"", "", None)).is_ok());
        assert!(check_empty_response_expected(r(br#"{"trouble": true}"#, "", None)).is_err());
        assert!(check_empty_response_expected(r(b"", "unexpected!", None)).is_err());
    }

    #[test]
    fn path_response_trims_newline() {
        let path = parse_path_response(r(b"/volumes/grp/sv1/uuid\n", "", None)).unwrap();
        assert_eq!(path, "/volumes/grp/sv1/uuid");
    }

    #[test]
    fn path_response_failures() {
        let err = parse_path_response(r(b"/x", "", Some("bonk"))).unwrap_err();
        assert_eq!(err.to_string(), "bonk");

        let err = parse_path_response(r(b"/x", "unexpected!", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Protocol);

        let err = parse_path_response(r(b"\n", "", None)).unwrap_err();
        assert!(matches!(err, AdminError::EmptyPath));

        let err = parse_path_response(r(&[0xc3, 0x28], "", None)).unwrap_err();
        assert!(matches!(err, AdminError::InvalidPath(_)));
    }

    #[test]
    fn unexpected_status_fails_every_parser() {
        let status = "unexpected!";
        assert!(parse_list_names(r(br#"[{"name":"a"}]"#, status, None)).is_err());
        assert!(parse_dump_to_idents(r(SAMPLE_DUMP_2.as_bytes(), status, None)).is_err());
        assert!(parse_volume_status(r(br#"{"pools": []}"#, status, None)).is_err());
        assert!(check_empty_response_expected(r(b"", status, None)).is_err());
        assert!(parse_path_response(r(b"/p", status, None)).is_err());
    }
}
