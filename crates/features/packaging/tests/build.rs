pub mod fixtures;

use fixtures::*;
use std::fs;
use tw_packaging::{Arch, InstallScheme, Os, PackagingError, Platform};

const DIST_INFO: &str = "iree_tools_tflite-0.1dev1.dist-info";

#[test]
fn test_no_version_file_uses_defaults() {
    let fx = Fixture::new();
    let built = fx.packager().build().unwrap();

    let identity = built.descriptor.identity();
    assert_eq!(identity.name(), "iree-tools-tflite");
    assert_eq!(identity.version(), "0.1dev1");
    assert_eq!(
        built.path,
        fx.out_dir().join("iree_tools_tflite-0.1dev1-py3-none-linux_x86_64.whl")
    );
    assert!(built.path.is_file());
}

#[test]
fn test_suffix_and_version_from_version_file() {
    let fx = Fixture::new();
    fx.write_version(r#"{"package-suffix": "-nightly", "package-version": "1.2.3"}"#);

    let built = fx.packager().build().unwrap();
    let identity = built.descriptor.identity();
    assert_eq!(identity.name(), "iree-tools-tflite-nightly");
    assert_eq!(identity.version(), "1.2.3");
    assert!(built.path.ends_with("iree_tools_tflite_nightly-1.2.3-py3-none-linux_x86_64.whl"));

    let metadata = read_member_str(
        &built.path,
        "iree_tools_tflite_nightly-1.2.3.dist-info/METADATA",
    );
    assert!(metadata.contains("Name: iree-tools-tflite-nightly\n"));
    assert!(metadata.contains("Version: 1.2.3\n"));
}

#[test]
fn test_version_only() {
    let fx = Fixture::new();
    fx.write_version(r#"{"package-version": "9.9.9"}"#);

    let plan = fx.packager().plan().unwrap();
    assert_eq!(plan.descriptor.identity().name(), "iree-tools-tflite");
    assert_eq!(plan.descriptor.identity().version(), "9.9.9");
}

#[test]
fn test_missing_artifact_writes_nothing() {
    let fx = Fixture::without_tool();
    fx.write_version(r#"{"package-version": "1.0"}"#);

    let err = fx.packager().build().unwrap_err();
    match &err {
        PackagingError::MissingArtifact { path, .. } => {
            assert!(path.ends_with("iree/tools/tflite/iree-import-tflite"));
        },
        other => panic!("unexpected error: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("iree-import-tflite"));
    assert!(message.contains("Be sure to build //iree_tf_compiler:iree-import-tflite"));
    assert!(fx.outputs().is_empty());
}

#[test]
fn test_missing_artifact_checked_before_version_file() {
    let fx = Fixture::without_tool();
    fx.write_version("{ not json");

    let err = fx.packager().build().unwrap_err();
    assert!(matches!(err, PackagingError::MissingArtifact { .. }));
}

#[test]
fn test_malformed_version_file_is_fatal() {
    let fx = Fixture::new();
    fx.write_version("{ not json");

    let err = fx.packager().build().unwrap_err();
    assert!(matches!(err, PackagingError::VersionFileParse { .. }));
    assert!(fx.outputs().is_empty());
}

#[test]
fn test_wrong_field_type_is_fatal() {
    let fx = Fixture::new();
    fx.write_version(r#"{"package-version": 3}"#);

    let err = fx.packager().plan().unwrap_err();
    assert!(matches!(err, PackagingError::VersionFileParse { .. }));
}

#[test]
fn test_windows_target_expects_exe_suffix() {
    let fx = Fixture::new();
    let windows = Platform::new(Os::Windows, Arch::X86_64);

    let err = tw_packaging::Packager::new(fx.config.clone(), windows).plan().unwrap_err();
    match err {
        PackagingError::MissingArtifact { path, .. } => {
            assert!(path.ends_with("iree/tools/tflite/iree-import-tflite.exe"));
        },
        other => panic!("unexpected error: {other:?}"),
    }

    fx.write_tool("iree-import-tflite.exe", b"MZ");
    let built = tw_packaging::Packager::new(fx.config.clone(), windows).build().unwrap();
    assert!(built.path.ends_with("iree_tools_tflite-0.1dev1-py3-none-win_amd64.whl"));
    assert!(member_names(&built.path).contains(&"iree/tools/tflite/iree-import-tflite.exe".to_owned()));
}

#[test]
fn test_wheel_is_platform_locked() {
    let fx = Fixture::new();
    let built = fx.packager().build().unwrap();

    assert_eq!(built.descriptor.scheme(), InstallScheme::Platlib);
    assert!(!built.descriptor.root_is_purelib());

    let wheel = read_member_str(&built.path, &format!("{DIST_INFO}/WHEEL"));
    assert!(wheel.contains("Root-Is-Purelib: false\n"));
    assert!(wheel.contains("Tag: py3-none-linux_x86_64\n"));
}

#[test]
fn test_plat_name_override() {
    let fx = Fixture::new();
    let built = fx.packager().plat_name("manylinux2014_x86_64").build().unwrap();

    assert!(built.path.ends_with("iree_tools_tflite-0.1dev1-py3-none-manylinux2014_x86_64.whl"));
    let wheel = read_member_str(&built.path, &format!("{DIST_INFO}/WHEEL"));
    assert!(wheel.contains("Tag: py3-none-manylinux2014_x86_64\n"));

    let err = fx.packager().plat_name("bad tag").plan().unwrap_err();
    assert!(matches!(err, PackagingError::InvalidPlatform { .. }));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let fx = Fixture::new();
    fx.write_file("iree/tools/tflite/helpers.py", b"X = 1\n");

    let first = fx.packager().build().unwrap();
    let first_bytes = fs::read(&first.path).unwrap();
    let second = fx.packager().build().unwrap();
    let second_bytes = fs::read(&second.path).unwrap();

    assert_eq!(first.path, second.path);
    assert_eq!(first_bytes, second_bytes);
    assert_eq!(fx.outputs().len(), 1, "temporary files must not remain");
}

#[test]
fn test_record_lists_every_member() {
    let fx = Fixture::new();
    let built = fx.packager().build().unwrap();

    let record = read_member_str(&built.path, &format!("{DIST_INFO}/RECORD"));
    let rows: Vec<&str> = record.lines().collect();
    let names = member_names(&built.path);
    assert_eq!(rows.len(), names.len());
    assert_eq!(*rows.last().unwrap(), format!("{DIST_INFO}/RECORD,,"));

    for row in &rows[..rows.len() - 1] {
        let mut cols = row.rsplitn(3, ',');
        let size: usize = cols.next().unwrap().parse().unwrap();
        let hash = cols.next().unwrap();
        let path = cols.next().unwrap();

        let bytes = read_member(&built.path, path);
        assert_eq!(size, bytes.len(), "size of {path}");
        assert_eq!(hash, tw_packaging::wheel::record_hash(&bytes), "hash of {path}");
    }

    let tool_row = rows.iter().find(|r| r.starts_with("iree/tools/tflite/iree-import-tflite,")).unwrap();
    assert!(tool_row.ends_with(&format!(",{}", TOOL_BYTES.len())));
}

#[test]
fn test_executable_mode_and_content() {
    let fx = Fixture::new();
    let built = fx.packager().build().unwrap();

    let tool = "iree/tools/tflite/iree-import-tflite";
    assert_eq!(read_member(&built.path, tool), TOOL_BYTES);
    assert_eq!(member_mode(&built.path, tool).map(|m| m & 0o777), Some(0o755));
    assert_eq!(
        member_mode(&built.path, &format!("{DIST_INFO}/METADATA")).map(|m| m & 0o777),
        Some(0o644)
    );
}

#[test]
fn test_entry_point_and_generated_shim() {
    let fx = Fixture::new();
    let built = fx.packager().build().unwrap();

    let entry_points = read_member_str(&built.path, &format!("{DIST_INFO}/entry_points.txt"));
    assert_eq!(
        entry_points,
        "[console_scripts]\niree-import-tflite = iree.tools.tflite.scripts.iree_import_tflite.__main__:main\n"
    );
    assert_eq!(read_member_str(&built.path, &format!("{DIST_INFO}/top_level.txt")), "iree\n");

    let names = member_names(&built.path);
    let shim_path = "iree/tools/tflite/scripts/iree_import_tflite/__main__.py";
    assert!(names.iter().any(|n| n == shim_path));
    assert!(names.iter().any(|n| n == "iree/tools/tflite/scripts/__init__.py"));
    assert!(names.iter().any(|n| n == "iree/tools/tflite/scripts/iree_import_tflite/__init__.py"));
    assert!(!names.iter().any(|n| n == "iree/__init__.py" || n == "iree/tools/__init__.py"));

    let shim = read_member_str(&built.path, shim_path);
    assert!(shim.contains("def main(args=None):"));
    assert!(shim.contains(r#""iree", "tools", "tflite", "iree-import-tflite""#));
}

#[test]
fn test_existing_python_files_are_bundled_verbatim() {
    let fx = Fixture::new();
    let main = b"def main():\n    return 0\n";
    fx.write_file("iree/tools/tflite/scripts/iree_import_tflite/__main__.py", main);
    fx.write_file("iree/tools/tflite/__pycache__/stale.py", b"");
    fx.write_file("iree/tools/tflite/notes.txt", b"ignored");

    let built = fx.packager().build().unwrap();
    let names = member_names(&built.path);

    assert_eq!(
        read_member(&built.path, "iree/tools/tflite/scripts/iree_import_tflite/__main__.py"),
        main
    );
    assert!(!names.iter().any(|n| n.contains("__pycache__")));
    assert!(!names.iter().any(|n| n.ends_with("notes.txt")));
    assert!(!names.iter().any(|n| n.ends_with("scripts/__init__.py")));
}

#[test]
fn test_members_are_sorted_with_dist_info_last() {
    let fx = Fixture::new();
    fx.write_file("iree/tools/tflite/b.py", b"");
    fx.write_file("iree/tools/tflite/a.py", b"");

    let built = fx.packager().build().unwrap();
    let names = member_names(&built.path);
    let (payload, dist_info): (Vec<_>, Vec<_>) =
        names.iter().partition(|n| !n.starts_with(DIST_INFO));

    let mut sorted = payload.clone();
    sorted.sort();
    assert_eq!(payload, sorted);
    assert_eq!(dist_info.len(), 5);
    assert_eq!(names.last().map(String::as_str), Some(format!("{DIST_INFO}/RECORD").as_str()));
}

#[test]
fn test_version_file_is_read_from_project_root() {
    let fx = Fixture::new();
    fx.write_version(r#"{"package-version": "7.7.7"}"#);
    fx.write_file("version_info.json", br#"{"package-version": "0.0.0"}"#);

    assert_eq!(
        fs::canonicalize(fx.version_path()).unwrap(),
        fs::canonicalize(fx.temp.path().join("version_info.json")).unwrap()
    );
    let plan = fx.packager().plan().unwrap();
    assert_eq!(plan.descriptor.identity().version(), "7.7.7");
}

#[cfg(unix)]
#[test]
fn test_published_wheel_is_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let fx = Fixture::new();
    let built = fx.packager().build().unwrap();

    let mode = fs::metadata(&built.path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o644);
}

#[test]
fn test_malformed_namespace_is_rejected_before_resolving() {
    for namespace in ["", "iree..tflite", "iree.tools."] {
        let mut fx = Fixture::new();
        fx.config.package.namespace = namespace.to_owned();

        let err = fx.packager().plan().unwrap_err();
        assert!(
            matches!(err, PackagingError::InvalidNamespace { .. }),
            "{namespace:?} gave {err:?}"
        );
    }
}

#[test]
fn test_missing_artifact_reported_before_bad_plat_name() {
    let fx = Fixture::without_tool();

    let err = fx.packager().plat_name("bad tag").build().unwrap_err();
    assert!(matches!(err, PackagingError::MissingArtifact { .. }));
    assert!(fx.outputs().is_empty());
}
