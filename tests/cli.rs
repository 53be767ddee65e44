//! End-to-end tests for the build-tools binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VERSION_VAR: &str = "APPVEYOR_BUILD_VERSION";

fn build_tools() -> Command {
    let mut cmd = Command::cargo_bin("build-tools").unwrap();
    cmd.env_remove(VERSION_VAR);
    cmd
}

#[test]
fn patch_version_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("native-algorithms.nuspec");
    fs::write(
        &manifest,
        "<package><metadata><version>0.0.0</version></metadata></package>",
    )
    .unwrap();

    build_tools()
        .current_dir(temp_dir.path())
        .env(VERSION_VAR, "1.2.3")
        .arg("patch-version")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        "<package><metadata><version>1.2.3</version></metadata></package>"
    );
}

#[test]
fn patch_version_set_flag_overrides_environment() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("custom.nuspec");
    fs::write(&manifest, "<version>0.0.0</version>\n").unwrap();

    build_tools()
        .current_dir(temp_dir.path())
        .env(VERSION_VAR, "9.9.9")
        .args(["patch-version", "--manifest", "custom.nuspec", "--set", "4.5.6"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        "<version>4.5.6</version>\n"
    );
}

#[test]
fn patch_version_without_version_source_fails_and_leaves_manifest_alone() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("native-algorithms.nuspec");
    let original = "<package><metadata><version>0.0.0</version></metadata></package>";
    fs::write(&manifest, original).unwrap();

    build_tools()
        .current_dir(temp_dir.path())
        .arg("patch-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains(VERSION_VAR));

    assert_eq!(fs::read_to_string(&manifest).unwrap(), original);
}

#[test]
fn patch_version_missing_closing_tag_fails_and_leaves_manifest_alone() {
    let temp_dir = TempDir::new().unwrap();
    let manifest = temp_dir.path().join("native-algorithms.nuspec");
    let original = "<package>\n<version>0.0.0\n</package>\n";
    fs::write(&manifest, original).unwrap();

    build_tools()
        .current_dir(temp_dir.path())
        .env(VERSION_VAR, "1.2.3")
        .arg("patch-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed manifest"));

    assert_eq!(fs::read_to_string(&manifest).unwrap(), original);
}

#[test]
fn patch_version_missing_manifest_fails_with_path_in_diagnostic() {
    let temp_dir = TempDir::new().unwrap();

    build_tools()
        .current_dir(temp_dir.path())
        .env(VERSION_VAR, "1.2.3")
        .arg("patch-version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("native-algorithms.nuspec"));
}

#[test]
fn prefix_includes_rewrites_local_includes_only() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let header = root.join("Spectre.ProjectB/Utils.h");
    fs::create_dir_all(header.parent().unwrap()).unwrap();
    fs::write(
        &header,
        "#include \"Helper.h\"\n#include \"Spectre.Core/Base.h\"\n// comment\n",
    )
    .unwrap();

    // Headers outside a Spectre.* directory must not be touched
    let foreign = root.join("ThirdParty/Vendor.h");
    fs::create_dir_all(foreign.parent().unwrap()).unwrap();
    fs::write(&foreign, "#include \"Other.h\"\n").unwrap();

    build_tools()
        .current_dir(root)
        .arg("prefix-includes")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        "#include \"Spectre.ProjectB/Helper.h\"\n#include \"Spectre.Core/Base.h\"\n// comment\n"
    );
    assert_eq!(
        fs::read_to_string(&foreign).unwrap(),
        "#include \"Other.h\"\n"
    );
}

#[test]
fn prefix_includes_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let header = root.join("Spectre.Alpha/Core.h");
    fs::create_dir_all(header.parent().unwrap()).unwrap();
    fs::write(&header, "#include \"Base.h\"\n").unwrap();

    for _ in 0..2 {
        build_tools()
            .current_dir(root)
            .arg("prefix-includes")
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        "#include \"Spectre.Alpha/Base.h\"\n"
    );
}

#[test]
fn prefix_includes_with_explicit_root() {
    let temp_dir = TempDir::new().unwrap();
    let tree = temp_dir.path().join("tree");

    let header = tree.join("Spectre.Beta/Impl.h");
    fs::create_dir_all(header.parent().unwrap()).unwrap();
    fs::write(&header, "#include \"Detail.h\"\n").unwrap();

    build_tools()
        .args(["prefix-includes", "--root"])
        .arg(&tree)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        "#include \"Spectre.Beta/Detail.h\"\n"
    );
}

#[test]
fn prefix_includes_reports_failures_but_processes_the_rest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    // Invalid UTF-8 makes this header unreadable as text
    let bad = root.join("Spectre.A/Bad.h");
    fs::create_dir_all(bad.parent().unwrap()).unwrap();
    fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();

    let good = root.join("Spectre.B/Good.h");
    fs::create_dir_all(good.parent().unwrap()).unwrap();
    fs::write(&good, "#include \"Helper.h\"\n").unwrap();

    build_tools()
        .current_dir(root)
        .arg("prefix-includes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 header file(s) failed"));

    assert_eq!(
        fs::read_to_string(&good).unwrap(),
        "#include \"Spectre.B/Helper.h\"\n"
    );
}

#[test]
fn prefix_includes_missing_root_is_a_configuration_error() {
    build_tools()
        .args(["prefix-includes", "--root", "/nonexistent/spectre/tree"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source tree root not found"));
}
