use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PUBSPEC: &str = "name: demo\n\nflutter:\n  uses-material-design: true\n  # === Generated Code Start ===\n  # === Generated Code End ===\n";

fn touch(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "pubspec.yaml", PUBSPEC);
    touch(temp.path(), "assets/icons/logo.png", "");
    touch(temp.path(), "assets/data/config.json", "{}");
    touch(temp.path(), "assets/.DS_Store", "");
    temp
}

fn cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pubspec-assets").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_manifest_update() {
    let temp = project();

    cmd(temp.path()).assert().success();

    let pubspec = fs::read_to_string(temp.path().join("pubspec.yaml")).unwrap();
    assert_eq!(
        pubspec,
        "name: demo\n\nflutter:\n  uses-material-design: true\n  # === Generated Code Start ===\n  assets:\n    - assets/data/config.json\n    - assets/icons/logo.png\n  # === Generated Code End ===\n"
    );
}

#[test]
fn test_manifest_update_is_idempotent() {
    let temp = project();

    cmd(temp.path()).assert().success();
    let first = fs::read(temp.path().join("pubspec.yaml")).unwrap();
    cmd(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("unchanged"));
    let second = fs::read(temp.path().join("pubspec.yaml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_project_dir_flag() {
    let temp = project();
    let elsewhere = TempDir::new().unwrap();

    cmd(elsewhere.path())
        .arg("-C")
        .arg(temp.path())
        .assert()
        .success();

    let pubspec = fs::read_to_string(temp.path().join("pubspec.yaml")).unwrap();
    assert!(pubspec.contains("    - assets/icons/logo.png\n"));
}

#[test]
fn test_missing_markers_fail_without_writing() {
    let temp = project();
    touch(temp.path(), "pubspec.yaml", "name: demo\n");

    cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("# === Generated Code Start ==="));

    assert_eq!(
        fs::read_to_string(temp.path().join("pubspec.yaml")).unwrap(),
        "name: demo\n"
    );
}

#[test]
fn test_missing_assets_folder() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "pubspec.yaml", PUBSPEC);

    cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Assets folder not found"));
}

#[test]
fn test_empty_assets_folder() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "pubspec.yaml", PUBSPEC);
    touch(temp.path(), "assets/.DS_Store", "");

    cmd(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Assets folder is empty"));
    assert_eq!(
        fs::read_to_string(temp.path().join("pubspec.yaml")).unwrap(),
        PUBSPEC
    );
}

#[test]
fn test_single_argument_prints_usage() {
    let temp = project();

    cmd(temp.path())
        .arg("AssetImage")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_too_many_arguments() {
    let temp = project();

    cmd(temp.path())
        .args(["AssetImage", "AppImages.images.dart", "extra"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many arguments"));
}

#[test]
fn test_target_must_be_dart() {
    let temp = project();

    cmd(temp.path())
        .args(["AssetImage", "AppImages.images.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".dart"));
    assert!(!temp.path().join("lib").exists());
}

#[test]
fn test_generate_image_constants() {
    let temp = project();
    let target = temp.path().join("lib/res/images.dart");

    cmd(temp.path())
        .args(["AssetImage", "res.AppImages.images.dart"])
        .assert()
        .success()
        .stderr(predicate::str::contains("created"));

    let first = fs::read_to_string(&target).unwrap();
    assert_eq!(
        first,
        "class AppImages {\n  AppImages._();\n\n  // === Generated Code Start ===\n  static const String logo = 'assets/icons/logo.png';\n  // === Generated Code End ===\n}\n"
    );

    cmd(temp.path())
        .args(["AssetImage", "res.AppImages.images.dart"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&target).unwrap(), first);
}

#[test]
fn test_generate_json_loaders_patches_existing_file() {
    let temp = project();
    touch(
        temp.path(),
        "lib/app_json.dart",
        "import 'package:flutter/services.dart' show rootBundle;\n\nclass AppJson {\n  // custom\n  // === Generated Code Start ===\n  // === Generated Code End ===\n}\n",
    );

    cmd(temp.path())
        .args(["JSON", "AppJson.app_json.dart"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("lib/app_json.dart")).unwrap();
    assert!(text.contains("  // custom\n"));
    assert!(text.contains(
        "  static Future<String> loadConfig() => rootBundle.loadString('assets/data/config.json');\n  // === Generated Code End ===\n}\n"
    ));
}

#[test]
fn test_json_report() {
    let temp = project();

    let output = cmd(temp.path()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["mode"], "manifest");
    assert_eq!(report["assets"]["total"], 2);
    assert_eq!(report["files"][0]["outcome"], "patched");
}

#[test]
fn test_config_file_overrides_source_root() {
    let temp = project();
    touch(temp.path(), "pubspec_assets.toml", "source_root = \"lib/gen\"\n");

    cmd(temp.path())
        .args(["AssetImage", "Images.images.dart"])
        .assert()
        .success();

    assert!(temp.path().join("lib/gen/images.dart").exists());
}
