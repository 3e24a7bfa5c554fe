use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;

use readmegen_core::project::load_project;
use tempfile::TempDir;

fn readmegen_cmd(home: &Path, cwd: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("readmegen"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG")
        .current_dir(cwd);
    cmd
}

#[test]
fn init_seeds_badges_from_catalogs() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");

    readmegen_cmd(home.path(), workspace.path())
        .args([
            "init", "--title", "Pocket Ledger", "--tech", "React", "--tech", "Zig++",
            "--status", "Beta",
        ])
        .assert()
        .success()
        .stdout(contains("Created readme.yaml"));

    let info = load_project(&workspace.path().join("readme.yaml")).expect("load");
    assert_eq!(info.title, "Pocket Ledger");
    assert_eq!(info.badges.tech[0].color, "61DAFB");
    assert_eq!(info.badges.tech[1].text, "Zig++");
    assert_eq!(info.badges.tech[1].color, "blue");
    assert_eq!(info.badges.status[0].text, "Beta");
    assert_eq!(info.badges.status[0].color, "orange");
}

#[test]
fn init_keeps_existing_file_without_force() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    fs::write(workspace.path().join("readme.yaml"), "title: Original\n").expect("seed");

    readmegen_cmd(home.path(), workspace.path())
        .args(["init", "--title", "Replacement"])
        .assert()
        .success()
        .stdout(contains("already exists"));
    let info = load_project(&workspace.path().join("readme.yaml")).expect("load");
    assert_eq!(info.title, "Original");

    readmegen_cmd(home.path(), workspace.path())
        .args(["init", "--title", "Replacement", "--force"])
        .assert()
        .success();
    let info = load_project(&workspace.path().join("readme.yaml")).expect("load");
    assert_eq!(info.title, "Replacement");
}

#[test]
fn init_applies_config_defaults() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let config_dir = home.path().join(".readmegen");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(
        config_dir.join("config.yaml"),
        "defaults:\n  author: octocat\n  license: Apache-2.0\n",
    )
    .expect("config");

    readmegen_cmd(home.path(), workspace.path())
        .args(["init", "app.json"])
        .assert()
        .success();
    let info = load_project(&workspace.path().join("app.json")).expect("load");
    assert_eq!(info.author, "octocat");
    assert_eq!(info.license, "Apache-2.0");
    assert_eq!(info.badges.license, "Apache-2.0");
}

#[test]
fn init_rejects_unknown_status() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    readmegen_cmd(home.path(), workspace.path())
        .args(["init", "--status", "Vaporware"])
        .assert()
        .failure()
        .stderr(contains("unknown status"));
    assert!(!workspace.path().join("readme.yaml").exists());
}

#[test]
fn catalog_json_lists_technologies_with_categories() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let assert = readmegen_cmd(home.path(), workspace.path())
        .args(["catalog", "--search", "c++", "--json"])
        .assert()
        .success();
    let rows: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert!(rows.iter().any(|r| r["name"] == "C++"
        && r["logo"] == "cplusplus"
        && r["category"] == "Programming Languages"));
}

#[test]
fn catalog_status_json_has_every_status() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    let assert = readmegen_cmd(home.path(), workspace.path())
        .args(["catalog", "--status", "--json"])
        .assert()
        .success();
    let rows: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(28));
}

#[test]
fn catalog_table_and_unknown_category() {
    let home = TempDir::new().expect("home");
    let workspace = TempDir::new().expect("workspace");
    readmegen_cmd(home.path(), workspace.path())
        .args(["catalog", "--category", "programming languages"])
        .assert()
        .success()
        .stdout(contains("Rust"))
        .stdout(contains("technologies"));

    readmegen_cmd(home.path(), workspace.path())
        .args(["catalog", "--category", "Nope"])
        .assert()
        .failure()
        .stderr(contains("unknown category"));
}
