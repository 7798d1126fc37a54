//! CLI surface tests: argument parsing and fail-fast paths that never
//! reach the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn manifest_with(library_json: &str) -> String {
    format!(
        r#"{{
  "collection": "TestDomains",
  "object_store_url": "http://127.0.0.1:9",
  "blob_store_url": "http://127.0.0.1:9",
  "libraries": [{library_json}],
  "sets": []
}}"#
    )
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("domain-prep")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prepare"))
        .stdout(predicate::str::contains("library"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("verify"));
}

#[test]
fn test_library_unknown_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("prep.json");
    // an empty libraries array means any id is unknown
    std::fs::write(&manifest, manifest_with("")).unwrap();

    Command::cargo_bin("domain-prep")
        .unwrap()
        .args(["library", "no-such-lib", "--manifest"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in the manifest"));
}

#[test]
fn test_library_unknown_source_url_fails_before_any_upload() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("prep.json");
    let library = format!(
        r#"{{
      "id": "Mystery-1.0",
      "source_url": "http://example.org/unknown-db/",
      "library_file": "{}",
      "version": "1.0",
      "release_date": "2014-01-01",
      "domain_prefix": "MYS",
      "dbxref_prefix": "http://example.org/?id="
    }}"#,
        dir.path().join("Mystery").display()
    );
    std::fs::write(&manifest, manifest_with(&library)).unwrap();

    Command::cargo_bin("domain-prep")
        .unwrap()
        .args(["library", "Mystery-1.0", "--manifest"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized source URL"));
}

#[test]
fn test_bad_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("prep.json");
    std::fs::write(&manifest, "{ not json").unwrap();

    Command::cargo_bin("domain-prep")
        .unwrap()
        .args(["set", "All", "--manifest"])
        .arg(&manifest)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse manifest"));
}
