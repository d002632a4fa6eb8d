use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn write_entity(root: &Path, kind: &str, dir: &str, body: &str) {
    let dir_path = root.join(kind).join(dir);
    std::fs::create_dir_all(&dir_path).expect("create entity dir");
    std::fs::write(dir_path.join("en.json"), body).expect("write en.json");
}

#[test]
fn validate_succeeds_on_a_clean_tree() {
    let tmp = tempdir().expect("tempdir");
    write_entity(
        tmp.path(),
        "characters",
        "yinlin",
        &json!({ "id": "yinlin", "name": "Yinlin", "rarity": 5 }).to_string(),
    );
    write_entity(
        tmp.path(),
        "weapons",
        "verity",
        &json!({ "id": "verity", "name": "Verity", "rarity": null }).to_string(),
    );

    Command::cargo_bin("armory")
        .expect("binary")
        .args(["validate", "--root"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "validate: characters=1 weapons=1 errors=0",
        ));
}

#[test]
fn validate_fails_and_names_the_offending_field() {
    let tmp = tempdir().expect("tempdir");
    write_entity(
        tmp.path(),
        "characters",
        "broken",
        &json!({ "id": "broken", "name": "Broken", "rarity": "five" }).to_string(),
    );
    write_entity(tmp.path(), "characters", "mangled", "{ not json");

    Command::cargo_bin("armory")
        .expect("binary")
        .args(["validate", "--root"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "validate: characters=2 weapons=0 errors=2",
        ))
        .stdout(predicate::str::contains("rarity: expected finite number"))
        .stdout(predicate::str::contains("invalid JSON"));
}

#[test]
fn validate_treats_a_missing_root_as_empty() {
    let tmp = tempdir().expect("tempdir");
    Command::cargo_bin("armory")
        .expect("binary")
        .args(["validate", "--root"])
        .arg(tmp.path().join("nowhere"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "validate: characters=0 weapons=0 errors=0",
        ));
}
