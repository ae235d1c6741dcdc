//! Integration tests for the relq CLI.

#![allow(deprecated)] // cargo_bin deprecation doesn't affect standard builds

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// A small snapshot in the legacy field layout.
const LEGACY_SNAPSHOT: &str = r#"[
    {
        "name": "stdnts1",
        "data": [
            {"id": 1, "name": "ana", "frnd_id": 9, "hob": "chess", "foll": 10},
            {"id": 2, "name": "bo", "frnd_id": 9, "hob": "golf", "foll": 20}
        ],
        "structure": [{"name": "ID", "type": "NUMBER(3)", "nullable": false}]
    },
    {
        "name": "stdnts2",
        "data": [
            {"id": 1, "name": "bo", "frnd_id": 9, "hob": "golf", "foll": 20},
            {"id": 2, "name": "cy", "frnd_id": 9, "hob": "chess", "foll": 1500}
        ],
        "structure": []
    },
    {
        "name": "celebrities",
        "data": [{"id": 1, "name": "star", "frnd_id": 0, "hob": "chess", "foll": 1000000}],
        "structure": []
    }
]"#;

fn relq() -> Command {
    let mut cmd = Command::cargo_bin("relq").unwrap();
    cmd.env_remove("RELQ_DATA").arg("--no-color");
    cmd
}

#[test]
fn test_show_help() {
    Command::cargo_bin("relq")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Relationship Query Tool"));
}

#[test]
fn test_show_version() {
    Command::cargo_bin("relq")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("relq"));
}

#[test]
fn test_friends_seed() {
    relq()
        .args(["friends", "vivek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Person's Friends (2)"))
        .stdout(predicate::str::contains("shashank"))
        .stdout(predicate::str::contains("prateek"));
}

#[test]
fn test_friends_raw_order() {
    relq()
        .args(["friends", "VIVEK", "--raw"])
        .assert()
        .success()
        .stdout("shashank\nprateek\n");
}

#[test]
fn test_friends_other_table() {
    relq()
        .args(["friends", "yashwanth", "--table", "stdnts2", "-r"])
        .assert()
        .success()
        .stdout("pranava\npraneeth\n");
}

#[test]
fn test_friends_person_not_found() {
    relq()
        .args(["friends", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Person nobody not found"));
}

#[test]
fn test_friends_table_not_found_json() {
    let output = relq()
        .args(["friends", "vivek", "-t", "stdnts9", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["columns"], serde_json::json!([]));
    assert_eq!(value["rows"], serde_json::json!([]));
    assert_eq!(value["message"], "Table stdnts9 not found");
}

#[test]
fn test_friend_of_friend_alias() {
    relq()
        .args(["fof", "vivek", "--raw"])
        .assert()
        .success()
        .stdout("prateek\nshashank\n");
}

#[test]
fn test_interests_raw() {
    relq()
        .args(["interests", "dance", "--raw"])
        .assert()
        .success()
        .stdout("A.Arjun\t2,000,000\nsuansh\t346\npranava\t58\n");
}

#[test]
fn test_interests_json() {
    let output = relq()
        .args(["interests", "Dance", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["columns"], serde_json::json!(["NAME", "FOLL"]));
    assert_eq!(value["rows"][0], serde_json::json!(["A.Arjun", "2,000,000"]));
    assert!(value.get("message").is_none());
}

#[test]
fn test_you_may_like() {
    relq()
        .args(["yml", "pranava", "--raw"])
        .assert()
        .success()
        .stdout("G.Selena\t429,000,000\nvivek\t342\n");
}

#[test]
fn test_you_may_like_message_on_stderr_in_raw_mode() {
    relq()
        .args(["you-may-like", "srujan", "--raw"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Person srujan not found"));
}

#[test]
fn test_blank_interest_rejected() {
    relq()
        .args(["interests", "  "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must not be blank"));
}

#[test]
fn test_tables() {
    relq()
        .arg("tables")
        .assert()
        .success()
        .stdout(predicate::str::contains("celebrities"))
        .stdout(predicate::str::contains("stdnts1"))
        .stdout(predicate::str::contains("stdnts2"));
}

#[test]
fn test_show_table() {
    relq()
        .args(["show", "celebrities", "--raw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4\tG.Selena\t0\tmusic\t429,000,000"));
}

#[test]
fn test_show_unknown_table() {
    relq()
        .args(["show", "nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Table not found: 'nope'"));
}

#[test]
fn test_stats() {
    relq()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total people: 23"))
        .stdout(predicate::str::contains("Top interests"));
}

#[test]
fn test_stats_json() {
    let output = relq().args(["stats", "-j"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["connections"], 19);
    assert_eq!(value["top_interests"][0]["hobby"], "dance");
}

#[test]
fn test_data_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("tables.json");
    fs::write(&path, LEGACY_SNAPSHOT).unwrap();

    relq()
        .arg("--data")
        .arg(&path)
        .args(["interests", "chess", "--raw"])
        .assert()
        .success()
        .stdout("star\t1,000,000\ncy\t1,500\n");
}

#[test]
fn test_data_from_env() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("tables.json");
    fs::write(&path, LEGACY_SNAPSHOT).unwrap();

    Command::cargo_bin("relq")
        .unwrap()
        .env("RELQ_DATA", &path)
        .args(["fof", "ana", "--raw"])
        .assert()
        .success()
        .stdout("cy\n");
}

#[test]
fn test_data_from_stdin() {
    relq()
        .args(["--data", "-", "friends", "ana", "--raw"])
        .write_stdin(LEGACY_SNAPSHOT)
        .assert()
        .success()
        .stdout("bo\n");
}

#[test]
fn test_data_file_not_found() {
    relq()
        .args(["--data", "/nonexistent/tables.json", "stats"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_data_file_invalid() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    relq()
        .arg("--data")
        .arg(&path)
        .arg("tables")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid snapshot"));
}

#[test]
fn test_data_file_schema_error_is_located() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("negative.json");
    fs::write(
        &path,
        r#"[{"name": "stdnts2", "rows": [{"id": 1, "name": "ana", "friend_id": 2, "hobby": "chess", "followers": -5}]}]"#,
    )
    .unwrap();

    relq()
        .arg("--data")
        .arg(&path)
        .arg("tables")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected u64"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_missing_required_table() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("one.json");
    fs::write(&path, r#"{"tables": [{"name": "stdnts1", "rows": []}]}"#).unwrap();

    relq()
        .arg("--data")
        .arg(&path)
        .args(["interests", "dance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Table stdnts2 not found"));
}
