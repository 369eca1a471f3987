use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use predicates::prelude::predicate;

fn dungsem() -> Command {
    Command::cargo_bin("dungsem").unwrap()
}

#[test]
fn test_generate_classic() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("nixon.json");
    dungsem()
        .args(["generate", "--classic", "nixon_diamond", "-o"])
        .arg(file.path())
        .assert()
        .success();
    file.assert(predicate::str::contains("\"quaker\""));
    dungsem()
        .args(["solve", "-p", "EE-PR", "-f"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("[quaker,pacifist]\n[republican,hawk]\n"));
}

#[test]
fn test_generate_unknown_classic() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("af.json");
    dungsem()
        .args(["generate", "--classic", "unknown", "-o"])
        .arg(file.path())
        .assert()
        .failure();
    file.assert(predicate::path::missing());
}

#[test]
fn test_generate_random_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let first = dir.child("first.tgf");
    let second = dir.child("second.tgf");
    for file in [&first, &second] {
        dungsem()
            .args([
                "generate",
                "--random",
                "8",
                "--probability",
                "0.3",
                "--seed",
                "42",
                "-w",
                "tgf",
                "-o",
            ])
            .arg(file.path())
            .assert()
            .success();
    }
    let first_content = std::fs::read_to_string(first.path()).unwrap();
    let second_content = std::fs::read_to_string(second.path()).unwrap();
    assert_eq!(first_content, second_content);
    assert!(first_content.starts_with("0 0\n1 1\n"));
}

#[test]
fn test_generate_random_errors() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("af.json");
    dungsem()
        .args(["generate", "--random", "4", "--probability", "1.5", "--seed", "1", "-o"])
        .arg(file.path())
        .assert()
        .failure();
    dungsem()
        .args(["generate", "--random", "4", "-o"])
        .arg(file.path())
        .assert()
        .failure();
    dungsem()
        .args(["generate", "-o"])
        .arg(file.path())
        .assert()
        .failure();
    file.assert(predicate::path::missing());
}

#[test]
fn test_generate_dot() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("triangle.dot");
    dungsem()
        .args(["generate", "--classic", "triangle", "-w", "dot", "-o"])
        .arg(file.path())
        .assert()
        .success();
    file.assert(predicate::str::starts_with("digraph {\n"));
}

#[test]
fn test_analyze() {
    let dir = TempDir::new().unwrap();
    let input = dir.child("self_attacking.json");
    input
        .write_str(r#"{"arguments": ["x", "y"], "attacks": [["x", "x"], ["x", "y"]]}"#)
        .unwrap();
    let report = dir.child("report.json");
    dungsem()
        .args(["analyze", "-f"])
        .arg(input.path())
        .arg("-o")
        .arg(report.path())
        .assert()
        .success();
    let content = std::fs::read_to_string(report.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(serde_json::json!(["x"]), value["properties"]["self_attacking_arguments"]);
    assert_eq!(serde_json::json!([]), value["grounded"]["classical"]);
    assert_eq!(serde_json::json!(["y"]), value["grounded"]["enhanced"]);
    assert_eq!(serde_json::json!(false), value["relationships"]["has_stable"]);
}

#[test]
fn test_check() {
    let dir = TempDir::new().unwrap();
    let input = dir.child("af.tgf");
    input.write_str("a\nb\n#\na b\n").unwrap();
    dungsem()
        .args(["check", "-f"])
        .arg(input.path())
        .assert()
        .success();
    dungsem()
        .args(["check", "-r", "json", "-f"])
        .arg(input.path())
        .assert()
        .failure();
}
