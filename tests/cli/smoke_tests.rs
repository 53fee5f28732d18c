use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_project_snapshot"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("project_snapshot"))
        .stdout(predicate::str::contains("--directory"));
}

#[test]
fn writes_snapshot_and_summary() {
    let project = tempfile::TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("src")).unwrap();
    fs::write(project.path().join("src/main.ts"), "console.log(1);\n").unwrap();
    fs::write(project.path().join("photo.jpg"), [0xFF, 0xD8]).unwrap();
    let output = project.path().join("snapshot.txt");

    Command::new(env!("CARGO_BIN_EXE_project_snapshot"))
        .arg("-d")
        .arg(project.path())
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Included: src/main.ts"))
        .stdout(predicate::str::contains("Included files: 1"))
        .stdout(predicate::str::contains("Skipped files: 1"))
        .stdout(predicate::str::contains(".ts: 1 file(s)"));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("FILE 1/1: src/main.ts"));
    assert!(text.contains("console.log(1);"));
}

#[test]
fn defaults_to_current_directory() {
    let project = tempfile::TempDir::new().unwrap();
    fs::write(project.path().join("index.js"), "let x;\n").unwrap();

    Command::new(env!("CARGO_BIN_EXE_project_snapshot"))
        .current_dir(project.path())
        .assert()
        .success();

    let text = fs::read_to_string(project.path().join("project_code.txt")).unwrap();
    assert!(text.contains("FILE 1/1: index.js"));
    assert!(text.contains("Total files: 1\n"));
}

#[test]
fn missing_directory_fails() {
    let project = tempfile::TempDir::new().unwrap();
    let output = project.path().join("out.txt");

    Command::new(env!("CARGO_BIN_EXE_project_snapshot"))
        .arg("-d")
        .arg(project.path().join("absent"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(!output.exists());
}

#[test]
fn unwritable_output_fails() {
    let project = tempfile::TempDir::new().unwrap();
    fs::write(project.path().join("a.ts"), "a\n").unwrap();

    Command::new(env!("CARGO_BIN_EXE_project_snapshot"))
        .arg("-d")
        .arg(project.path())
        .arg("-o")
        .arg(project.path().join("no/such/dir/out.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write snapshot"));
}
