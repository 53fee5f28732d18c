// tests/integration/end_to_end.rs
use std::fs;
use std::path::Path;

use project_snapshot_engine::{
    config::{Config, ConfigBuilder},
    reader::TRUNCATION_MARKER,
    run, write_snapshot,
};

#[path = "../common/mod.rs"]
mod common;
use common::TempProject;

fn config_for(root: &Path, output: &Path) -> Config {
    ConfigBuilder::default()
        .root(root)
        .output_path(output)
        .build()
        .unwrap()
}

fn snapshot(project: &TempProject) -> String {
    let out = tempfile::TempDir::new().unwrap();
    let output = out.path().join("project_code.txt");
    let result = run(&config_for(project.path(), &output)).unwrap();
    write_snapshot(&result, &output).unwrap();
    fs::read_to_string(&output).unwrap()
}

fn included_paths(project: &TempProject) -> Vec<String> {
    let output = project.path().join("project_code.txt");
    run(&config_for(project.path(), &output))
        .unwrap()
        .records
        .into_iter()
        .map(|r| r.relative_path)
        .collect()
}

#[test]
fn prunes_vcs_and_dependency_dirs() {
    let project = TempProject::with_files(&[
        ("README.md", "# Demo\n"),
        (".git/config", "[core]\n"),
        ("node_modules/x.js", "module.exports = 1;\n"),
        ("src/index.ts", "export const a = 1;\n"),
    ]);
    let output = project.path().join("project_code.txt");
    let result = run(&config_for(project.path(), &output)).unwrap();

    let paths: Vec<_> = result.records.iter().map(|r| r.relative_path.as_str()).collect();
    assert_eq!(paths, vec!["README.md", "src/index.ts"]);
    assert_eq!(result.included(), 2);
    assert_eq!(result.skipped, 2);
    assert_eq!(result.total, 4);
}

#[test]
fn artifact_lists_counts_and_sections_in_order() {
    let project = TempProject::with_files(&[
        ("src/index.ts", "export const a = 1;\n"),
        ("README.md", "# Demo\n"),
        ("package.json", "{}\n"),
        (".env", "SECRET=1\n"),
    ]);
    let text = snapshot(&project);

    assert!(text.contains("Included files: 3\n"));
    assert!(text.contains("Skipped files: 1\n"));
    assert!(text.contains("Total files: 4\n"));
    assert!(!text.contains("SECRET=1"));

    let pkg = text.find("FILE 1/3: package.json").unwrap();
    let readme = text.find("FILE 2/3: README.md").unwrap();
    let index = text.find("FILE 3/3: src/index.ts").unwrap();
    assert!(pkg < readme && readme < index);
    assert!(text.contains("Size: 20 chars\nType: .ts\n"));
}

#[test]
fn force_include_and_exclude_rules() {
    let project = TempProject::with_files(&[
        ("Makefile", "all:\n\techo hi\n"),
        ("pnpm-lock.yaml", "lockfileVersion: 9\n"),
        ("bin/run", "#!/bin/sh\necho run\n"),
        ("notes", "hello\n"),
        (".github/workflows/ci.yml", "on: push\n"),
        ("dist/app.js", "bundle\n"),
    ]);
    project.write_bytes("logo.png", &[0x89, b'P', b'N', b'G']);

    let mut paths = included_paths(&project);
    paths.sort();
    assert_eq!(paths, vec![".github/workflows/ci.yml", "Makefile", "bin/run"]);
}

#[test]
fn oversized_files_are_skipped() {
    let project = TempProject::new();
    project.write_file("small.ts", "x");
    project.write_file("huge.ts", &"a".repeat(512 * 1024 + 1));
    assert_eq!(included_paths(&project), vec!["small.ts"]);
}

#[test]
fn long_content_is_truncated_identically() {
    let project = TempProject::new();
    project.write_file("long.txt", &"b".repeat(100_001));

    let output = project.path().join("project_code.txt");
    let first = run(&config_for(project.path(), &output)).unwrap();
    let second = run(&config_for(project.path(), &output)).unwrap();

    let content = &first.records[0].content;
    assert_eq!(content, &format!("{}{TRUNCATION_MARKER}", "b".repeat(100_000)));
    assert_eq!(content, &second.records[0].content);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let project = TempProject::with_files(&[
        ("README.md", "# Demo\n"),
        ("src/a.ts", "a\n"),
        ("src/b.js", "b\n"),
        ("styles/site.css", "body {}\n"),
        ("Dockerfile", "FROM scratch\n"),
    ]);
    let output = project.path().join("project_code.txt");

    let config = config_for(project.path(), &output);
    write_snapshot(&run(&config).unwrap(), &output).unwrap();
    let first = fs::read(&output).unwrap();
    write_snapshot(&run(&config).unwrap(), &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn requirements_document_prefixes_the_artifact() {
    let project = TempProject::with_files(&[("src/a.ts", "a\n")]);
    let docs = tempfile::TempDir::new().unwrap();
    let prd = docs.path().join("PRD.md");
    fs::write(&prd, "Build a chat app.").unwrap();
    let output = docs.path().join("out.txt");

    let config = ConfigBuilder::default()
        .root(project.path())
        .output_path(&output)
        .requirements(Some(prd))
        .build()
        .unwrap();
    write_snapshot(&run(&config).unwrap(), &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("--- PROJECT REQUIREMENTS DOCUMENT ---\nBuild a chat app.\n"));
    assert!(text.contains("--- END PROJECT REQUIREMENTS DOCUMENT ---\n\n===="));
}

#[test]
fn non_utf8_bytes_are_replaced_not_reinterpreted() {
    let project = TempProject::new();
    project.write_bytes("legacy.txt", b"caf\xE9 au lait");
    let text = snapshot(&project);
    assert!(text.contains("FILE 1/1: legacy.txt\nSize: 12 chars\n"));
    assert!(text.contains("caf\u{FFFD} au lait"));
}
