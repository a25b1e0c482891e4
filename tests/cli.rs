#![cfg(feature = "cli")]
use assert_cmd::assert::Assert;
use assert_cmd::Command;
use insta::assert_snapshot;
use rstest::rstest;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const FIXTURES: &str = "tests/fixtures/avpr";

/// Copy fixtures into a fresh `in/` directory next to an empty `out/`.
fn workspace(stems: &[&str]) -> (TempDir, Vec<PathBuf>, PathBuf) {
    let dir = tempdir().unwrap();
    let input_dir = dir.path().join("in");
    let output_dir = dir.path().join("out");
    fs::create_dir(&input_dir).unwrap();
    fs::create_dir(&output_dir).unwrap();

    let inputs = stems
        .iter()
        .map(|stem| {
            let input = input_dir.join(format!("{stem}.avpr"));
            fs::copy(Path::new(FIXTURES).join(format!("{stem}.avpr")), &input).unwrap();
            input
        })
        .collect();

    (dir, inputs, output_dir)
}

fn avpr2rest() -> Command {
    Command::cargo_bin("avpr2rest").unwrap()
}

fn stderr(assert: Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

fn run_fixture(stem: &str) -> String {
    let (_dir, inputs, output_dir) = workspace(&[stem]);

    avpr2rest()
        .args(&inputs)
        .arg(&output_dir)
        .assert()
        .success();

    fs::read_to_string(output_dir.join(format!("{stem}.rst"))).unwrap()
}

#[rstest]
#[case("simple_record")]
#[case("enum_and_fixed")]
#[case("nested_collections")]
#[case("unknown_type_tag")]
fn cli_fixtures(#[case] stem: &str) {
    let output = run_fixture(stem);
    assert!(output.ends_with('\n'));
    assert_snapshot!(stem, output);
}

#[test]
fn writes_one_page_per_input() {
    let (_dir, inputs, output_dir) = workspace(&["simple_record", "enum_and_fixed"]);

    avpr2rest()
        .args(&inputs)
        .arg(&output_dir)
        .assert()
        .success();

    let mut written: Vec<String> = fs::read_dir(&output_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["enum_and_fixed.rst", "simple_record.rst"]);

    let mail = fs::read_to_string(output_dir.join("simple_record.rst")).unwrap();
    assert!(mail.starts_with("Mail\n****\n"));
    assert!(!mail.contains("Checksums"));
}

#[test]
fn invalid_json_stops_the_run() {
    let (_dir, inputs, output_dir) =
        workspace(&["simple_record", "invalid_json", "enum_and_fixed"]);

    let run = avpr2rest()
        .args(&inputs)
        .arg(&output_dir)
        .assert()
        .failure()
        .code(1);
    assert!(stderr(run).contains("invalid_json.avpr"));

    assert!(output_dir.join("simple_record.rst").exists());
    assert!(!output_dir.join("invalid_json.rst").exists());
    assert!(!output_dir.join("enum_and_fixed.rst").exists());
}

#[test]
fn unsupported_field_type_fails() {
    let (_dir, inputs, output_dir) = workspace(&["inline_record_field"]);

    let run = avpr2rest()
        .args(&inputs)
        .arg(&output_dir)
        .assert()
        .failure();
    assert!(stderr(run).contains("Unsupported compound type `record`"));

    assert!(!output_dir.join("inline_record_field.rst").exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempdir().unwrap();

    let run = avpr2rest()
        .arg(dir.path().join("missing.avpr"))
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);
    assert!(stderr(run).contains("Failed to read"));
}

#[rstest]
#[case(&[])]
#[case(&["only_output_dir"])]
fn usage_errors(#[case] args: &[&str]) {
    let run = avpr2rest()
        .args(args)
        .assert()
        .failure()
        .code(2);
    assert!(stderr(run).contains("Usage"));
}

#[test]
fn failed_doc_conversion_writes_nothing() {
    let (dir, inputs, output_dir) = workspace(&["documented"]);
    let empty_path = dir.path().join("empty_path");
    fs::create_dir(&empty_path).unwrap();

    let run = avpr2rest()
        .env("PATH", &empty_path)
        .args(&inputs)
        .arg(&output_dir)
        .assert()
        .failure()
        .code(1);
    assert!(stderr(run).contains("Documentation conversion failed"));

    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
}
