//! CLI integration tests for base-emoji
//!
//! Tests the binary as a user would interact with it.

use assert_cmd::Command;
use predicates::prelude::*;

fn base_emoji() -> Command {
    Command::cargo_bin("base-emoji").unwrap()
}

#[test]
fn test_help() {
    base_emoji()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Base-emoji encode or decode"));
}

#[test]
fn test_version() {
    base_emoji()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-emoji"));
}

#[test]
fn test_list_alphabet() {
    base_emoji()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1024 symbols"))
        .stdout(predicate::str::contains("Padding markers"))
        .stdout(predicate::str::contains("Armor symbols"));
}

#[test]
fn test_encode_decode_round_trip() {
    let encoded = base_emoji()
        .write_stdin("hello world")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_emoji()
        .arg("--decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("hello world");
}

#[test]
fn test_encode_output_ends_with_newline() {
    let output = base_emoji()
        .write_stdin("hi!")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert!(output.ends_with(b"\n"));
}

#[test]
fn test_armored_round_trip() {
    let encoded = base_emoji()
        .args(["--armor", "--descriptor", "backup"])
        .write_stdin("some payload")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let encoded_text = String::from_utf8(encoded.clone()).unwrap();
    assert!(encoded_text.contains("backup"));

    base_emoji()
        .arg("--decode")
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("some payload");
}

#[test]
fn test_wrap_zero_disables_wrapping() {
    let output = base_emoji()
        .args(["--wrap", "0"])
        .write_stdin(vec![b'x'; 200])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    // Only the final newline the CLI itself appends
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn test_decode_string_format() {
    let encoded = base_emoji()
        .write_stdin("hi!")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    base_emoji()
        .args(["--decode", "--format", "string"])
        .write_stdin(encoded)
        .assert()
        .success()
        .stdout("hi!");
}

#[test]
fn test_decode_invalid_format_fails() {
    base_emoji()
        .args(["--decode", "--format", "hex"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid output format 'hex'"));
}

#[test]
fn test_decode_garbage_fails_without_flag() {
    base_emoji()
        .arg("--decode")
        .write_stdin("not emoji at all")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol"));
}

#[test]
fn test_decode_garbage_ignored_with_flag() {
    let encoded = base_emoji()
        .write_stdin("hi!")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let mut noisy = String::from_utf8(encoded).unwrap();
    noisy.insert_str(0, "junk ");

    base_emoji()
        .args(["--decode", "--ignore-garbage"])
        .write_stdin(noisy)
        .assert()
        .success()
        .stdout("hi!");
}

#[test]
fn test_missing_file_fails() {
    base_emoji()
        .arg("/no/such/file")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"));
}
