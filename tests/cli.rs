//! CLI contract tests for flatcase


use assert_cmd::Command;
use harness::TestTree;
use predicates::prelude::*;

fn flatcase() -> Command {
    Command::cargo_bin("flatcase").expect("binary should build")
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    flatcase()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_arguments_print_usage_and_exit_1() {
    let tree = TestTree::new();
    tree.add_file("Some File", "");

    flatcase()
        .arg(tree.path())
        .arg("extra-positional")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));

    // The usage error must fire before anything on disk is touched.
    assert!(tree.path().join("Some File").is_file());
}

#[test]
fn test_unknown_flag_prints_usage_and_exits_1() {
    flatcase()
        .arg(".")
        .arg("--bogus")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    flatcase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_version_exits_zero() {
    flatcase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flatcase"));
}

#[test]
fn test_json_conflicts_with_quiet() {
    flatcase()
        .arg(".")
        .arg("--json")
        .arg("--quiet")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_no_color_env_disables_colors() {
    let tree = TestTree::new();
    tree.add_file("Some File", "");

    flatcase()
        .arg(tree.path())
        .env("NO_COLOR", "1")
        .env("FORCE_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_force_color_env_enables_colors() {
    let tree = TestTree::new();
    tree.add_file("Some File", "");

    flatcase()
        .arg(tree.path())
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn test_color_never_emits_no_escape_codes() {
    let tree = TestTree::new();
    tree.add_file("Some File", "");

    flatcase()
        .arg(tree.path())
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
