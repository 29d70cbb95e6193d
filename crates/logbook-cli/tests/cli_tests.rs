//! End-to-end tests running the `logbook` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn logbook(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_logbook"))
        .arg("--dir")
        .arg(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run logbook binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_add_list_remove_cycle() {
    let dir = TempDir::new().unwrap();

    let out = logbook(dir.path(), &["add", "-u", "Ojani", "-s", "intro", "-i", "3"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("entry #0: Ojani modified section intro on issue #3"));

    let out = logbook(dir.path(), &["add", "-u", "GabyMarr", "-s", "setup", "-i", "7"]);
    assert!(out.status.success());

    let out = logbook(dir.path(), &["list"]);
    assert_eq!(
        stdout(&out),
        "entry #1: GabyMarr modified section setup on issue #7\n\
         entry #0: Ojani modified section intro on issue #3\n"
    );

    let out = logbook(dir.path(), &["remove", "0"]);
    assert!(out.status.success());
    let report = std::fs::read_to_string(dir.path().join("sections/logbook.adoc")).unwrap();
    assert!(report.contains("[GabyMarr]"));
    assert!(!report.contains("[Ojani]"));
}

#[test]
fn test_unknown_user_fails() {
    let dir = TempDir::new().unwrap();
    let out = logbook(dir.path(), &["add", "-u", "mallory", "-s", "intro", "-i", "3"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("not on the roster"));
    assert!(!dir.path().join("logbook.txt").exists());
}

#[test]
fn test_config_init_then_custom_roster() {
    let dir = TempDir::new().unwrap();
    let out = logbook(dir.path(), &["config", "init"]);
    assert!(out.status.success());
    assert!(dir.path().join("logbook.toml").exists());

    std::fs::write(dir.path().join("logbook.toml"), "roster = [\"alice\"]\n").unwrap();
    let out = logbook(dir.path(), &["roster"]);
    assert_eq!(stdout(&out), "0: alice\n");
}

#[test]
fn test_menu_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_logbook"))
        .arg("--dir")
        .arg(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn logbook binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"a\n21\nfaq\n12\nn\nq\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    assert!(stdout(&out).contains("entry #0: Ojani modified section faq on issue #12"));
}
