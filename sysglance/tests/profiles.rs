//! Profile persistence through the binary (non-interactive paths only)
use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn run_sysglance(config_home: &Path, args: &[&str]) -> (bool, String) {
    let output = Command::cargo_bin("sysglance")
        .expect("binary exists")
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .output()
        .expect("run sysglance");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    (output.status.success(), text)
}

fn profiles_path(config_home: &Path) -> PathBuf {
    config_home.join("sysglance").join("profiles.json")
}

#[test]
fn test_profile_created_on_first_use() {
    let td = tempfile::tempdir().unwrap();
    let (ok, out) = run_sysglance(
        td.path(),
        &["--profile", "unittest", "http://example:1/system-info", "--dry-run"],
    );
    assert!(ok, "{out}");
    let data = fs::read_to_string(profiles_path(td.path())).expect("profiles.json created");
    assert!(data.contains("unittest"), "profiles.json missing profile entry: {data}");
}

#[test]
fn test_profile_overwrite_only_when_changed() {
    let td = tempfile::tempdir().unwrap();
    run_sysglance(td.path(), &["--profile", "prod", "http://one/system-info", "--dry-run"]);
    let first = fs::read_to_string(profiles_path(td.path())).unwrap();

    // identical input: nothing to overwrite, no prompt
    run_sysglance(td.path(), &["--profile", "prod", "http://one/system-info", "--dry-run"]);
    let second = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert_eq!(first, second, "Profile file changed despite identical input");

    // --save skips the confirmation prompt
    run_sysglance(
        td.path(),
        &["--profile", "prod", "--save", "http://two/system-info", "--dry-run"],
    );
    let third = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(third.contains("two"), "Updated URL not written: {third}");
}

#[test]
fn test_profile_interval_persisted_and_loaded() {
    let td = tempfile::tempdir().unwrap();
    run_sysglance(
        td.path(),
        &["--profile", "lab", "-i", "20", "http://lab:5000/system-info", "--dry-run"],
    );
    let data = fs::read_to_string(profiles_path(td.path())).unwrap();
    assert!(data.contains("\"interval_secs\": 20"), "{data}");

    // name alone loads the stored entry
    let (ok, out) = run_sysglance(td.path(), &["--profile", "lab", "--dry-run"]);
    assert!(ok, "{out}");
    assert!(out.contains("endpoint: http://lab:5000/system-info"), "{out}");
    assert!(out.contains("interval: 20s"), "{out}");
}

#[test]
fn test_selection_menu_offers_demo() {
    let td = tempfile::tempdir().unwrap();
    run_sysglance(td.path(), &["--profile", "lab", "http://lab:5000/system-info", "--dry-run"]);

    // entries: 1. lab, 2. demo
    let output = assert_cmd::Command::cargo_bin("sysglance")
        .expect("binary exists")
        .env("XDG_CONFIG_HOME", td.path())
        .arg("--dry-run")
        .write_stdin("2\n")
        .output()
        .expect("run sysglance");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stdout}{stderr}");
    assert!(stderr.contains("2. demo"), "{stderr}");
    assert!(stdout.contains("endpoint: http://127.0.0.1:5231/system-info"), "{stdout}");
}
