//! Integration tests for the logprops binary.

use super::test_utils::{fixture, scratch_copy, write_file};
use std::ffi::OsStr;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with config lookups confined to `temp_dir`.
fn run(temp_dir: &TempDir, args: &[&OsStr]) -> Output {
    let bin = env!("CARGO_BIN_EXE_logprops");
    Command::new(bin)
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("config"))
        .env_remove("LOGPROPS_LOG")
        .env_remove("LOGPROPS_MERGE__MODE")
        .env_remove("LOGPROPS_MERGE__UNRECOGNIZED_LINES")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_cli_merges_into_target() {
    let temp_dir = TempDir::new().unwrap();
    let target = scratch_copy(&temp_dir, "artemis-default.properties");
    let source = fixture("operator-user.properties");

    let output = run(
        &temp_dir,
        &[
            OsStr::new("--target"),
            target.as_os_str(),
            OsStr::new("--source"),
            source.as_os_str(),
        ],
    );

    assert!(
        output.status.success(),
        "logprops should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loggers added: 1"), "stdout: {}", stdout);
    assert_eq!(
        std::fs::read_to_string(&target).unwrap(),
        std::fs::read_to_string(fixture("artemis-merged.properties")).unwrap()
    );
}

#[test]
fn test_cli_missing_source_names_path_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let target = scratch_copy(&temp_dir, "artemis-default.properties");
    let missing = temp_dir.path().join("does-not-exist.properties");

    let output = run(
        &temp_dir,
        &[
            OsStr::new("--target"),
            target.as_os_str(),
            OsStr::new("--source"),
            missing.as_os_str(),
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.properties"), "stderr: {}", stderr);
}

#[test]
fn test_cli_warns_on_unrecognized_line_but_still_writes() {
    let temp_dir = TempDir::new().unwrap();
    let target = write_file(&temp_dir, "target.properties", "loggers=a\nlogger.a.level=INFO\n");
    let source = write_file(
        &temp_dir,
        "source.properties",
        "loggers=b\nthis is not a property\nlogger.b.level=WARN\n",
    );

    let output = run(
        &temp_dir,
        &[
            OsStr::new("--target"),
            target.as_os_str(),
            OsStr::new("--source"),
            source.as_os_str(),
        ],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipped lines (1):"), "stdout: {}", stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skipping unrecognized line"), "stderr: {}", stderr);
    assert!(std::fs::read_to_string(&target)
        .unwrap()
        .contains("logger.b.level=WARN"));
}

#[test]
fn test_cli_config_file_selects_reject_policy() {
    let temp_dir = TempDir::new().unwrap();
    let original = "loggers=a\nlogger.a.level=INFO\n";
    let target = write_file(&temp_dir, "target.properties", original);
    let source = write_file(&temp_dir, "source.properties", "loggers=b\nbogus\n");
    let config = write_file(
        &temp_dir,
        "logprops.toml",
        "[merge]\nunrecognized_lines = \"reject\"\n",
    );

    let output = run(
        &temp_dir,
        &[
            OsStr::new("--target"),
            target.as_os_str(),
            OsStr::new("--source"),
            source.as_os_str(),
            OsStr::new("--config"),
            config.as_os_str(),
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unrecognized line 2: bogus"), "stderr: {}", stderr);
    assert_eq!(std::fs::read_to_string(&target).unwrap(), original);
}

#[test]
fn test_cli_requires_both_paths() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        &temp_dir,
        &[OsStr::new("--target"), OsStr::new("x.properties")],
    );
    assert!(!output.status.success());
}

#[test]
fn test_cli_info_log_names_both_paths_when_written() {
    let temp_dir = TempDir::new().unwrap();
    let target = write_file(&temp_dir, "target.properties", "loggers=a\nlogger.a.level=INFO\n");
    let source = write_file(&temp_dir, "operator.properties", "loggers=b\nlogger.b.level=WARN\n");

    let output = run(
        &temp_dir,
        &[
            OsStr::new("--target"),
            target.as_os_str(),
            OsStr::new("--source"),
            source.as_os_str(),
            OsStr::new("--log-level"),
            OsStr::new("info"),
            OsStr::new("--log-format"),
            OsStr::new("json"),
        ],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let written = stderr
        .lines()
        .find(|line| line.contains("Merge written"))
        .unwrap_or_else(|| panic!("no completion log: {}", stderr));
    assert!(written.contains(&*target.to_string_lossy()), "line: {}", written);
    assert!(written.contains(&*source.to_string_lossy()), "line: {}", written);
}
