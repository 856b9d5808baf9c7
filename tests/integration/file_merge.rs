//! Integration tests for parsing and merging real logging.properties files

use super::test_utils::{fixture, scratch_copy, write_file};
use logprops::config::MergeSettings;
use logprops::document::{LoggingProperties, MergeMode};
use logprops::error::MergeError;
use logprops::group::SectionKind;
use logprops::merge::{merge_files, parse_file, write_file as write_document};
use logprops::parse::UnrecognizedLinePolicy;
use tempfile::TempDir;

#[test]
fn test_artemis_default_merged_with_operator_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let target = scratch_copy(&temp_dir, "artemis-default.properties");
    let source = fixture("operator-user.properties");

    let report = merge_files(&target, &source, &MergeSettings::default()).unwrap();

    let expected = std::fs::read_to_string(fixture("artemis-merged.properties")).unwrap();
    assert_eq!(std::fs::read_to_string(&target).unwrap(), expected);
    assert_eq!(report.stats.loggers_added, 1);
    assert_eq!(report.stats.loggers.merged, 1);
    assert_eq!(report.stats.loggers.appended, 1);
    assert_eq!(report.stats.handlers.merged, 1);
    assert_eq!(report.stats.handlers.appended, 1);
    assert_eq!(report.stats.formatters.appended, 1);
    assert_eq!(report.skipped_lines(), 0);
}

#[test]
fn test_merge_is_stable_when_repeated() {
    let temp_dir = TempDir::new().unwrap();
    let target = scratch_copy(&temp_dir, "artemis-default.properties");
    let source = fixture("operator-user.properties");

    merge_files(&target, &source, &MergeSettings::default()).unwrap();
    let first = std::fs::read_to_string(&target).unwrap();
    merge_files(&target, &source, &MergeSettings::default()).unwrap();
    let second = std::fs::read_to_string(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_round_trip_preserves_logical_content() {
    let temp_dir = TempDir::new().unwrap();
    let original = parse_file(&fixture("artemis-default.properties"), UnrecognizedLinePolicy::Skip)
        .unwrap()
        .document;

    let mut merged = original.clone();
    merged
        .merge(LoggingProperties::new(), MergeMode::Incremental)
        .unwrap();
    let written = temp_dir.path().join("round-trip.properties");
    write_document(&merged, &written).unwrap();

    let reparsed = parse_file(&written, UnrecognizedLinePolicy::Skip)
        .unwrap()
        .document;
    assert_eq!(reparsed, original);
}

#[test]
fn test_header_is_kept_from_target_only() {
    let temp_dir = TempDir::new().unwrap();
    let target = write_file(
        &temp_dir,
        "target.properties",
        "# target header line 1\n# target header line 2\n\nloggers=a\nlogger.a.level=INFO\n",
    );
    let source = write_file(
        &temp_dir,
        "source.properties",
        "# a completely different header\n\nloggers=a\nlogger.a.level=WARN\n",
    );

    merge_files(&target, &source, &MergeSettings::default()).unwrap();

    let merged = std::fs::read_to_string(&target).unwrap();
    assert!(merged.starts_with("# target header line 1\n# target header line 2\n\nloggers=a\n"));
    assert!(!merged.contains("completely different"));
    assert!(merged.contains("logger.a.level=WARN\n"));
}

#[test]
fn test_scenario_from_two_small_files() {
    let temp_dir = TempDir::new().unwrap();
    let target = write_file(
        &temp_dir,
        "target.properties",
        "loggers=a\nlogger.a.level=INFO\nhandler.CONSOLE.properties=Y=2\n",
    );
    let source = write_file(
        &temp_dir,
        "source.properties",
        "loggers=b\nlogger.b.level=DEBUG\nhandler.CONSOLE.properties=X=1\n",
    );

    merge_files(&target, &source, &MergeSettings::default()).unwrap();

    let document = parse_file(&target, UnrecognizedLinePolicy::Reject)
        .unwrap()
        .document;
    assert_eq!(document.logger_names().names(), ["a", "b"]);
    assert_eq!(
        document
            .group(SectionKind::Logger, "b")
            .unwrap()
            .get("logger.b.level")
            .unwrap()
            .value(),
        "DEBUG"
    );
    assert_eq!(
        document
            .group(SectionKind::Handler, "CONSOLE")
            .unwrap()
            .get("handler.CONSOLE.properties")
            .unwrap()
            .value(),
        "Y=2,X=1"
    );
}

#[test]
fn test_reject_policy_aborts_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let original = "loggers=a\nlogger.a.level=INFO\n";
    let target = write_file(&temp_dir, "target.properties", original);
    let source = write_file(&temp_dir, "source.properties", "loggers=b\nrootLogger.level=DEBUG\n");

    let settings = MergeSettings {
        unrecognized_lines: UnrecognizedLinePolicy::Reject,
        ..MergeSettings::default()
    };
    let err = merge_files(&target, &source, &settings).unwrap_err();

    assert!(matches!(err, MergeError::UnrecognizedLine { line_number: 2, .. }));
    assert_eq!(std::fs::read_to_string(&target).unwrap(), original);
}

#[test]
fn test_replace_mode_keeps_target_header() {
    let temp_dir = TempDir::new().unwrap();
    let target = scratch_copy(&temp_dir, "artemis-default.properties");
    let source = fixture("operator-user.properties");

    let settings = MergeSettings {
        mode: MergeMode::Replace,
        ..MergeSettings::default()
    };
    merge_files(&target, &source, &settings).unwrap();

    let document = parse_file(&target, UnrecognizedLinePolicy::Reject)
        .unwrap()
        .document;
    assert_eq!(document.header().len(), 5);
    assert_eq!(
        document.logger_names().names(),
        ["org.apache.activemq.audit.base", "org.eclipse.jetty"]
    );
    assert!(document.group(SectionKind::Handler, "FILE").is_none());
    assert!(document.group(SectionKind::Handler, "AUDIT_FILE").is_some());
}
