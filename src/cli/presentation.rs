//! Presentation: merge report formatter.

use crate::document::MergeMode;
use crate::group::SectionKind;
use crate::merge::MergeReport;

pub fn format_merge_report(report: &MergeReport) -> String {
    let stats = &report.stats;
    let mut s = format!(
        "Merged {} into {}",
        report.source.display(),
        report.target.display()
    );

    match stats.mode {
        MergeMode::Replace => {
            s.push_str(" (replace mode)");
            s.push_str(&format!("\n  Loggers declared: {}", stats.loggers_added));
        }
        MergeMode::Incremental => {
            s.push_str(&format!("\n  Loggers added: {}", stats.loggers_added));
        }
    }

    for kind in SectionKind::ALL {
        let section = stats.section(kind);
        s.push_str(&format!(
            "\n  {} groups: {} merged, {} appended",
            kind, section.merged, section.appended
        ));
    }

    if report.skipped_lines() > 0 {
        s.push_str(&format!("\n\nSkipped lines ({}):", report.skipped_lines()));
        for w in &report.target_warnings {
            s.push_str(&format!("\n  - {}: {}", report.target.display(), w));
        }
        for w in &report.source_warnings {
            s.push_str(&format!("\n  - {}: {}", report.source.display(), w));
        }
    }
    s
}
