//! Report rendering for the scan command.
//!
//! Supports `text` (default, colored) and `json` outputs. JSON always
//! carries the full report; the `--min-severity` threshold only trims
//! the text view.

use owo_colors::OwoColorize;

use envsweep_core::{Entry, ScanReport, Severity, Suggestion};

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print the report in the requested format.
pub fn print_report(report: &ScanReport, format: &str, min_severity: Option<Severity>) {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(report).unwrap()),
        _ => print_text(report, min_severity),
    }
}

fn print_text(report: &ScanReport, min_severity: Option<Severity>) {
    let color = use_colors();
    let mut identifiers = 0usize;
    let mut suggestions_shown = 0usize;

    for (name, entry) in entries_by_severity(report) {
        let suggestions: Vec<&Suggestion> = entry
            .suggested
            .iter()
            .filter(|s| min_severity.is_none() || s.severity >= min_severity)
            .collect();
        if suggestions.is_empty() && entry.usage.is_empty() {
            continue;
        }
        identifiers += 1;

        let shown_severity = suggestions.iter().filter_map(|s| s.severity).max();
        let label = severity_label(shown_severity, color);
        if color {
            println!("{label} {}", name.bold());
        } else {
            println!("{label} {name}");
        }

        for suggestion in &suggestions {
            suggestions_shown += 1;
            match &suggestion.value {
                Some(value) => println!("    hardcoded in {} = {:?}", suggestion.file, value),
                None => println!("    hardcoded in {}", suggestion.file),
            }
        }
        for file in &entry.usage {
            println!("    read from env in {file}");
        }
    }

    let summary = format!(
        "— Summary — identifiers={} suggestions={} files={} skipped={} in {}ms",
        identifiers,
        suggestions_shown,
        report.stats.files_scanned,
        report.stats.files_skipped,
        report.stats.duration_ms
    );
    if color {
        println!("{}", summary.bold());
    } else {
        println!("{summary}");
    }
}

/// Entries sorted by overall severity (descending), then name.
fn entries_by_severity(report: &ScanReport) -> Vec<(&String, &Entry)> {
    let mut entries: Vec<(&String, &Entry)> = report.entries.iter().collect();
    entries.sort_by(|a, b| {
        b.1.overall_severity()
            .cmp(&a.1.overall_severity())
            .then_with(|| a.0.cmp(b.0))
    });
    entries
}

/// Fixed-width severity column. Entries that only read the environment
/// get an `ENV` tag instead.
fn severity_label(severity: Option<Severity>, color: bool) -> String {
    let label = match severity {
        Some(severity) => severity.name().to_uppercase(),
        None => "ENV".to_string(),
    };
    let padded = format!("{label:<8}");
    if !color {
        return padded;
    }
    match severity {
        Some(Severity::Critical) => padded.red().bold().to_string(),
        Some(Severity::High) => padded.red().to_string(),
        Some(Severity::Medium) => padded.yellow().to_string(),
        Some(Severity::Low) => padded.blue().to_string(),
        None => padded.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envsweep_core::FileReport;

    fn sample_report() -> ScanReport {
        let mut report = ScanReport::new(".");
        let mut a = FileReport::new("a.ts");
        a.record_candidate("stripeKey", Some("sk_live_x".to_string()), Severity::Critical);
        a.record_candidate("cacheDir", None, Severity::Low);
        a.record_usage("AUTH_TOKEN");
        report.merge_file(a);
        report.finalize();
        report
    }

    #[test]
    fn test_sorted_by_severity_then_name() {
        let report = sample_report();
        let names: Vec<&str> = entries_by_severity(&report)
            .into_iter()
            .map(|(name, _)| name.as_str())
            .collect();
        assert_eq!(names, vec!["stripeKey", "cacheDir", "AUTH_TOKEN"]);
    }

    #[test]
    fn test_severity_label_plain() {
        assert_eq!(severity_label(Some(Severity::Critical), false), "CRITICAL");
        assert_eq!(severity_label(Some(Severity::Low), false), "LOW     ");
        assert_eq!(severity_label(None, false), "ENV     ");
    }
}
