//! `.env` template generation from a scan report.

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use envsweep_core::words::normalize;
use envsweep_core::{Entry, ScanReport, Severity};

/// Render the template text: one line per variable, annotated with the
/// severity and files each name came from.
///
/// Identifiers are re-keyed to env-style names, so `apiKey` and
/// `API_KEY` collapse into one `API_KEY=` line.
pub fn render(report: &ScanReport, min_severity: Option<Severity>) -> String {
    let mut vars: BTreeMap<String, Vec<(&String, &Entry)>> = BTreeMap::new();
    for (name, entry) in &report.entries {
        let qualifies = !entry.usage.is_empty()
            || entry
                .suggested
                .iter()
                .any(|s| min_severity.is_none() || s.severity >= min_severity);
        if qualifies {
            vars.entry(normalize(name).to_uppercase())
                .or_default()
                .push((name, entry));
        }
    }

    let mut out = String::from("# Generated by envsweep\n");
    for (env_name, sources) in &vars {
        out.push('\n');
        for (name, entry) in sources {
            if let Some(severity) = entry.overall_severity() {
                let files: Vec<&str> = entry.suggested.iter().map(|s| s.file.as_str()).collect();
                out.push_str(&format!(
                    "# {} hardcoded as `{}` in {}\n",
                    severity.name(),
                    name,
                    files.join(", ")
                ));
            }
            if !entry.usage.is_empty() {
                out.push_str(&format!("# read by {}\n", entry.usage.join(", ")));
            }
        }
        out.push_str(&format!("{env_name}=\n"));
    }
    out
}

/// Write the rendered template, refusing to clobber an existing file
/// unless `force` is set.
pub fn write_template(
    report: &ScanReport,
    out_path: &Path,
    force: bool,
    min_severity: Option<Severity>,
) -> Result<()> {
    if out_path.exists() && !force {
        bail!(
            "{} already exists (pass --force to overwrite)",
            out_path.display()
        );
    }
    fs::write(out_path, render(report, min_severity))
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use envsweep_core::FileReport;

    fn sample_report() -> ScanReport {
        let mut report = ScanReport::new(".");
        let mut config = FileReport::new("src/config.ts");
        config.record_candidate("apiKey", Some("sk_live_x".to_string()), Severity::Critical);
        config.record_candidate("cacheDir", None, Severity::Low);
        report.merge_file(config);

        let mut auth = FileReport::new("src/auth.ts");
        auth.record_usage("AUTH_TOKEN");
        report.merge_file(auth);

        report.finalize();
        report
    }

    #[test]
    fn test_render_lists_usage_and_suggestions() {
        let rendered = render(&sample_report(), None);
        assert!(rendered.contains("API_KEY=\n"));
        assert!(rendered.contains("CACHE_DIR=\n"));
        assert!(rendered.contains("AUTH_TOKEN=\n"));
        assert!(rendered.contains("# critical hardcoded as `apiKey` in src/config.ts"));
        assert!(rendered.contains("# read by src/auth.ts"));
    }

    #[test]
    fn test_min_severity_drops_low_suggestions() {
        let rendered = render(&sample_report(), Some(Severity::High));
        assert!(rendered.contains("API_KEY=\n"));
        assert!(!rendered.contains("CACHE_DIR="));
        // Usage entries always make it into the template
        assert!(rendered.contains("AUTH_TOKEN=\n"));
    }

    #[test]
    fn test_write_refuses_to_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join(".env.example");
        fs::write(&out, "existing").unwrap();

        let report = sample_report();
        assert!(write_template(&report, &out, false, None).is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "existing");

        write_template(&report, &out, true, None).unwrap();
        assert!(fs::read_to_string(&out).unwrap().contains("API_KEY="));
    }
}
