use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();
    let d = &report.data;

    out.push_str("# Commitguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Window: `{}` .. `{}`\n- Commits: {} (in window) / {} (total)\n- Checks: {} run, {} failed\n\n",
        verdict,
        d.profile,
        d.window_start,
        d.window_end,
        d.commits_in_window,
        d.commits_total,
        d.checks_run,
        d.checks_failed
    ));

    if report.checks.is_empty() {
        out.push_str("No checks ran.\n");
        return out;
    }

    out.push_str("| Check | Result |\n|---|---|\n");
    for c in &report.checks {
        let result = if c.passed { "pass" } else { "**fail**" };
        out.push_str(&format!("| `{}` | {} |\n", c.name, result));
    }

    let noteworthy: Vec<_> = report
        .checks
        .iter()
        .flat_map(|c| c.diagnostics.iter().map(move |diag| (c, diag)))
        .filter(|(_, diag)| diag.severity != RenderableSeverity::Info)
        .collect();

    if noteworthy.is_empty() {
        return out;
    }

    out.push_str("\n## Diagnostics\n\n");
    for (c, diag) in noteworthy {
        let sev = match diag.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };
        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}\n",
            sev, c.name, diag.code, diag.message
        ));
        if let Some(help) = &diag.help {
            out.push_str("  ```text\n");
            for line in help.lines() {
                out.push_str(&format!("  {line}\n"));
            }
            out.push_str("  ```\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableCheck, RenderableData, RenderableDiagnostic};

    fn data() -> RenderableData {
        RenderableData {
            profile: "standard".to_string(),
            window_start: "2025-03-01T09:00:00Z".to_string(),
            window_end: "2025-03-02T09:00:00Z".to_string(),
            commits_total: 6,
            commits_in_window: 6,
            checks_run: 2,
            checks_failed: 1,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            checks: Vec::new(),
            data: data(),
        };
        let md = render_markdown(&report);
        assert!(md.contains("No checks ran"));
    }

    #[test]
    fn renders_table_and_non_info_diagnostics() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            checks: vec![
                RenderableCheck {
                    name: "marker.present".to_string(),
                    passed: false,
                    diagnostics: vec![RenderableDiagnostic {
                        severity: RenderableSeverity::Error,
                        code: "marker_missing".to_string(),
                        message: "marker file `.commitguard-start` not found".to_string(),
                        help: Some("Create it:\n  git add .commitguard-start".to_string()),
                    }],
                },
                RenderableCheck {
                    name: "history.integrity".to_string(),
                    passed: true,
                    diagnostics: vec![RenderableDiagnostic {
                        severity: RenderableSeverity::Info,
                        code: "operation_log_read".to_string(),
                        message: "operation log read: 3 entries".to_string(),
                        help: None,
                    }],
                },
            ],
            data: data(),
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("| `marker.present` | **fail** |"));
        assert!(md.contains("| `history.integrity` | pass |"));
        assert!(md.contains("## Diagnostics"));
        assert!(md.contains("[ERROR] `marker.present` / `marker_missing`"));
        assert!(md.contains("    git add .commitguard-start\n"));
        assert!(!md.contains("operation log read"));
    }

    #[test]
    fn omits_diagnostics_section_when_only_info() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            checks: vec![RenderableCheck {
                name: "window.bounds".to_string(),
                passed: true,
                diagnostics: Vec::new(),
            }],
            data: data(),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(!md.contains("## Diagnostics"));
    }
}
